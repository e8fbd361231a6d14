use serde::{Deserialize, Serialize};

use crate::DescryError;

/// URLs of the pages held by the tester's sample store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleList {
    pub list: Vec<String>,
}

/// What the tester answers sample-store calls with: the listing, or a
/// failure object sent with a 200 status.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SampleReply {
    List(SampleList),
    Failed {
        #[serde(rename = "Error")]
        error: String,
    },
}

impl SampleReply {
    /// Decodes the first JSON document of a reply body.
    ///
    /// A failed flush writes the error object followed by the listing, so
    /// the body may hold more than one document. The first one decides.
    pub(crate) fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        match serde_json::Deserializer::from_str(body)
            .into_iter::<SampleReply>()
            .next()
        {
            Some(reply) => reply,
            // no document at all: let the decoder report it
            None => serde_json::from_str(body),
        }
    }
}

impl TryFrom<SampleReply> for SampleList {
    type Error = DescryError;

    fn try_from(reply: SampleReply) -> Result<Self, Self::Error> {
        match reply {
            SampleReply::List(list) => Ok(list),
            SampleReply::Failed { error } => Err(DescryError::ServiceError(error)),
        }
    }
}
