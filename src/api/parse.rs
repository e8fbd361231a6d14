use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::Value;

use crate::models::parse::ParseRequest;
use crate::{DescryClient, DescryResult};

/// Header the pattern service reads the document origin from.
const SOURCE_HEADER: &str = "X-Source";

/// Request to apply the server's pattern tree to an HTML document.
#[derive(Debug, Clone)]
pub struct ParseBuilder {
    client: DescryClient,
    origin: String,
    data: String,
    gzip: bool,
}

impl ParseBuilder {
    pub(crate) fn new(client: DescryClient) -> Self {
        Self {
            client,
            origin: String::new(),
            data: String::new(),
            gzip: false,
        }
    }

    /// URL the document came from. Patterns whose URL rules reject it are
    /// skipped.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// The HTML document.
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    /// Sends the document gzip-compressed to `/parse-gzip` instead of as
    /// JSON to `/parse`. The origin still travels in the `X-Source` header.
    pub fn gzip(mut self, gzip: bool) -> Self {
        self.gzip = gzip;
        self
    }

    /// Sends the document and returns whatever JSON the server produced.
    ///
    /// A body that is not JSON comes back as a JSON string.
    pub async fn send(self) -> DescryResult<Value> {
        let request = if self.gzip {
            let compressed = compress(&self.data)?;
            self.client
                .request(Method::POST, "/parse-gzip")?
                .header(SOURCE_HEADER, self.origin.as_str())
                .header(CONTENT_TYPE, "application/gzip")
                .body(compressed)
        } else {
            let body = ParseRequest {
                origin: self.origin,
                data: self.data,
            };
            self.client
                .request(Method::POST, "/parse")?
                .header(SOURCE_HEADER, body.origin.as_str())
                .json(&body)
        };

        let text = self.client.send_text(request).await?;
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

fn compress(data: &str) -> DescryResult<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data.as_bytes())?;
    Ok(encoder.finish()?)
}
