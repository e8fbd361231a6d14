// Export submodules
pub mod check;
pub mod parse;
pub mod patterns;
pub mod projects;
pub mod samples;

use url::Url;

use crate::{DescryClient, DescryResult};

/// Builds the `/pattern/{title}` URL for a pattern title.
///
/// Titles may contain `/` to address patterns in sub-directories. Every other
/// character is part of the file name and gets percent-encoded.
pub(crate) fn pattern_url(client: &DescryClient, title: &str) -> DescryResult<Url> {
    client.segment_url("/pattern", title.split('/'))
}
