use crate::prelude::*;

/// The metadata of one completed transport call, reconstructed from the
/// settled host operation.
///
/// Header names are stored exactly as the host enumerates them, with no
/// re-normalization and no ordering guarantee. This is asymmetric with the
/// title-casing on the request side and intentionally left that way, since
/// callers observe the host's casing.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct UrlResponse {
    pub status_code: u16,
    pub url: String,
    pub headers: HashMap<String, String>,
}
