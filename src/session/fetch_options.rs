use crate::prelude::*;

/// The transport-native options object handed to the host fetch primitive,
/// built fresh from a [`UrlRequest`] for every call.
///
/// `body` is attached only when the request carries one; conversion of the
/// bytes into the host's binary-blob representation happens host side.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
    pub mode: String,
}
