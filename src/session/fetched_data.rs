use crate::prelude::*;

/// What a completed session call yields: the drained body bytes and the
/// response metadata. There is no partial-success state, a call produces
/// both or fails.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct FetchedData {
    pub body: Vec<u8>,
    pub response: UrlResponse,
}
