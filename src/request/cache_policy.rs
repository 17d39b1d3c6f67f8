use crate::prelude::*;

/// Per-request caching hint. Carried on every [`UrlRequest`] and forwarded
/// with the call, but never enforced by this crate: the host transport
/// fully owns actual caching behavior.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CachePolicy {
    UseProtocolCachePolicy,
    ReloadIgnoringLocalCacheData,
    /// Not implemented by known host transports, carried for completeness.
    ReloadIgnoringLocalAndRemoteCacheData,
    ReturnCacheDataElseLoad,
    ReturnCacheDataDontLoad,
    /// Not implemented by known host transports, carried for completeness.
    ReloadRevalidatingCacheData,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::UseProtocolCachePolicy
    }
}
