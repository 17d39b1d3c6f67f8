use crate::prelude::*;
use thiserror::Error as ThisError;

/// Failures reported by the host transport, passed through to the caller
/// unchanged. Produced host side, so every variant crosses the FFI boundary.
#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum HostFetchError {
    #[error("Host failed to form a URL from string: '{url}'")]
    FailedToCreateUrl { url: String },

    #[error(
        "Host fetch rejected with reason: '{}', status code: '{:?}'",
        reason,
        status_code
    )]
    FetchFailed {
        reason: String,
        status_code: Option<u16>,
    },

    #[error("Host failed to read the response body: '{reason}'")]
    BodyReadFailed { reason: String },
}

/// Failures originating on the Rust side of the bridge, i.e. the host
/// dropped a listener without ever notifying it, or the request could not
/// be translated in the first place.
#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum SessionSideError {
    #[error("Request has no URL")]
    RequestMissingUrl,

    #[error("Failed to receive fetch settle notification from host")]
    FailedToReceiveSettleFromHost,

    #[error("Failed to receive response body from host")]
    FailedToReceiveBodyFromHost,
}

/// Failure of one public session operation. No retries, no partial
/// responses: a call either yields a complete `FetchedData` or one of
/// these.
#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum TransportError {
    #[error(transparent)]
    FromHost {
        #[from]
        error: HostFetchError,
    },

    #[error(transparent)]
    FromSession {
        #[from]
        error: SessionSideError,
    },
}
