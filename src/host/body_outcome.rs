use crate::prelude::*;

/// Result of the host draining a response body. A bare `Result` cannot be
/// passed across the FFI boundary, so this enum stands in for it.
#[derive(Enum, Clone, Debug)]
pub enum BodyOutcome {
    Success { body: Vec<u8> },
    Failure { error: HostFetchError },
}

impl From<BodyOutcome> for Result<Vec<u8>, HostFetchError> {
    fn from(value: BodyOutcome) -> Self {
        match value {
            BodyOutcome::Success { body } => Ok(body),
            BodyOutcome::Failure { error } => Err(error),
        }
    }
}
