use crate::prelude::*;
use thiserror::Error as ThisError;

/// Misuse of the session lifecycle. These fail immediately at the call
/// site and are never retried: the shared session is installed exactly
/// once and cannot be reconfigured afterwards.
#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum ConfigurationError {
    #[error("A shared fetch session has already been installed")]
    SharedSessionAlreadyInstalled,

    #[error("No shared fetch session has been installed")]
    SharedSessionNotInstalled,
}
