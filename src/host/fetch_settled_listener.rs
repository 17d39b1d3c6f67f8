use crate::prelude::*;

/// What the host settles the fetch call with: the pending operation on
/// success, the host's rejection otherwise.
pub(crate) type SettledOutcome = Result<Arc<dyn HostPendingFetch>, HostFetchError>;

/// Rust listens on this object for the host fetch call to settle.
///
/// The host calls exactly one of [`Self::notify_settled`] and
/// [`Self::notify_failure`], exactly once. A `Result` cannot cross the FFI
/// boundary directly, and the success value is an interface rather than
/// plain data, so the two arms are separate methods instead of an outcome
/// enum.
#[derive(Object)]
pub struct FetchSettledListener {
    listener: HostCallbackListener<SettledOutcome>,
}

impl FetchSettledListener {
    pub(crate) fn new(listener: HostCallbackListener<SettledOutcome>) -> Self {
        Self { listener }
    }
}

#[export]
impl FetchSettledListener {
    /// Called by the host once the fetch has a settled response, before any
    /// body bytes have been read.
    pub fn notify_settled(&self, operation: Arc<dyn HostPendingFetch>) {
        self.listener.notify(Ok(operation));
    }

    /// Called by the host when the fetch call is rejected (network failure,
    /// malformed URL, CORS rejection).
    pub fn notify_failure(&self, error: HostFetchError) {
        self.listener.notify(Err(error));
    }
}
