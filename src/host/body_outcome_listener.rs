use crate::prelude::*;

/// Rust listens on this object for the host to finish draining a response
/// body, the second and last suspension point of a session call.
#[derive(Object)]
pub struct BodyOutcomeListener {
    listener: HostCallbackListener<BodyOutcome>,
}

impl BodyOutcomeListener {
    pub(crate) fn new(listener: HostCallbackListener<BodyOutcome>) -> Self {
        Self { listener }
    }
}

#[export]
impl BodyOutcomeListener {
    /// Called by the host when the body read it was handed in
    /// [`HostPendingFetch::read_body`] has finished, with the
    /// [`BodyOutcome`]. MUST be called exactly once.
    pub fn notify_outcome(&self, outcome: BodyOutcome) {
        self.listener.notify(outcome);
    }
}
