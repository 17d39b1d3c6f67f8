use crate::prelude::*;

/// Rust side of one host callback: holds the sending half of a oneshot
/// channel and hands the notified value over to the awaiting session call.
///
/// Wrapped by the exported listener objects ([`FetchSettledListener`],
/// [`BodyOutcomeListener`]) so each FFI surface stays a concrete type while
/// the take-once bridging logic lives here.
pub struct HostCallbackListener<R> {
    sender: Mutex<Option<Sender<R>>>,
}

impl<R> HostCallbackListener<R> {
    pub(crate) fn new(sender: Sender<R>) -> Self {
        Self {
            sender: Mutex::new(Some(sender)),
        }
    }

    /// Called (through an exported listener object) from the host when the
    /// operation it was handed has finished.
    pub(crate) fn notify(&self, value: R) {
        self.sender
            .lock()
            .expect("Should only access sender Mutex once.")
            .take()
            .expect("The host MUST NOT notify a listener twice.")
            .send(value)
            .map_err(|_| ())
            .expect("Receiver must be kept alive until the host notifies.")
    }
}
