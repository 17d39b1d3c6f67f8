use crate::prelude::*;

/// A fetch operation that has settled host side.
///
/// Status and headers are readable synchronously once settled; draining
/// the body is a second asynchronous step, mirroring an
/// `arrayBuffer()`-style accessor. Headers are enumerated in whatever
/// order and casing the host reports.
#[uniffi::export(with_foreign)]
pub trait HostPendingFetch: Send + Sync {
    fn status(&self) -> u16;

    fn headers(&self) -> HashMap<String, String>;

    /// Asks the host to drain the body into an owned byte buffer. The host
    /// reports completion through `listener`, exactly once.
    fn read_body(&self, listener: Arc<BodyOutcomeListener>) -> Result<(), HostFetchError>;
}
