use crate::prelude::*;

/// The single fetch primitive the embedding runtime provides, e.g. the
/// global `fetch` of a JavaScript host or `URLSession` on an Apple host.
///
/// Rust hands it a URL string, translated call options and a listener; the
/// host starts exactly one fetch and later settles the listener with either
/// the pending operation or a failure. A synchronous rejection (e.g. the
/// host cannot even form a URL from the string) is returned directly.
#[uniffi::export(with_foreign)]
pub trait HostFetch: Send + Sync {
    fn fetch(
        &self,
        url: String,
        options: FetchOptions,
        listener: Arc<FetchSettledListener>,
    ) -> Result<(), HostFetchError>;
}
