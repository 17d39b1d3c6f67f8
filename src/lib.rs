//! A host-neutral HTTP request/response model bridged to a single
//! host-provided fetch primitive.
//!
//! Callers build [`UrlRequest`] values against a stable model (URL, method,
//! case-insensitive headers, body, cache/network-service hints) and hand
//! them to the [`FetchSession`], which translates each request into
//! transport-native [`FetchOptions`], issues exactly one asynchronous call
//! through the [`HostFetch`] primitive the embedding runtime installed, and
//! reassembles the settled operation into bytes plus a [`UrlResponse`].
//!
//! The crate never touches the network itself. Caching, connection reuse,
//! redirects and cookies are wholly owned by the host transport; the hints
//! carried on a request are passed along, not enforced.

mod configuration_error;
mod host;
mod request;
mod response;
mod session;
mod transport_error;

pub mod prelude;

pub use prelude::*;

uniffi::setup_scaffolding!();
