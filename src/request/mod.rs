mod cache_policy;
mod cors_mode;
mod http_method;
mod network_service_type;
mod url_request;

pub use cache_policy::*;
pub use cors_mode::*;
pub use http_method::*;
pub use network_service_type::*;
pub use url_request::*;
