mod url_response;

pub use url_response::*;
