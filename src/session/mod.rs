mod fetch_options;
mod fetch_session;
mod fetched_data;

pub use fetch_options::*;
pub use fetch_session::*;
pub use fetched_data::*;
