mod body_outcome;
mod body_outcome_listener;
mod fetch_settled_listener;
mod host_callback_listener;
mod host_fetch;
mod host_pending_fetch;

pub use body_outcome::*;
pub use body_outcome_listener::*;
pub use fetch_settled_listener::*;
pub use host_callback_listener::*;
pub use host_fetch::*;
pub use host_pending_fetch::*;
