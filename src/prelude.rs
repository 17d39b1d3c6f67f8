pub use crate::configuration_error::*;
pub use crate::host::*;
pub use crate::request::*;
pub use crate::response::*;
pub use crate::session::*;
pub use crate::transport_error::*;

pub(crate) use std::collections::HashMap;
pub(crate) use std::sync::{Arc, Mutex};

pub(crate) use log::debug;
pub(crate) use tokio::sync::oneshot::{channel, Sender};
pub(crate) use uniffi::{export, Enum, Error, Object, Record};
