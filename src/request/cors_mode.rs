use crate::prelude::*;

/// Cross-origin policy for one transport call, passed to the host fetch
/// primitive as the `mode` string of the call options.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CorsMode {
    Cors,
    NoCors,
    SameOrigin,
}

impl CorsMode {
    /// The exact string the host fetch primitive recognizes.
    pub fn wire_value(&self) -> &'static str {
        match self {
            Self::Cors => "cors",
            Self::NoCors => "no-cors",
            Self::SameOrigin => "same-origin",
        }
    }
}
