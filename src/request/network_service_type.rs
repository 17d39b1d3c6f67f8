use crate::prelude::*;

/// Informational quality-of-service hint carried on a [`UrlRequest`]. The
/// host fetch primitive has no field for it, so it cannot be set through
/// this transport and always stays at its default.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetworkServiceType {
    Default,
    Voip,
    Video,
    Background,
    Voice,
    ResponsiveData,
    AvStreaming,
    ResponsiveAv,
    CallSignaling,
}

impl Default for NetworkServiceType {
    fn default() -> Self {
        Self::Default
    }
}
