//! Error types for configuration and simulation setup.

/// Errors surfaced by the simulation core.
///
/// Numeric edge cases inside a tick (zero orbital separation) are clamped,
/// not reported here.
#[derive(Debug, thiserror::Error)]
pub enum OrreryError {
    /// A configuration value is out of its accepted range.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// Failed to parse JSON configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] serde_json::Error),

    /// Failed to serialize data for the host.
    #[error("failed to serialize: {0}")]
    SerializeError(#[source] serde_json::Error),

    /// A galaxy was supplied without any star system.
    #[error("galaxy has no star systems")]
    EmptyGalaxy,

    /// A star system index outside the galaxy.
    #[error("unknown star system {index} (galaxy has {count})")]
    UnknownSystem { index: usize, count: usize },
}

impl OrreryError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OrreryError>;
