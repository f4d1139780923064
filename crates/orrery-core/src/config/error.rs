//! Configuration error types.

/// Errors that can occur when loading or validating a scene configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("failed to parse scene config: {0}")]
    Parse(#[source] serde_json::Error),

    /// A scalar setting is out of its allowed range.
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: &'static str },

    /// A body definition is unusable.
    #[error("invalid body `{id}`: {reason}")]
    InvalidBody { id: String, reason: &'static str },

    /// Two bodies share the same id.
    #[error("duplicate body id `{0}`")]
    DuplicateBody(String),

    /// The scene has nothing orbiting the central body.
    #[error("scene config has no orbiting bodies")]
    NoBodies,
}
