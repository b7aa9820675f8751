/// Convenience result type used across Brickwork.
pub type BrickResult<T> = Result<T, BrickError>;

/// Error taxonomy for configuration-time failures.
///
/// Layout passes themselves never fail; they degrade to safe defaults.
#[derive(thiserror::Error, Debug)]
pub enum BrickError {
    /// Invalid breakpoint or packer configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration that is well-formed but cannot be used as given.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing configuration or scenes.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrickError {
    /// Build a [`BrickError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BrickError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`BrickError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BrickError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
