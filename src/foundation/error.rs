/// Convenience result type used across namedavatar.
pub type AvatarResult<T> = Result<T, AvatarError>;

/// Top-level error taxonomy.
///
/// The name-to-avatar transform itself is total and never produces one of these. Errors come from
/// the edges: option validation, document loading, serialization and rendering.
#[derive(thiserror::Error, Debug)]
pub enum AvatarError {
    /// Invalid user-provided options or unreadable option documents.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while turning a descriptor into SVG or pixels.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AvatarError {
    /// Build an [`AvatarError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AvatarError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build an [`AvatarError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
