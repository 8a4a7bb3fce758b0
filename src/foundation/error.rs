/// Convenience result type used across gatebadge.
pub type BadgeResult<T> = Result<T, BadgeError>;

/// Top-level error taxonomy used by badge APIs.
#[derive(thiserror::Error, Debug)]
pub enum BadgeError {
    /// Invalid caller-provided input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// No usable font could be resolved.
    ///
    /// The service never surfaces this; it logs it and falls back to built-in metrics.
    #[error("font error: {0}")]
    Font(String),

    /// Writing a rendered badge into its cache buffer failed.
    #[error("serialization error: {0}")]
    Serialization(#[source] std::io::Error),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BadgeError {
    /// Build a [`BadgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BadgeError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`BadgeError::Serialization`] value.
    pub fn serialization(err: std::io::Error) -> Self {
        Self::Serialization(err)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
