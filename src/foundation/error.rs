/// Convenience result type used across Userpic.
pub type UserpicResult<T> = Result<T, UserpicError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Identity input (names, emails) never errors; it degrades to a fallback
/// presentation. Errors are reserved for caller contract violations caught at
/// API entry points.
#[derive(thiserror::Error, Debug)]
pub enum UserpicError {
    /// Invalid caller-provided configuration (sizes, colors, position tags).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid badge configuration.
    #[error("badge error: {0}")]
    Badge(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UserpicError {
    /// Build a [`UserpicError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`UserpicError::Badge`] value.
    pub fn badge(msg: impl Into<String>) -> Self {
        Self::Badge(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
