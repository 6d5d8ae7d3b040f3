/// Result alias used across scrollshow.
pub type ScrollshowResult<T> = Result<T, ScrollshowError>;

/// Load-time error type. Runtime sequencing never fails; see the crate docs.
#[derive(thiserror::Error, Debug)]
pub enum ScrollshowError {
    /// Feed or configuration violates a structural invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Feed or configuration could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollshowError {
    /// Build a [`ScrollshowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollshowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollshowError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
