use thiserror::Error;

/// Failure of a single read through a [`Reader`](super::Reader).
///
/// There are exactly two kinds: the key is unknown to every source, or it
/// is known but one of its raw values does not parse as the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("configuration key not found: {key}")]
    KeyNotFound { key: String },

    #[error("malformed value for key '{key}': {value:?} is not a valid {expected}")]
    MalformedValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl ReadError {
    pub(crate) fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    pub(crate) fn malformed(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::MalformedValue {
            key: key.into(),
            value: value.into(),
            expected,
        }
    }

    /// Returns true if no source defines the key.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, ReadError::KeyNotFound { .. })
    }

    /// Returns true if the key was found but a value failed to parse.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ReadError::MalformedValue { .. })
    }

    /// The key that was being read.
    pub fn key(&self) -> &str {
        match self {
            ReadError::KeyNotFound { key } | ReadError::MalformedValue { key, .. } => key,
        }
    }
}
