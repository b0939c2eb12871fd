//! Error types for sentir operations.

use std::fmt;

/// Main error type for sentir operations.
///
/// # Examples
///
/// ```
/// use sentir::error::SentirError;
///
/// let err = SentirError::DimensionMismatch {
///     expected: "100 features".to_string(),
///     actual: "5".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum SentirError {
    /// Vector/matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Serialization/deserialization error.
    Serialization(String),

    /// I/O error from the persistence substrate.
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for SentirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentirError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            SentirError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            SentirError::Io(e) => write!(f, "I/O error: {e}"),
            SentirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SentirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SentirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SentirError {
    fn from(err: std::io::Error) -> Self {
        SentirError::Io(err)
    }
}

impl From<&str> for SentirError {
    fn from(msg: &str) -> Self {
        SentirError::Other(msg.to_string())
    }
}

impl From<String> for SentirError {
    fn from(msg: String) -> Self {
        SentirError::Other(msg)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SentirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = SentirError::DimensionMismatch {
            expected: "3 features".to_string(),
            actual: "5".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("3 features"));
        assert!(err.to_string().contains("5"));
    }

    #[test]
    fn test_from_str() {
        let err: SentirError = "test error".into();
        assert!(matches!(err, SentirError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: SentirError = "test error".to_string().into();
        assert!(matches!(err, SentirError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SentirError = io_err.into();
        assert!(matches!(err, SentirError::Io(_)));
    }

    #[test]
    fn test_serialization_display() {
        let err = SentirError::Serialization("bad json".to_string());
        assert!(err.to_string().contains("serialization"));
        assert!(err.to_string().contains("bad json"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(SentirError::Io(io_err).source().is_some());
        assert!(SentirError::Other("x".to_string()).source().is_none());
    }
}
