//! Error types for layout computation and configuration.

/// Errors raised by layout configuration and projection.
///
/// Geometric edge cases (axis-aligned rays, coincident document points)
/// are handled by explicit branches and fallbacks, not errors; everything
/// here indicates invalid input that must be rejected before a pass runs.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Topic count must be at least 1.
    InvalidTopicCount(usize),
    /// A weight vector's length does not match the topic count.
    WeightLengthMismatch {
        /// Expected length (the configured topic count).
        expected: usize,
        /// Actual length of the offending vector.
        actual: usize,
    },
    /// Plot rectangle has a non-positive drawable area after margins.
    InvalidRect(String),
    /// A scalar configuration parameter is out of range.
    InvalidParameter(String),
    /// File I/O error while loading or saving a configuration.
    IoError(String),
    /// YAML parsing error.
    ParseError(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::InvalidTopicCount(k) => {
                write!(f, "topic count must be >= 1, got {}", k)
            }
            LayoutError::WeightLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "weight vector length {} does not match topic count {}",
                    actual, expected
                )
            }
            LayoutError::InvalidRect(msg) => write!(f, "invalid plot rectangle: {}", msg),
            LayoutError::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
            LayoutError::IoError(msg) => write!(f, "IO error: {}", msg),
            LayoutError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = LayoutError::InvalidTopicCount(0);
        assert!(err.to_string().contains(">= 1"));

        let err = LayoutError::WeightLengthMismatch {
            expected: 4,
            actual: 3,
        };
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains('3'));
    }
}
