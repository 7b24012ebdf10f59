//! # Mesh Errors
//!
//! Error types for plane mesh generation.
//!
//! ## Error Policy
//!
//! - Parameters are checked before any buffer is allocated
//! - No partial mesh is ever returned
//! - Errors name the offending parameter for debugging

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A generation parameter is outside its valid domain.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Name of the rejected parameter (`resolution`, `size`).
        name: &'static str,
        /// Description of the violated constraint.
        message: String,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Vertex count the request would produce.
        count: usize,
        /// Configured limit.
        max: usize,
    },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_parameter("resolution", "must be at least 1, got 0");
        let text = err.to_string();
        assert!(text.contains("resolution"));
        assert!(text.contains("at least 1"));

        let err = MeshError::TooManyVertices { count: 20, max: 10 };
        assert_eq!(err.to_string(), "Too many vertices: 20 (max: 10)");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
