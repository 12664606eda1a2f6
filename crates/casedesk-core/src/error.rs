//! Error types for CaseDesk.

use thiserror::Error;

/// A shared error type for the entire CaseDesk workspace.
///
/// Typed, structured variants with automatic conversion from the I/O and
/// serialization errors the storage layer produces.
#[derive(Error, Debug, Clone)]
pub enum DeskError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// User input rejected before any state was touched
    #[error("Validation error: {0}")]
    Validation(String),

    /// An action that the entity's current status does not offer
    #[error("Invalid transition: cannot {action} {entity_type} in status '{from}'")]
    InvalidTransition {
        entity_type: &'static str,
        from: String,
        action: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DeskError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an InvalidTransition error
    pub fn invalid_transition(
        entity_type: &'static str,
        from: impl ToString,
        action: impl ToString,
    ) -> Self {
        Self::InvalidTransition {
            entity_type,
            from: from.to_string(),
            action: action.to_string(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an InvalidTransition error
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for DeskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for DeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for DeskError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for DeskError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, DeskError>`.
pub type Result<T> = std::result::Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DeskError::not_found("case", "CASE-999");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: case 'CASE-999'");
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = DeskError::invalid_transition("playbook", "Applied", "stop using");
        assert!(err.is_invalid_transition());
        assert_eq!(
            err.to_string(),
            "Invalid transition: cannot stop using playbook in status 'Applied'"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: DeskError = serde_json::from_str::<Vec<String>>("not json")
            .unwrap_err()
            .into();
        assert!(err.is_serialization());
    }
}
