//! Error types for LEIMA

use thiserror::Error;

/// Per-property error raised while reading or writing a single message
/// property
///
/// This is the recoverable channel of the decoration pass: a failure on one
/// property is logged and the pass moves on to the next property. It never
/// aborts decoration of the rest of the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// No property exists under the requested name
    #[error("no property named '{name}'")]
    NotFound {
        /// The requested property name
        name: String,
    },

    /// The property exists but holds a non-string value
    ///
    /// Only string properties participate in selector-header decoration.
    #[error("property '{name}' holds a {actual} value, not a string")]
    TypeMismatch {
        /// The requested property name
        name: String,
        /// Variant name of the value actually stored
        actual: &'static str,
    },

    /// The property name is empty
    ///
    /// Transports reject empty property names. An all-illegal input name
    /// transforms to the empty string and surfaces here.
    #[error("property name must not be empty")]
    EmptyName,
}

/// Fatal error raised while building the base message
///
/// Unlike [`PropertyError`], factory errors propagate unchanged to the
/// caller: if the base message cannot be built there is nothing to decorate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// The transport session failed to allocate or prepare a message
    #[error("session error: {0}")]
    Session(String),

    /// The factory failed to assemble the message from the event
    #[error("failed to build message: {0}")]
    Build(String),

    /// A property operation failed while assembling the base message
    #[error(transparent)]
    Property(#[from] PropertyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_error_not_found_display() {
        let err = PropertyError::NotFound {
            name: "org.example.type".to_string(),
        };
        assert_eq!(err.to_string(), "no property named 'org.example.type'");
    }

    #[test]
    fn test_property_error_type_mismatch_display() {
        let err = PropertyError::TypeMismatch {
            name: "org.example.ts".to_string(),
            actual: "long",
        };
        assert_eq!(
            err.to_string(),
            "property 'org.example.ts' holds a long value, not a string"
        );
    }

    #[test]
    fn test_property_error_empty_name_display() {
        assert_eq!(
            PropertyError::EmptyName.to_string(),
            "property name must not be empty"
        );
    }

    #[test]
    fn test_factory_error_session_display() {
        let err = FactoryError::Session("connection closed".to_string());
        assert_eq!(err.to_string(), "session error: connection closed");
    }

    #[test]
    fn test_property_error_into_factory_error() {
        let err: FactoryError = PropertyError::EmptyName.into();
        assert!(matches!(err, FactoryError::Property(PropertyError::EmptyName)));
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PropertyError>();
        assert_send_sync::<FactoryError>();
    }
}
