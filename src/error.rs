use thiserror::Error;

/// A declared field cannot be read from the class description. Raised while
/// the engine is being constructed; no partial engine exists afterwards.
#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("class description must be an object schema with properties")]
    NotAnObjectSchema,
    #[error("field '{field}' has no readable schema")]
    UnreadableField { field: String },
    #[error("field '{field}' references unresolvable schema '{reference}'")]
    UnresolvedReference { field: String, reference: String },
}

impl IntrospectionError {
    pub(crate) fn unreadable(field: impl Into<String>) -> Self {
        IntrospectionError::UnreadableField {
            field: field.into(),
        }
    }
}

/// A previously working accessor failed against a live entity instance.
/// Recovered locally; previously rendered state stays intact.
#[derive(Debug, Error)]
pub enum FieldAccessError {
    #[error("entity is not an object")]
    NotAnObject,
    #[error("field '{0}' is missing from the entity")]
    MissingField(String),
    #[error("field '{0}' does not hold a collection")]
    NotACollection(String),
    #[error("field '{0}' holds a null collection")]
    NullCollection(String),
}

/// One field's validation failure, reported by [`Binder::write_bean`].
///
/// [`Binder::write_bean`]: crate::Binder::write_bean
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The collected per-field failures of a rejected write. The target entity is
/// untouched when this is returned.
#[derive(Debug, Clone, Error)]
#[error("{} field(s) failed validation", violations.len())]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }
}

/// Raised by gateway implementations. Never retried by the engine; editing
/// state stays consistent so the action can be retried by the user.
#[derive(Debug, Error)]
#[error("{operation} failed: {message}")]
pub struct PersistenceError {
    pub operation: &'static str,
    pub message: String,
}

impl PersistenceError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violations_render_field_and_message() {
        let violation = FieldViolation {
            field: "firstName".to_string(),
            message: "must not be empty".to_string(),
        };
        assert_eq!(violation.to_string(), "firstName: must not be empty");
    }

    #[test]
    fn validation_errors_report_their_count() {
        let errors = ValidationErrors {
            violations: vec![
                FieldViolation {
                    field: "a".to_string(),
                    message: "expected integer".to_string(),
                },
                FieldViolation {
                    field: "b".to_string(),
                    message: "must not be empty".to_string(),
                },
            ],
        };
        assert_eq!(errors.len(), 2);
        assert!(!errors.is_empty());
        assert_eq!(errors.to_string(), "2 field(s) failed validation");
    }

    #[test]
    fn persistence_errors_carry_the_failed_operation() {
        let error = PersistenceError::new("save", "store offline");
        assert_eq!(error.operation, "save");
        assert_eq!(error.to_string(), "save failed: store offline");
    }
}
