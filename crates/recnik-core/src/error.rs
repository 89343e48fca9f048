use recnik_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlossaryError {
    /// A required input was empty after trimming.
    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl GlossaryError {
    /// Validation errors are recoverable at the boundary without logging;
    /// store errors usually deserve a log line as well as a notification.
    pub fn is_validation(&self) -> bool {
        matches!(self, GlossaryError::EmptyInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, GlossaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_names_the_field() {
        let err = GlossaryError::EmptyInput { field: "term" };
        assert_eq!(err.to_string(), "term must not be empty");
        assert!(err.is_validation());
    }

    #[test]
    fn store_errors_pass_through() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = GlossaryError::from(StoreError::Append {
            path: "dictionary.txt".into(),
            source,
        });
        assert!(!err.is_validation());
        assert!(err.to_string().contains("denied"));
    }
}
