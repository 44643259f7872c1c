//! Boundary mapping from internal errors to the wire error shape

use super::ApiError;
use crate::Error;

/// Maps any error to the shape sent to clients.
///
/// Taxonomy errors pass through unchanged. Everything else becomes a
/// generic `INTERNAL_SERVER_ERROR`; the underlying cause is logged here and
/// never included in the result.
pub fn format_error(error: &Error) -> ApiError {
    match error.as_api() {
        Some(api) => {
            tracing::debug!(code = %api.code(), status = api.status(), "{}", api.message());
            api.clone()
        }
        None => {
            tracing::error!(error = %error, "Unhandled error");
            ApiError::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_error::ErrorCode;
    use crate::validation::FieldErrors;

    #[test]
    fn test_taxonomy_errors_pass_through() {
        let err = Error::from(ApiError::not_found("Category not found"));
        let formatted = format_error(&err);
        assert_eq!(formatted, ApiError::not_found("Category not found"));
    }

    #[test]
    fn test_field_errors_survive_formatting() {
        let mut fields = FieldErrors::new();
        fields.insert("name".to_string(), vec!["Category is required".to_string()]);
        let err = Error::from(ApiError::invalid_fields(fields.clone()));

        let formatted = format_error(&err);
        assert_eq!(formatted.field_errors(), Some(&fields));
    }

    #[test]
    fn test_internal_errors_are_masked() {
        let err = Error::Storage("disk on fire at /var/lib/tasks.json".to_string());
        let formatted = format_error(&err);

        assert_eq!(formatted.code(), ErrorCode::InternalServerError);
        assert_eq!(formatted.status(), 500);
        assert_eq!(formatted.message(), "Internal server error");
        assert!(!formatted.message().contains("disk"));
    }

    #[test]
    fn test_io_errors_are_masked() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let formatted = format_error(&Error::from(io));
        assert_eq!(formatted, ApiError::internal());
    }
}
