//! Validation helpers shared across request payloads.

use validator::ValidationErrors;

use crate::errors::DirectoryError;

/// Convert validator errors to [`DirectoryError::Validation`].
///
/// Extracts the per-field messages so callers see what was wrong with the
/// payload, not the validator's internal structure.
///
/// # Example
/// ```ignore
/// req.validate().map_err(validation_errors_to_directory_error)?;
/// ```
pub fn validation_errors_to_directory_error(e: ValidationErrors) -> DirectoryError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    DirectoryError::Validation(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateUser;
    use validator::Validate;

    #[test]
    fn flattens_field_messages() {
        let req = CreateUser {
            email: "nope".to_string(),
            name: String::new(),
            password: "h1".to_string(),
        };
        let err = validation_errors_to_directory_error(req.validate().unwrap_err());
        match err {
            DirectoryError::Validation(messages) => {
                assert_eq!(messages.len(), 2);
                assert!(messages.contains(&"Invalid email format".to_string()));
                assert!(messages.contains(&"Name is required".to_string()));
            }
            other => panic!("expected Validation, got {other}"),
        }
    }
}
