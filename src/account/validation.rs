//! Input validation for account creation

/// Validation errors for account-creation fields
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters, got {actual}")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },
}

const MIN_NAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 8;

fn require_min_len(value: &str, field: &'static str, min: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual < min {
        return Err(ValidationError::TooShort { field, min, actual });
    }
    Ok(())
}

/// Validate the fields of an account-creation request.
///
/// Runs before the password is hashed so a rejected request does no work.
pub fn validate_new_account(
    first_name: &str,
    last_name: &str,
    password: &str,
) -> Result<(), ValidationError> {
    require_min_len(first_name, "first name", MIN_NAME_LEN)?;
    require_min_len(last_name, "last name", MIN_NAME_LEN)?;
    require_min_len(password, "password", MIN_PASSWORD_LEN)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields_pass() {
        assert!(validate_new_account("Ada", "Lovelace", "correct horse").is_ok());
    }

    #[test]
    fn test_short_first_name_rejected() {
        let err = validate_new_account("Al", "Lovelace", "correct horse").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                field: "first name",
                min: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_short_password_rejected() {
        let err = validate_new_account("Ada", "Lovelace", "short").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                field: "password",
                min: 8,
                actual: 5
            }
        );
    }

    #[test]
    fn test_error_message_names_field() {
        let err = validate_new_account("Ada", "Lovelace", "short").unwrap_err();
        assert!(err.to_string().contains("password"));
        assert!(err.to_string().contains("8"));
    }
}
