use crate::utils::error::{DemoError, Result};

pub const DIVISION_BY_ZERO: &str = "Division by zero is not allowed";
pub const NON_POSITIVE_SIZE: &str = "Array size must be a positive integer";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_zero(value: i32, message: &str) -> Result<i32> {
    if value == 0 {
        return Err(DemoError::invalid_argument(message));
    }
    Ok(value)
}

pub fn validate_positive(value: i32, message: &str) -> Result<usize> {
    if value <= 0 {
        return Err(DemoError::invalid_argument(message));
    }
    // value > 0 fits in usize on every supported target
    Ok(value as usize)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::ConfigError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_zero() {
        assert_eq!(validate_non_zero(2, DIVISION_BY_ZERO).unwrap(), 2);
        assert_eq!(validate_non_zero(-7, DIVISION_BY_ZERO).unwrap(), -7);

        let err = validate_non_zero(0, DIVISION_BY_ZERO).unwrap_err();
        assert_eq!(err.to_string(), "Division by zero is not allowed");
    }

    #[test]
    fn test_validate_positive() {
        assert_eq!(validate_positive(5, NON_POSITIVE_SIZE).unwrap(), 5);
        assert!(validate_positive(0, NON_POSITIVE_SIZE).is_err());

        let err = validate_positive(i32::MIN, NON_POSITIVE_SIZE).unwrap_err();
        assert!(matches!(err, DemoError::InvalidArgument { .. }));
        assert_eq!(err.to_string(), "Array size must be a positive integer");
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("prompts.size", "Size?").is_ok());
        assert!(validate_non_empty_string("prompts.size", "   ").is_err());
    }
}
