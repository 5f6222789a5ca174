use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("expected an integer but found \"{token}\"")]
    InputFormat { token: String },

    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("{message}")]
    Arithmetic { message: String },

    #[error("input ended before {expected} was read")]
    InputExhausted { expected: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Argument,
    Arithmetic,
    System,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        DemoError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::InputFormat { .. } | DemoError::InputExhausted { .. } => {
                ErrorCategory::Input
            }
            DemoError::InvalidArgument { .. } => ErrorCategory::Argument,
            DemoError::Arithmetic { .. } => ErrorCategory::Arithmetic,
            DemoError::Io(_) => ErrorCategory::System,
            DemoError::ConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::InputFormat { .. }
            | DemoError::InvalidArgument { .. }
            | DemoError::Arithmetic { .. } => ErrorSeverity::High,
            DemoError::InputExhausted { .. } => ErrorSeverity::Medium,
            DemoError::Io(_) | DemoError::ConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Prefix used when the error is reported on stdout.
    ///
    /// Input and argument errors use plain-language names rather than
    /// exception class names (`InputMismatchException`,
    /// `IllegalArgumentException`); only the arithmetic label keeps the
    /// `Arithmetic Exception` wording.
    pub fn label(&self) -> &'static str {
        match self {
            DemoError::InputFormat { .. } => "Input mismatch",
            DemoError::InvalidArgument { .. } => "Invalid argument",
            DemoError::Arithmetic { .. } => "Arithmetic Exception",
            DemoError::InputExhausted { .. } => "Input exhausted",
            DemoError::Io(_) => "I/O failure",
            DemoError::ConfigError { .. } => "Configuration error",
        }
    }

    /// 給使用者看的訊息, 例如 "Invalid argument occurred: Division by zero is not allowed"
    pub fn user_friendly_message(&self) -> String {
        format!("{} occurred: {}", self.label(), self)
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::InputFormat { .. } => "Enter whole numbers such as 10 or -3",
            DemoError::InvalidArgument { .. } => {
                "Use a non-zero divisor and an array size greater than zero"
            }
            DemoError::Arithmetic { .. } => "Keep the quotient within the 32-bit integer range",
            DemoError::InputExhausted { .. } => "Provide all three integers on standard input",
            DemoError::Io(_) => "Check that standard input and output are available",
            DemoError::ConfigError { .. } => "Fix the configuration file and try again",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_message_uses_label() {
        let err = DemoError::invalid_argument("Division by zero is not allowed");
        assert_eq!(
            err.user_friendly_message(),
            "Invalid argument occurred: Division by zero is not allowed"
        );

        let err = DemoError::InputFormat {
            token: "abc".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Input mismatch occurred: expected an integer but found \"abc\""
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            DemoError::InputExhausted {
                expected: "the dividend".to_string()
            }
            .category(),
            ErrorCategory::Input
        );
        assert_eq!(
            DemoError::invalid_argument("x").category(),
            ErrorCategory::Argument
        );
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        assert_eq!(DemoError::invalid_argument("x").exit_code(), 1);
        assert_eq!(
            DemoError::InputExhausted {
                expected: "the divisor".to_string()
            }
            .exit_code(),
            2
        );
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(DemoError::from(io).exit_code(), 3);
    }
}
