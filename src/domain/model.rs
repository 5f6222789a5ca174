use crate::utils::error::{DemoError, ErrorCategory};
use serde::{Deserialize, Serialize};

/// What the size flow does with a rejected size once the closing message is out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum SizeErrorPolicy {
    /// Hand the error back to the caller, which ends the run with a nonzero exit code.
    #[default]
    Propagate,
    /// Report the error on the console before the closing message and carry on.
    Catch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InputFormat,
    InvalidArgument,
    Arithmetic,
}

impl ErrorKind {
    /// Only errors a flow reports on the console have a kind.
    pub fn of(error: &DemoError) -> Option<Self> {
        match error {
            DemoError::InputFormat { .. } => Some(ErrorKind::InputFormat),
            DemoError::InvalidArgument { .. } => Some(ErrorKind::InvalidArgument),
            DemoError::Arithmetic { .. } => Some(ErrorKind::Arithmetic),
            _ => None,
        }
    }

    pub fn category(self) -> ErrorCategory {
        match self {
            ErrorKind::InputFormat => ErrorCategory::Input,
            ErrorKind::InvalidArgument => ErrorCategory::Argument,
            ErrorKind::Arithmetic => ErrorCategory::Arithmetic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DivisionOutcome {
    Computed {
        dividend: i32,
        divisor: i32,
        quotient: i32,
    },
    Failed {
        kind: ErrorKind,
        message: String,
    },
}

impl DivisionOutcome {
    pub fn quotient(&self) -> Option<i32> {
        match self {
            DivisionOutcome::Computed { quotient, .. } => Some(*quotient),
            DivisionOutcome::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SizeOutcome {
    Accepted { size: usize },
    Rejected { kind: ErrorKind, message: String },
}

impl SizeOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SizeOutcome::Accepted { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub division: DivisionOutcome,
    pub size: SizeOutcome,
}
