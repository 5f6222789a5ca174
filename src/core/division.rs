use crate::core::input::read_int;
use crate::domain::model::{DivisionOutcome, ErrorKind};
use crate::domain::ports::Console;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_non_zero, DIVISION_BY_ZERO};

/// Integer division truncating toward zero.
///
/// The zero check runs first, so a zero divisor is always an invalid argument
/// and never an arithmetic error. The only arithmetic failure left is
/// `i32::MIN / -1`.
pub fn divide(dividend: i32, divisor: i32) -> Result<i32> {
    let divisor = validate_non_zero(divisor, DIVISION_BY_ZERO)?;
    dividend
        .checked_div(divisor)
        .ok_or_else(|| DemoError::Arithmetic {
            message: format!("{} / {} overflows a 32-bit integer", dividend, divisor),
        })
}

pub struct DivisionFlow<'a> {
    prompt: &'a str,
}

impl<'a> DivisionFlow<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self { prompt }
    }

    /// Prompts for two integers and prints their quotient.
    ///
    /// Input format, invalid argument and arithmetic errors are reported on
    /// the console and returned as [`DivisionOutcome::Failed`]. Tokens after
    /// the failing one stay unread for the next prompt. Exhausted input and
    /// I/O failures are returned as errors.
    pub async fn run<C>(&self, console: &mut C) -> Result<DivisionOutcome>
    where
        C: Console + ?Sized,
    {
        console.write_line(self.prompt).await?;

        match Self::compute(console).await {
            Ok(outcome) => {
                if let Some(quotient) = outcome.quotient() {
                    console.write_line(&format!("Result: {}", quotient)).await?;
                }
                Ok(outcome)
            }
            Err(e) => {
                let Some(kind) = ErrorKind::of(&e) else {
                    return Err(e);
                };
                tracing::info!("Division failed ({:?}): {}", kind.category(), e);
                console.write_line(&e.user_friendly_message()).await?;
                Ok(DivisionOutcome::Failed {
                    kind,
                    message: e.to_string(),
                })
            }
        }
    }

    async fn compute<C>(console: &mut C) -> Result<DivisionOutcome>
    where
        C: Console + ?Sized,
    {
        let dividend = read_int(console, "the dividend").await?;
        let divisor = read_int(console, "the divisor").await?;
        let quotient = divide(dividend, divisor)?;
        Ok(DivisionOutcome::Computed {
            dividend,
            divisor,
            quotient,
        })
    }
}
