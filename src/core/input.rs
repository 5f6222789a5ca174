use crate::domain::ports::Console;
use crate::utils::error::{DemoError, Result};

/// Reads the next token as a 32-bit integer.
///
/// A token that does not parse is consumed and reported as
/// [`DemoError::InputFormat`]; a closed input is [`DemoError::InputExhausted`].
pub async fn read_int<C>(console: &mut C, expected: &str) -> Result<i32>
where
    C: Console + ?Sized,
{
    let token = console
        .next_token()
        .await?
        .ok_or_else(|| DemoError::InputExhausted {
            expected: expected.to_string(),
        })?;

    match token.parse::<i32>() {
        Ok(value) => {
            tracing::debug!("Read {} = {}", expected, value);
            Ok(value)
        }
        Err(e) => {
            tracing::debug!("Token {:?} for {} rejected: {}", token, expected, e);
            Err(DemoError::InputFormat { token })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StreamConsole;

    #[tokio::test]
    async fn test_read_int_accepts_signed_values() {
        let mut console = StreamConsole::new(&b"-12 +7 2147483647"[..], Vec::new());

        assert_eq!(read_int(&mut console, "a").await.unwrap(), -12);
        assert_eq!(read_int(&mut console, "b").await.unwrap(), 7);
        assert_eq!(read_int(&mut console, "c").await.unwrap(), i32::MAX);
    }

    #[tokio::test]
    async fn test_read_int_rejects_out_of_range_and_words() {
        let mut console = StreamConsole::new(&b"2147483648 abc 3.5"[..], Vec::new());

        for expected in ["2147483648", "abc", "3.5"] {
            match read_int(&mut console, "the dividend").await {
                Err(DemoError::InputFormat { token }) => assert_eq!(token, expected),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_read_int_reports_exhausted_input() {
        let mut console = StreamConsole::new(&b"  \n"[..], Vec::new());

        let err = read_int(&mut console, "the divisor").await.unwrap_err();
        assert_eq!(err.to_string(), "input ended before the divisor was read");
    }
}
