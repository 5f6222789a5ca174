use crate::core::input::read_int;
use crate::domain::model::{ErrorKind, SizeErrorPolicy, SizeOutcome};
use crate::domain::ports::Console;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive, NON_POSITIVE_SIZE};

pub struct SizeFlow<'a> {
    prompt: &'a str,
    closing: &'a str,
    policy: SizeErrorPolicy,
}

impl<'a> SizeFlow<'a> {
    pub fn new(prompt: &'a str, closing: &'a str, policy: SizeErrorPolicy) -> Self {
        Self {
            prompt,
            closing,
            policy,
        }
    }

    /// Prompts for an array size and checks that it is positive.
    ///
    /// The closing message is written on every path, after any caught error
    /// and before any returned one.
    pub async fn run<C>(&self, console: &mut C) -> Result<SizeOutcome>
    where
        C: Console + ?Sized,
    {
        let outcome = self.check(console).await;
        let closed = self.close(console).await;

        let outcome = outcome?;
        closed?;
        Ok(outcome)
    }

    async fn check<C>(&self, console: &mut C) -> Result<SizeOutcome>
    where
        C: Console + ?Sized,
    {
        console.write_line(self.prompt).await?;

        let err = match Self::read_size(console).await {
            Ok(size) => {
                tracing::debug!("Array size {} accepted", size);
                return Ok(SizeOutcome::Accepted { size });
            }
            Err(e) => e,
        };

        match (self.policy, ErrorKind::of(&err)) {
            (SizeErrorPolicy::Catch, Some(kind)) => {
                tracing::info!("Size rejected ({:?}): {}", kind.category(), err);
                console.write_line(&err.user_friendly_message()).await?;
                Ok(SizeOutcome::Rejected {
                    kind,
                    message: err.to_string(),
                })
            }
            _ => Err(err),
        }
    }

    async fn read_size<C>(console: &mut C) -> Result<usize>
    where
        C: Console + ?Sized,
    {
        let size = read_int(console, "the array size").await?;
        validate_positive(size, NON_POSITIVE_SIZE)
    }

    async fn close<C>(&self, console: &mut C) -> Result<()>
    where
        C: Console + ?Sized,
    {
        console.write_line("").await?;
        console.write_line(self.closing).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StreamConsole;
    use crate::utils::error::DemoError;

    const PROMPT: &str = "Enter the size of the array:";
    const CLOSING: &str =
        "Exception handling methods like try.. catch, throw and finally are demonstrated.";

    async fn run_with(
        input: &'static str,
        policy: SizeErrorPolicy,
    ) -> (Result<SizeOutcome>, String) {
        let mut console = StreamConsole::new(input.as_bytes(), Vec::new());
        let outcome = SizeFlow::new(PROMPT, CLOSING, policy).run(&mut console).await;
        let output = String::from_utf8(console.into_writer()).unwrap();
        (outcome, output)
    }

    #[tokio::test]
    async fn test_positive_size_accepted_and_closed() {
        let (outcome, output) = run_with("5\n", SizeErrorPolicy::Propagate).await;

        assert_eq!(outcome.unwrap(), SizeOutcome::Accepted { size: 5 });
        assert_eq!(output, format!("{}\n\n{}\n", PROMPT, CLOSING));
    }

    #[tokio::test]
    async fn test_non_positive_size_propagates_after_closing() {
        for input in ["0\n", "-3\n"] {
            let (outcome, output) = run_with(input, SizeErrorPolicy::Propagate).await;

            let err = outcome.unwrap_err();
            assert!(matches!(err, DemoError::InvalidArgument { .. }));
            assert_eq!(err.to_string(), "Array size must be a positive integer");
            assert!(output.ends_with(&format!("\n\n{}\n", CLOSING)));
            assert!(!output.contains("occurred"));
        }
    }

    #[tokio::test]
    async fn test_non_positive_size_caught_before_closing() {
        let (outcome, output) = run_with("0\n", SizeErrorPolicy::Catch).await;

        assert_eq!(
            outcome.unwrap(),
            SizeOutcome::Rejected {
                kind: ErrorKind::InvalidArgument,
                message: "Array size must be a positive integer".to_string()
            }
        );
        assert_eq!(
            output,
            format!(
                "{}\nInvalid argument occurred: Array size must be a positive integer\n\n{}\n",
                PROMPT, CLOSING
            )
        );
    }

    #[tokio::test]
    async fn test_exhausted_input_propagates_even_when_catching() {
        let (outcome, output) = run_with("", SizeErrorPolicy::Catch).await;

        assert!(matches!(outcome, Err(DemoError::InputExhausted { .. })));
        assert!(output.ends_with(&format!("{}\n", CLOSING)));
    }

    #[tokio::test]
    async fn test_non_integer_size() {
        let (outcome, _) = run_with("many\n", SizeErrorPolicy::Propagate).await;
        assert!(matches!(outcome, Err(DemoError::InputFormat { .. })));

        let (outcome, output) = run_with("many\n", SizeErrorPolicy::Catch).await;
        assert!(!outcome.unwrap().is_accepted());
        assert!(output.contains("Input mismatch occurred"));
    }
}
