use crate::domain::model::SizeErrorPolicy;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Token-oriented console: integers are read as whitespace-separated tokens
/// that may span lines, output is written one line at a time.
#[async_trait]
pub trait Console: Send {
    /// Next whitespace-separated token, or `None` once input is closed.
    async fn next_token(&mut self) -> Result<Option<String>>;

    async fn write_line(&mut self, line: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn division_prompt(&self) -> &str;
    fn size_prompt(&self) -> &str;
    fn closing_message(&self) -> &str;
    fn size_error_policy(&self) -> SizeErrorPolicy;
}
