pub mod division;
pub mod engine;
pub mod input;
pub mod size;

pub use crate::domain::model::{DivisionOutcome, RunReport, SizeErrorPolicy, SizeOutcome};
pub use crate::domain::ports::{ConfigProvider, Console};
pub use crate::utils::error::Result;
