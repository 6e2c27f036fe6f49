pub mod cli;
pub mod combiner;
pub mod config;
pub mod core;
pub mod reporting;
pub mod verification;

// 公開API
pub use combiner::{coerce, combine, combine_args, combine_operands};
pub use crate::core::{CombineError, CombineResult, Combined, Operand, Value};
