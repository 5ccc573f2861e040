//! Endpoint operations

pub mod summarize;

pub use summarize::{SummarizeLimits, summarize_meeting};
