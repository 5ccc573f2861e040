//! Generative-text provider access

pub mod client;
pub mod types;

// Re-export main types for convenience
pub use client::{GenerativeModel, VertexClient};
pub use types::GenerateContentResponse;
