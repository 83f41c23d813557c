mod client;
mod types;

pub use client::{AdviceBackend, GeminiClient};
pub use types::*;
