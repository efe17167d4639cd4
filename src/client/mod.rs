//! Client construction and HTTP plumbing.

mod builder;
mod core;

pub use builder::GeminiClientBuilder;
pub use core::GeminiClient;

pub(crate) use core::first_candidate_text;
