//! # nexus-genai
//!
//! Rust client for the Google Generative Language API, wrapping four
//! generation intents behind one explicitly constructed client:
//! conversational exchange, one-shot text, image generation, and
//! long-running video generation.
//!
//! ## Overview
//!
//! The hosted provider does all the heavy lifting; this crate assembles
//! requests, drives the asynchronous video job protocol (submit, poll at a
//! fixed interval, fetch the result once), and classifies every failure
//! into a small, user-actionable taxonomy. Generated binaries are
//! materialized into locally-owned, revocable [`MediaArtifact`]s so callers
//! never depend on provider URL lifetimes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nexus_genai::{AspectRatio, GeminiClient};
//!
//! #[tokio::main]
//! async fn main() -> nexus_genai::Result<()> {
//!     let client = GeminiClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let mut chat = client.start_chat(None);
//!     let reply = chat.send("Hello, how are you?").await?;
//!     println!("{reply}");
//!
//!     let image = client.generate_image("a red fox", AspectRatio::Wide).await?;
//!     println!("{} bytes of JPEG", image.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client construction and HTTP plumbing |
//! | [`chat`] | Multi-turn chat sessions |
//! | [`text`] | One-shot text generation |
//! | [`image`] | Image generation |
//! | [`video`] | Long-running video generation jobs |
//! | [`artifact`] | Locally-owned, revocable binary artifacts |
//! | [`extract`] | Cleanup of model-generated code |
//! | [`prompts`] | Fixed prompt presets |
//! | [`error`] | Error taxonomy and failure classification |

pub mod artifact;
pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod image;
pub mod prompts;
pub mod text;
pub mod video;

// Re-export main types for convenience
pub use artifact::{ArtifactSlot, MediaArtifact};
pub use chat::{ChatSession, Role, Turn};
pub use client::{GeminiClient, GeminiClientBuilder};
pub use config::GeminiConfig;
pub use error::{classify_provider_error, Error};
pub use image::AspectRatio;
pub use text::NO_RESPONSE_SENTINEL;
pub use video::{GenerationJob, JobStatus};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
