//! cellgen
//!
//! A minimal Google Gemini client for per-cell spreadsheet processing: the
//! host application hands over one cell's content plus prompt layers and
//! gets back exactly one text completion or one failure message.
//!
//! The public surface is [`GeminiManager`] with five operations: initialize,
//! switch model, list the static model catalog, probe connectivity, and
//! process a single cell. Batching, retries, rate limiting, streaming, and
//! caching are deliberately out of scope — one request in, one terminal
//! outcome out.
//!
//! # Example
//!
//! ```rust,ignore
//! use cellgen::{CellRequest, GeminiManager};
//!
//! let mut manager = GeminiManager::from_api_key("your-api-key");
//! let request = CellRequest::new("B2", "Classify sentiment", "Return positive/negative")
//!     .with_context_pair("Column A", "Revenue");
//! let outcome = manager.process_single_cell(&request).await;
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod manager;
pub mod models;
pub mod outcome;
pub mod prompt;
pub mod protocol;

pub use client::{GeminiClient, GeminiConfig};
pub use error::GeminiError;
pub use manager::GeminiManager;
pub use models::{ModelDescriptor, available_models};
pub use outcome::CellOutcome;
pub use prompt::CellRequest;
