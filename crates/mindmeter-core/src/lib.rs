//! # MindMeter Core
//!
//! Core types, errors, and utilities for the MindMeter client.
//!
//! This crate provides foundational types used throughout the MindMeter client:
//!
//! - [`error`]: The shared error type and crate-wide `Result` alias
//! - [`pagination`]: Page parameters and metadata for list endpoints
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use mindmeter_core::{Error, Result};
//! use mindmeter_core::pagination::PageParams;
//!
//! fn fetch() -> Result<()> {
//!     Err(Error::api(404, "user not found"))
//! }
//!
//! let params = PageParams::default();
//! let query = params.to_query();
//! ```

pub mod error;
pub mod pagination;
pub mod serde;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use pagination::{PageMeta, PageParams, Paginated};
