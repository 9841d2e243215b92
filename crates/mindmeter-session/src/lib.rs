//! # MindMeter Session
//!
//! Session storage abstraction and accessors for the MindMeter client.
//!
//! This crate provides:
//!
//! - [`store`]: The [`SessionStore`] trait and the in-memory backend
//! - [`file`]: A file-backed store, the CLI's analog of browser local storage
//! - [`keys`]: The slot-key constants shared with the original web client
//! - [`accessor`]: The [`Session`] accessor layer over raw slots
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use mindmeter_session::{MemoryStore, Session};
//!
//! let session = Session::new(Arc::new(MemoryStore::new()));
//!
//! session.store_login("token-123", &user);
//! assert_eq!(session.current_token().as_deref(), Some("token-123"));
//!
//! session.clear_all();
//! assert!(session.current_token().is_none());
//! ```

pub mod accessor;
pub mod file;
pub mod keys;
pub mod store;

// Re-export commonly used types at crate root
pub use accessor::Session;
pub use file::FileStore;
pub use store::{MemoryStore, SessionStore};
