//! # MindMeter Client
//!
//! A typed client SDK and command-line shell for the MindMeter
//! mental-health self-assessment platform.
//!
//! ## Overview
//!
//! The backend is a REST service (JSON bodies, bearer-token auth) that this
//! crate talks to on behalf of four kinds of sessions:
//!
//! - **Admin**: user administration and platform statistics
//! - **Expert**: assigned students, messaging, advice answers
//! - **Student**: taking tests, history, messaging
//! - **Anonymous**: a guest session that shares the student experience
//!
//! ## Architecture
//!
//! The workspace keeps session handling, credential decoding, and identity
//! resolution in focused crates; this root crate composes them:
//!
//! ```text
//! src/
//! ├── cli/              # Command-line shell (login, tests, open, ...)
//! ├── client.rs         # Authenticated HTTP client with the global 401 contract
//! ├── modules/          # Typed API surface per backend namespace
//! │   ├── auth/            # Login, register, guest start, logout
//! │   ├── depression_test/ # Test catalog, taking, results
//! │   ├── student/         # Profile, history, messages
//! │   ├── expert/          # Dashboard, assigned students, advice
//! │   ├── admin/           # User administration, statistics
//! │   ├── advice/          # Public Q&A
//! │   ├── contact/         # Contact form with client-side cooldown
//! │   └── payment/         # Pricing plans and orders
//! └── routing/          # Route-gate state machine
//! ```
//!
//! Each API module follows a consistent structure:
//!
//! - `model.rs`: request/response DTOs
//! - `service.rs`: operations through the authenticated client
//!
//! ## Sessions and identity
//!
//! Two credentials can be stored at once — an authenticated token from
//! login and an anonymous token from the guest-start flow — and the
//! authenticated one always wins. `mindmeter_auth::resolve_identity` is the
//! single place the stored session becomes a UI-facing identity; the route
//! gate, the CLI, and the API modules all consume its output.
//!
//! A 401 from any endpoint clears the whole session and surfaces as
//! `Error::SessionExpired`; the route gate then resolves to Guest and the
//! catch-all lands on `/login`.
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! MINDMETER_API_URL=https://api.mindmeter.example
//! MINDMETER_SESSION_FILE=~/.mindmeter/session.json
//! MINDMETER_HTTP_TIMEOUT=30
//! ```
//!
//! ### Taking a test from the shell
//!
//! ```bash
//! mindmeter guest
//! mindmeter tests take PHQ-9
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line shell
//! - [`client`]: Authenticated HTTP client
//! - [`modules`]: Typed API modules per backend namespace
//! - [`routing`]: Route-gate state machine and the public route surface

pub mod cli;
pub mod client;
pub mod modules;
pub mod routing;

pub use client::ApiClient;

// Re-export workspace crates for convenience
pub use mindmeter_auth;
pub use mindmeter_config;
pub use mindmeter_core;
pub use mindmeter_models;
pub use mindmeter_session;
