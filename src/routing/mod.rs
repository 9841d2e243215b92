//! Route gating.
//!
//! Maps the resolved identity to one of four route states and decides, for
//! any requested path, whether to stay or replace-navigate somewhere else.

pub mod gate;
pub mod paths;

pub use gate::{RouteDecision, RouteGate, RouteState, decide};
pub use paths::is_public;
