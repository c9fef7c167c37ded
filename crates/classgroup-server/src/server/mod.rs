//! Server-side components of the `classgroup` web service.
//!
//! ## Submodules
//!
//! - [`config`] - CLI / environment configuration.
//! - [`error`] - Request-level error type and its HTTP mapping.
//! - [`routes`] - Router, handlers and HTML views.
//! - [`session`] - Per-client session store with expiry.
//! - [`state`] - Shared application state handed to handlers.
//! - [`telemetry`] - Structured logging and optional metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod telemetry;
