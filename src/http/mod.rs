//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (host's axum Router)
//!     → middleware.rs (log, decide, strip credential header)
//!     → Authorized: next handler runs, its response passes through untouched
//!     → Rejected: response.rs (fixed 403 JSON, next handler never runs)
//! ```

pub mod middleware;
pub mod response;

pub use middleware::{api_key_middleware, ApiKeyState};
pub use response::RejectionBody;
