//! Authorization decision subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request headers
//!     → credential.rs (extract candidate key per source)
//!     → checkpoint.rs (membership check, fixed priority order)
//!     → Decision (Authorized via a source, or Rejected)
//! ```
//!
//! # Design Decisions
//! - The decision is a pure function of headers and immutable settings
//! - Credential sources are a closed set of two; no plugin extensibility
//! - Rejection never reveals which check failed

pub mod checkpoint;
pub mod credential;

pub use checkpoint::{Decision, Settings};
pub use credential::CredentialSource;
