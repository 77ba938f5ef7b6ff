//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! declarative config (JSON from the host's config loader)
//!     → schema.rs (deserialize, apply defaults)
//!     → validation.rs (semantic checks)
//!     → Settings (validated, immutable)
//!     → shared via Arc for the process lifetime
//! ```
//!
//! # Design Decisions
//! - Config is immutable once validated; there is no reload path
//! - All fields except `keys` have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Validation runs exactly once, at construction, never per request

pub mod schema;
pub mod validation;

pub use schema::ApiKeyConfig;
pub use validation::{validate, ConfigError};
