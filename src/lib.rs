//! API key authorization gate for axum.
//!
//! Validates a shared-secret key presented via a custom header (default
//! `X-API-KEY`) or a Bearer-scheme `Authorization` header against a static
//! allow-list. Authorized requests pass through to the inner handler, with
//! the credential header optionally stripped so downstream code never sees
//! the secret. Everything else gets a fixed `403` JSON response.
//!
//! ```no_run
//! use axum::{middleware, routing::get, Router};
//! use keygate::{api_key_middleware, ApiKeyConfig, ApiKeyState};
//!
//! # fn main() -> Result<(), keygate::ConfigError> {
//! let config = ApiKeyConfig {
//!     keys: vec!["some-api-key".to_string()],
//!     ..ApiKeyConfig::default()
//! };
//! let state = ApiKeyState::new(config)?;
//!
//! let app: Router = Router::new()
//!     .route("/", get(|| async { "hello" }))
//!     .layer(middleware::from_fn_with_state(state, api_key_middleware));
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod http;
pub mod observability;

pub use auth::{CredentialSource, Decision, Settings};
pub use config::{ApiKeyConfig, ConfigError};
pub use http::middleware::{api_key_middleware, ApiKeyState};
pub use http::response::RejectionBody;
