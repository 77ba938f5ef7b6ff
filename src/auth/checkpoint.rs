//! The authorization checkpoint.
//!
//! # Responsibilities
//! - Hold validated, immutable settings with an O(1) key set
//! - Decide accept/reject from request headers alone
//!
//! # Design Decisions
//! - Header path strictly takes priority over the bearer path
//! - An absent or non-UTF-8 header reads as the empty string
//! - No per-request state; safe to share across in-flight requests

use std::collections::HashSet;

use axum::http::HeaderMap;

use crate::auth::credential::{bearer_key, CredentialSource};

/// Validated, immutable settings. Built by [`crate::config::validate`],
/// never mutated afterward.
#[derive(Debug, Clone)]
pub struct Settings {
    pub use_header_credential: bool,
    pub header_credential_name: String,
    pub use_bearer_credential: bool,
    pub bearer_header_name: String,
    pub valid_keys: HashSet<String>,
    pub strip_header_on_success: bool,
    pub log_enabled: bool,
}

/// Outcome of the per-request decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The request carries a valid key via the given source.
    Authorized(CredentialSource),
    /// No enabled source produced a valid key.
    Rejected,
}

impl Settings {
    /// Decide whether a request is authorized, from its headers alone.
    ///
    /// Pure function: no logging, no mutation. The caller handles header
    /// stripping and the rejection response.
    pub fn decide(&self, headers: &HeaderMap) -> Decision {
        if self.use_header_credential {
            let candidate = header_value(headers, &self.header_credential_name);
            if self.valid_keys.contains(candidate) {
                return Decision::Authorized(CredentialSource::Header);
            }
        }

        if self.use_bearer_credential {
            let value = header_value(headers, &self.bearer_header_name);
            if let Some(candidate) = bearer_key(value) {
                if self.valid_keys.contains(candidate) {
                    return Decision::Authorized(CredentialSource::Bearer);
                }
            }
        }

        Decision::Rejected
    }
}

/// Read a header value as a string; absent or non-UTF-8 reads as "".
fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
