//! Configuration schema definitions.
//!
//! Field names follow the wire shape the host's configuration loader hands
//! over (camelCase JSON). All types derive Serde traits for deserialization.

use serde::{Deserialize, Serialize};

/// Declarative settings for the API key gate.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiKeyConfig {
    /// Enable the custom-header credential path.
    pub authentication_header: bool,

    /// Name of the custom credential header.
    pub header_name: String,

    /// Enable the Bearer-scheme credential path.
    pub bearer_header: bool,

    /// Name of the header carrying the Bearer-scheme value.
    pub bearer_header_name: String,

    /// Allow-listed keys. Must be non-empty.
    pub keys: Vec<String>,

    /// Strip the successful credential header before forwarding.
    pub remove_headers_on_success: bool,

    /// Emit diagnostic log lines. Has no effect on the decision.
    pub enable_log: bool,
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            authentication_header: true,
            header_name: "X-API-KEY".to_string(),
            bearer_header: true,
            bearer_header_name: "Authorization".to_string(),
            keys: Vec::new(),
            remove_headers_on_success: true,
            enable_log: false,
        }
    }
}
