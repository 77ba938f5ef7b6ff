//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the key list is non-empty
//! - Check at least one credential source is enabled
//!
//! # Design Decisions
//! - Rules are evaluated in order; the first violation is fatal
//! - Validation is a pure function: ApiKeyConfig → Result<Settings, ConfigError>
//! - Runs once at construction, never per request

use std::collections::HashSet;

use thiserror::Error;

use crate::auth::Settings;
use crate::config::schema::ApiKeyConfig;

/// Fatal configuration errors, detected before the gate becomes active.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The key allow-list is empty.
    #[error("must specify at least one valid key")]
    EmptyKeyList,

    /// Both credential paths are disabled.
    #[error("at least one credential source must be enabled")]
    NoCredentialSourceEnabled,
}

/// Validate a declarative config into immutable [`Settings`].
///
/// The key list is converted to a set; membership is the only operation the
/// decision path ever performs on it.
pub fn validate(config: ApiKeyConfig) -> Result<Settings, ConfigError> {
    if config.keys.is_empty() {
        return Err(ConfigError::EmptyKeyList);
    }

    if !config.authentication_header && !config.bearer_header {
        return Err(ConfigError::NoCredentialSourceEnabled);
    }

    let valid_keys: HashSet<String> = config.keys.into_iter().collect();

    Ok(Settings {
        use_header_credential: config.authentication_header,
        header_credential_name: config.header_name,
        use_bearer_credential: config.bearer_header,
        bearer_header_name: config.bearer_header_name,
        valid_keys,
        strip_header_on_success: config.remove_headers_on_success,
        log_enabled: config.enable_log,
    })
}
