//! API key middleware.
//!
//! # Responsibilities
//! - Wrap the pure decision in the axum middleware protocol
//! - Strip the successful credential header before forwarding
//! - Emit diagnostic lines when enabled
//!
//! # Design Decisions
//! - State is an Arc over immutable settings; cloning is cheap and the
//!   middleware holds no per-request state
//! - Logs on request receipt and on authorization, never on rejection
//! - The inner handler's response passes through unmodified and unobserved

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth::{Decision, Settings};
use crate::config::{validate, ApiKeyConfig, ConfigError};
use crate::http::response::RejectionBody;

/// Shared state for [`api_key_middleware`]. Construct once, clone freely.
#[derive(Debug, Clone)]
pub struct ApiKeyState {
    settings: Arc<Settings>,
}

impl ApiKeyState {
    /// Validate the config and build the gate's immutable state.
    ///
    /// Fails fast on an empty key list or when both credential sources are
    /// disabled; neither error is recoverable at request time.
    pub fn new(config: ApiKeyConfig) -> Result<Self, ConfigError> {
        let settings = validate(config)?;

        if settings.log_enabled {
            tracing::info!(
                header_path = settings.use_header_credential,
                header_name = %settings.header_credential_name,
                bearer_path = settings.use_bearer_credential,
                bearer_header_name = %settings.bearer_header_name,
                keys = settings.valid_keys.len(),
                strip_on_success = settings.strip_header_on_success,
                "API key gate configured"
            );
        }

        Ok(Self {
            settings: Arc::new(settings),
        })
    }

    /// The validated settings backing this gate.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Authorization gate, for use with `axum::middleware::from_fn_with_state`.
///
/// Authorized requests continue to the inner handler, with the credential
/// header removed when configured. Everything else gets the fixed 403
/// rejection and the inner handler never runs.
pub async fn api_key_middleware(
    State(state): State<ApiKeyState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let settings = state.settings();

    if settings.log_enabled {
        tracing::info!(method = %req.method(), uri = %req.uri(), "request received");
    }

    match settings.decide(req.headers()) {
        Decision::Authorized(source) => {
            if settings.strip_header_on_success {
                req.headers_mut().remove(source.header_name(settings));
            }
            if settings.log_enabled {
                tracing::info!(method = %req.method(), uri = %req.uri(), "request authorized");
            }
            next.run(req).await
        }
        Decision::Rejected => RejectionBody::invalid_api_key().into_response(),
    }
}
