//! Structured logging.
//!
//! # Responsibilities
//! - Initialize a tracing subscriber for hosts that want the gate's
//!   diagnostic lines on stdout
//!
//! # Design Decisions
//! - Uses the tracing crate; the host may install its own subscriber instead
//! - Log level configurable via RUST_LOG, defaulting to this crate at info

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stdout subscriber. Call at most once per process.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keygate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
