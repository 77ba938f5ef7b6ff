//! Observability subsystem.
//!
//! The gate emits structured events through `tracing`; whatever subscriber
//! the host installs is the sink. Tests install a capturing subscriber and
//! assert on the emitted lines.

pub mod logging;
