#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros so
//! downstream crates can log through `sash_core` without naming `tracing`
//! themselves. Without the feature the module is empty.

#[cfg(feature = "tracing")]
pub use tracing::{
    Level, debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn,
    warn_span,
};
