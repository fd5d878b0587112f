//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber used by every binary
//! built on the framework.
//!
//! - **Filtering** comes from `RUST_LOG` (`RUST_LOG=info`, `RUST_LOG=debug`,
//!   `RUST_LOG=actor_framework=debug,order_desk=info`, ...). With no `RUST_LOG` set,
//!   `info` is used.
//! - **Compact format** without module targets. Actor logs carry an `entity_type` field
//!   instead, which is shorter and says more.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` and `Shutdown` with the final store size.
//! - **Requests**: every `Get` / `Action` at `debug`, including the action payload.
//! - **Eviction**: dormant entities leaving the store, at `debug`.
//! - **Failures**: `Action failed` at `warn`, with the entity key and error.
//!
//! ```text
//! INFO Actor started entity_type="OrderSession"
//! DEBUG Action entity_type="OrderSession" id=42 action=Text { .. }
//! WARN Action failed entity_type="OrderSession" id=42 error=Entity error: ...
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false) // entity_type replaces the module path
        .compact()
        .init();
}
