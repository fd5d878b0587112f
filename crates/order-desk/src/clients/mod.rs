//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod session_client;

pub use session_client::*;
