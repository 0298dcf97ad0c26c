//! HTTP server
//!
//! Transport realization of the engine's operation surface.

pub mod builder;
pub mod routes;
pub mod state;

pub use state::AppState;
