//! HTTP API for Bazi readings.
//!
//! `POST /api/chart` computes a chart and issues a question set under a new
//! session. `POST /api/result` scores the answers for that session and returns
//! the fortune report. Sessions are held in memory.

/// Routes and wire types.
pub mod api;
/// Server configuration.
pub mod config;
/// Error types.
pub mod error;
/// Router and server loop.
pub mod server;
/// Session storage.
pub mod session;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use server::{AppState, router, run};
pub use session::{MemorySessionStore, Session, SessionStore};
