//! Connectivity status service.
//!
//! A single-route web service demonstrating access to two backing stores
//! from a stateless handler: a pooled PostgreSQL database, reached over
//! direct TCP or a local proxy socket depending on the environment, and a
//! Redis cache. The status page always renders with HTTP 200; backing-store
//! failures are logged and degrade to placeholder text in the page body.
//!
//! # Layers
//!
//! - **config**: environment settings and fixed tuning constants
//! - **infra**: backing-store clients (PostgreSQL pool, Redis cache)
//! - **api**: HTTP state, routes, and the status handler
//! - **server**: listener setup and startup
//! - **errors**: centralized error handling

pub mod api;
pub mod config;
pub mod errors;
pub mod infra;
pub mod server;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use infra::{Cache, Database};
