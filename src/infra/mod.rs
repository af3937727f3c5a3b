//! Infrastructure layer - backing store clients
//!
//! This module holds the external system concerns:
//! - PostgreSQL connection pooling and transport selection
//! - Redis cache connection

pub mod cache;
pub mod db;

pub use cache::Cache;
pub use db::{Database, DbTransport};
