//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Application configuration
//! - Persistence: In-memory and SQLite character storage, item catalog
//! - HTTP: REST API routes
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod persistence;
pub mod state;
