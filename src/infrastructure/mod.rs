//! Infrastructure layer for external integrations.
//!
//! This layer implements the store contract defined by the domain layer and
//! provides the redirect cache.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`persistence`] - PostgreSQL and in-memory store implementations

pub mod cache;
pub mod persistence;
