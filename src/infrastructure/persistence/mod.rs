//! URL store implementations.
//!
//! # Stores
//!
//! - [`PgUrlStore`] - PostgreSQL via SQLx, used when a database is configured
//! - [`MemoryUrlStore`] - Process-local map for development and tests

pub mod memory_url_store;
pub mod pg_url_store;

pub use memory_url_store::MemoryUrlStore;
pub use pg_url_store::PgUrlStore;
