//! Store capability traits for the domain layer.
//!
//! The store is split into narrow capabilities so each service depends only on
//! the operation it performs:
//!
//! - [`UrlSaver`] - used by the shortening service
//! - [`UrlGetter`] - used by the resolution service
//! - [`UrlDeleter`] - used by the deletion service
//! - [`StoreHealth`] - used by the health endpoint
//!
//! Implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for unit tests.

pub mod url_store;

pub use url_store::{StoreError, StoreHealth, UrlDeleter, UrlGetter, UrlSaver, UrlStore};

#[cfg(test)]
pub use url_store::{MockStoreHealth, MockUrlDeleter, MockUrlGetter, MockUrlSaver};
