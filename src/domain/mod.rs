//! Domain layer containing the short link entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Store capability traits consumed by the services
//!
//! The domain layer has no knowledge of HTTP. Store implementations live in
//! [`crate::infrastructure::persistence`], orchestration lives in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
