//! Application layer services implementing the shortening workflow.
//!
//! Services orchestrate validation, alias selection and store calls, and
//! translate store outcomes into [`crate::error::AppError`]. Each service
//! depends on exactly one store capability.
//!
//! # Available Services
//!
//! - [`services::shortening_service::ShorteningService`] - Create mappings
//! - [`services::resolution_service::ResolutionService`] - Resolve aliases
//! - [`services::deletion_service::DeletionService`] - Remove mappings

pub mod services;
