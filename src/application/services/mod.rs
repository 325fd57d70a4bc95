//! Business logic services for the application layer.

pub mod deletion_service;
pub mod resolution_service;
pub mod shortening_service;

pub use deletion_service::DeletionService;
pub use resolution_service::ResolutionService;
pub use shortening_service::{Shortened, ShorteningService};
