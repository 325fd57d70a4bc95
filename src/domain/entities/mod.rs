//! Core domain entities.
//!
//! - [`ShortLink`] - A persisted alias to target URL mapping

pub mod short_link;

pub use short_link::ShortLink;
