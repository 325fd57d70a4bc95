//! Utility functions shared by the services and the store implementations.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`validation`] - Target URL and alias syntax rules
//! - [`db_error`] - PostgreSQL error classification

pub mod alias_generator;
pub mod db_error;
pub mod validation;
