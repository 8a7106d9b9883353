//! # Board Core
//!
//! The domain layer of the board backend.
//! This crate holds the post entity, its output projections, the repository
//! port and the posts service. It has no storage or HTTP dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::PostService;
