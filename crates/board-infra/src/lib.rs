//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//!
//! With `postgres` disabled only the in-memory repository is built.

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
