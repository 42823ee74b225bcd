//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgBusinessRepository`] - Business listing reads and creation-window counts

pub mod pg_business_repository;

pub use pg_business_repository::PgBusinessRepository;
