//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`BusinessRepository`] - Read access to business listings

pub mod business_repository;

pub use business_repository::BusinessRepository;

#[cfg(test)]
pub use business_repository::MockBusinessRepository;
