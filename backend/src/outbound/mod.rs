//! Outbound adapters implementing the domain's driven ports.
//!
//! - **catalog**: TheCatAPI over reqwest (`BreedCatalogSource`)
//! - **persistence**: PostgreSQL user store via Diesel (`UserStore`)
//! - **memory**: volatile user store for database-less runs (`UserStore`)
//! - **hashing**: SHA-256 password digests (`PasswordHasher`)
//!
//! Adapters translate between domain types and infrastructure
//! representations and contain no business logic.

pub mod catalog;
pub mod hashing;
pub mod memory;
pub mod persistence;
