//! PostgreSQL user store built on Diesel.
//!
//! Row structs (`models`) and the table definition (`schema`) stay private
//! to this module; only the store, the pool and the migration runner are
//! exported.
//!
//! ```ignore
//! use catapi_backend::outbound::persistence::{DbPool, DieselUserStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/catapi")).await?;
//! let store = DieselUserStore::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_user_store;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_store::DieselUserStore;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
