//! HTTP inbound adapter exposing the breed and user REST endpoints.

pub mod breeds;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;
