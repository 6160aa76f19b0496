//! Domain primitives, services and ports.
//!
//! Purpose: keep breed lookups and the user directory independent of HTTP,
//! reqwest and Diesel. Inbound adapters call the driving ports in [`ports`];
//! outbound adapters implement the driven ones.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure envelope.
//! - Breed: remote catalog record.
//! - UserProfile / UserRecord / Username / Registration / LoginCredentials:
//!   user directory model.
//! - BreedQueryService / UserDirectoryService: driving port implementations.

pub mod auth;
pub mod breed;
mod breed_service;
pub mod error;
pub mod ports;
mod trace_id;
pub mod user;
mod user_directory_service;
pub mod username;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::breed::{Breed, BreedImage, BreedWeight};
pub use self::breed_service::BreedQueryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    PasswordDigest, Registration, UserProfile, UserRecord, UserValidationError, Username,
};
pub use self::user_directory_service::{MAX_REGISTRATION_ATTEMPTS, UserDirectoryService};
pub use self::username::{UsernameAllocator, base_username};
