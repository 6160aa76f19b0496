//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod breed_catalog_source;
mod breed_query;
mod password_hasher;
mod user_directory;
mod user_store;

#[cfg(test)]
pub use breed_catalog_source::MockBreedCatalogSource;
pub use breed_catalog_source::{
    BreedCatalogError, BreedCatalogSource, BreedWindow, FixtureBreedCatalogSource,
};
#[cfg(test)]
pub use breed_query::MockBreedQuery;
pub use breed_query::BreedQuery;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::PasswordHasher;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::UserDirectory;
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{UserStore, UserStoreError};
