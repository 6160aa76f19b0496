//! Username derivation and collision-free allocation.

use std::sync::Arc;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{UserValidationError, Username};

/// Lowercased concatenation of `name` and `lastname` with all whitespace
/// removed.
///
/// # Examples
/// ```
/// use catapi_backend::domain::base_username;
///
/// assert_eq!(base_username("Mary Ann", "Van Dyke").unwrap().as_ref(), "maryannvandyke");
/// ```
pub fn base_username(name: &str, lastname: &str) -> Result<Username, UserValidationError> {
    let base: String = name
        .chars()
        .chain(lastname.chars())
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    Username::new(base)
}

/// Finds the first free username in the sequence `base`, `base1`, `base2`, ...
///
/// Allocation is a read-only probe; the store's uniqueness check on insert is
/// what makes the result stick.
pub struct UsernameAllocator<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for UsernameAllocator<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> UsernameAllocator<S>
where
    S: UserStore + ?Sized,
{
    /// Create an allocator probing `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Return the first candidate the store does not already hold.
    pub async fn allocate(&self, base: &Username) -> Result<Username, UserStoreError> {
        let mut candidate = base.clone();
        for suffix in 1_u64.. {
            if !self.store.username_exists(&candidate).await? {
                return Ok(candidate);
            }
            candidate = base.with_suffix(suffix);
        }
        Err(UserStoreError::query(format!(
            "no free username derived from {base}"
        )))
    }
}
