//! Tests for the user directory service.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockPasswordHasher, MockUserStore};
use crate::domain::{ErrorCode, PasswordDigest, Username};

#[fixture]
fn hasher() -> MockPasswordHasher {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_digest()
        .returning(|password| PasswordDigest::new(format!("digest:{password}")));
    hasher
}

fn registration() -> Registration {
    Registration::try_from_parts("John", "Doe", "1234").expect("valid registration")
}

fn credentials(username: &str, password: &str) -> LoginCredentials {
    LoginCredentials::try_from_parts(username, password).expect("valid credentials")
}

fn directory(
    store: MockUserStore,
    hasher: MockPasswordHasher,
) -> UserDirectoryService<MockUserStore, MockPasswordHasher> {
    UserDirectoryService::new(Arc::new(store), Arc::new(hasher))
}

/// Store whose probe answers from a shared set of taken usernames.
fn store_with_taken(taken: Arc<Mutex<HashSet<String>>>) -> MockUserStore {
    let mut store = MockUserStore::new();
    store.expect_username_exists().returning(move |candidate| {
        Ok(taken
            .lock()
            .expect("taken set lock")
            .contains(candidate.as_ref()))
    });
    store
}

#[rstest]
#[tokio::test]
async fn register_on_empty_store_uses_base_username(hasher: MockPasswordHasher) {
    let mut store = store_with_taken(Arc::default());
    store
        .expect_insert()
        .withf(|record| {
            record.profile().username().as_ref() == "johndoe"
                && record.password_digest() == &PasswordDigest::new("digest:1234")
        })
        .times(1)
        .returning(|_| Ok(()));

    let profile = directory(store, hasher)
        .register(&registration())
        .await
        .expect("registration succeeds");

    assert_eq!(profile.username().as_ref(), "johndoe");
    assert_eq!((profile.name(), profile.lastname()), ("John", "Doe"));
}

#[rstest]
#[tokio::test]
async fn register_suffixes_taken_username(hasher: MockPasswordHasher) {
    let taken = Arc::new(Mutex::new(HashSet::from(["johndoe".to_owned()])));
    let mut store = store_with_taken(taken);
    store.expect_insert().times(1).returning(|_| Ok(()));

    let profile = directory(store, hasher)
        .register(&registration())
        .await
        .expect("registration succeeds");

    assert_eq!(profile.username().as_ref(), "johndoe1");
}

#[rstest]
#[tokio::test]
async fn register_reallocates_after_concurrent_claim(hasher: MockPasswordHasher) {
    let taken: Arc<Mutex<HashSet<String>>> = Arc::default();
    let mut store = store_with_taken(Arc::clone(&taken));
    let mut raced = false;
    store.expect_insert().times(2).returning(move |record| {
        let username = record.profile().username().to_string();
        if raced {
            return Ok(());
        }
        raced = true;
        // Another registration lands first with the same username.
        taken.lock().expect("taken set lock").insert(username.clone());
        Err(UserStoreError::duplicate_username(username))
    });

    let profile = directory(store, hasher)
        .register(&registration())
        .await
        .expect("registration succeeds on retry");

    assert_eq!(profile.username().as_ref(), "johndoe1");
}

#[rstest]
#[tokio::test]
async fn register_gives_up_after_bounded_attempts(hasher: MockPasswordHasher) {
    let mut store = store_with_taken(Arc::default());
    store
        .expect_insert()
        .times(MAX_REGISTRATION_ATTEMPTS as usize)
        .returning(|record| {
            Err(UserStoreError::duplicate_username(
                record.profile().username().to_string(),
            ))
        });

    let error = directory(store, hasher)
        .register(&registration())
        .await
        .expect_err("registration fails");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[case(UserStoreError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(UserStoreError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn register_maps_store_failures(
    hasher: MockPasswordHasher,
    #[case] failure: UserStoreError,
    #[case] expected: ErrorCode,
) {
    let mut store = store_with_taken(Arc::default());
    store.expect_insert().return_once(move |_| Err(failure));

    let error = directory(store, hasher)
        .register(&registration())
        .await
        .expect_err("registration fails");

    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn login_looks_up_digest_of_supplied_password(hasher: MockPasswordHasher) {
    let mut store = MockUserStore::new();
    store
        .expect_find_by_credentials()
        .withf(|username, digest| {
            username == "johndoe" && digest == &PasswordDigest::new("digest:1234")
        })
        .times(1)
        .returning(|username, _| {
            Ok(Some(UserProfile::new(
                "John",
                "Doe",
                Username::new(username).expect("valid username"),
            )))
        });

    let profile = directory(store, hasher)
        .login(&credentials("johndoe", "1234"))
        .await
        .expect("login succeeds");

    assert_eq!(profile.username().as_ref(), "johndoe");
}

#[rstest]
#[tokio::test]
async fn login_without_match_is_unauthorized(hasher: MockPasswordHasher) {
    let mut store = MockUserStore::new();
    store
        .expect_find_by_credentials()
        .returning(|_, _| Ok(None));

    let error = directory(store, hasher)
        .login(&credentials("johndoe", "wrong"))
        .await
        .expect_err("login fails");

    assert_eq!(error.code(), ErrorCode::Unauthorized);
    assert_eq!(error.message(), "Invalid credentials");
}

#[rstest]
#[tokio::test]
async fn list_skips_page_times_limit_without_links(hasher: MockPasswordHasher) {
    let mut store = MockUserStore::new();
    store
        .expect_list()
        .withf(|offset, limit| *offset == 20 && *limit == 10)
        .times(1)
        .returning(|_, _| {
            Ok(vec![UserProfile::new(
                "Ada",
                "Lovelace",
                Username::new("adalovelace").expect("valid username"),
            )])
        });
    let request = PageRequest::new(10, 2, 100).expect("valid window");

    let page = directory(store, hasher)
        .list_users(request)
        .await
        .expect("list succeeds");

    assert_eq!(page.results().len(), 1);
    assert_eq!((page.limit(), page.page()), (10, 2));
    assert!(page.next().is_none());
    assert!(page.previous().is_none());
}
