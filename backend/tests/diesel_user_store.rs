//! Integration tests for `DieselUserStore` against embedded PostgreSQL.
//!
//! Each test gets a fresh database with the embedded migrations applied, so
//! the unique username index and `id` ordering are the real ones.

use catapi_backend::domain::ports::{UserStore, UserStoreError};
use catapi_backend::domain::{PasswordDigest, UserProfile, UserRecord, Username};
use catapi_backend::outbound::persistence::{DbPool, DieselUserStore, PoolConfig, run_migrations};
use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

mod support;

use support::{handle_cluster_setup_failure, provision_database};

struct StoreContext {
    runtime: Runtime,
    store: DieselUserStore,
    _database: TemporaryDatabase,
}

impl StoreContext {
    fn insert(&self, record: &UserRecord) -> Result<(), UserStoreError> {
        self.runtime.block_on(self.store.insert(record))
    }
}

fn setup_context() -> Result<StoreContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let database = provision_database()?;
    let database_url = database.url().to_owned();

    runtime
        .block_on(run_migrations(&database_url))
        .map_err(|err| err.to_string())?;
    let config = PoolConfig::new(database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(StoreContext {
        runtime,
        store: DieselUserStore::new(pool),
        _database: database,
    })
}

#[fixture]
fn store_context() -> Option<StoreContext> {
    match setup_context() {
        Ok(context) => Some(context),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn record(name: &str, lastname: &str, username: &str, digest: &str) -> UserRecord {
    UserRecord::new(
        UserProfile::new(
            name,
            lastname,
            Username::new(username).expect("valid username"),
        ),
        PasswordDigest::new(digest),
    )
}

fn usernames(profiles: &[UserProfile]) -> Vec<&str> {
    profiles
        .iter()
        .map(|profile| profile.username().as_ref())
        .collect()
}

#[rstest]
fn second_insert_of_a_username_is_rejected_as_duplicate(store_context: Option<StoreContext>) {
    let Some(context) = store_context else {
        eprintln!("SKIP-TEST-CLUSTER: second_insert_of_a_username_is_rejected_as_duplicate skipped");
        return;
    };

    context
        .insert(&record("John", "Doe", "johndoe", "digest-a"))
        .expect("first insert succeeds");
    let error = context
        .insert(&record("Jon", "Doe", "johndoe", "digest-b"))
        .expect_err("second insert violates the unique index");

    assert!(
        matches!(&error, UserStoreError::DuplicateUsername { username } if username == "johndoe"),
        "unexpected error: {error:?}"
    );
}

#[rstest]
fn username_probe_reflects_inserted_rows(store_context: Option<StoreContext>) {
    let Some(context) = store_context else {
        eprintln!("SKIP-TEST-CLUSTER: username_probe_reflects_inserted_rows skipped");
        return;
    };
    let taken = Username::new("johndoe").expect("valid username");
    let free = Username::new("johndoe1").expect("valid username");

    context
        .insert(&record("John", "Doe", "johndoe", "digest-a"))
        .expect("insert succeeds");

    let (taken_exists, free_exists) = context.runtime.block_on(async {
        (
            context.store.username_exists(&taken).await,
            context.store.username_exists(&free).await,
        )
    });
    assert_eq!(taken_exists, Ok(true));
    assert_eq!(free_exists, Ok(false));
}

#[rstest]
#[case("johndoe", "digest-a", true)]
#[case("johndoe", "digest-b", false)]
#[case("janedoe", "digest-a", false)]
#[case("JohnDoe", "digest-a", false)]
fn credential_lookup_requires_exact_username_and_digest(
    store_context: Option<StoreContext>,
    #[case] username: &str,
    #[case] digest: &str,
    #[case] expect_match: bool,
) {
    let Some(context) = store_context else {
        eprintln!("SKIP-TEST-CLUSTER: credential_lookup_requires_exact_username_and_digest skipped");
        return;
    };

    context
        .insert(&record("John", "Doe", "johndoe", "digest-a"))
        .expect("insert succeeds");
    let found = context
        .runtime
        .block_on(
            context
                .store
                .find_by_credentials(username, &PasswordDigest::new(digest)),
        )
        .expect("lookup succeeds");

    match found {
        Some(profile) => {
            assert!(expect_match, "unexpected match for {username}/{digest}");
            assert_eq!(profile.username().as_ref(), "johndoe");
            assert_eq!((profile.name(), profile.lastname()), ("John", "Doe"));
        }
        None => assert!(!expect_match, "expected a match for {username}/{digest}"),
    }
}

#[rstest]
fn list_windows_rows_in_insertion_order(store_context: Option<StoreContext>) {
    let Some(context) = store_context else {
        eprintln!("SKIP-TEST-CLUSTER: list_windows_rows_in_insertion_order skipped");
        return;
    };

    // Inserted out of alphabetical order so only `id` ordering passes.
    for username in ["zoe", "adam", "mia", "bob"] {
        context
            .insert(&record("Test", "User", username, "digest"))
            .expect("insert succeeds");
    }

    let (all, window, past_end) = context.runtime.block_on(async {
        (
            context.store.list(0, 10).await.expect("list all"),
            context.store.list(1, 2).await.expect("list window"),
            context.store.list(4, 2).await.expect("list past end"),
        )
    });

    assert_eq!(usernames(&all), ["zoe", "adam", "mia", "bob"]);
    assert_eq!(usernames(&window), ["adam", "mia"]);
    assert!(past_end.is_empty());
}
