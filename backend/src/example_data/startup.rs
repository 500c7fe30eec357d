//! Startup seeding of example users into the record store.

use example_data::{ExampleUserSeed, GenerationError, RegistryError, SeedRegistry};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, UserId};
use crate::example_data::config::ExampleDataSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry loading or lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// User generation failed.
    #[error("example user generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// The record store rejected an insert for a reason other than a taken username.
    #[error("example data persistence failed: {0}")]
    Persistence(#[from] UserPersistenceError),
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// Summary of one seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedingOutcome {
    /// Identifiers of the users created, in insertion order.
    pub created: Vec<UserId>,
    /// Seeds skipped because their username was already taken.
    pub skipped_duplicates: usize,
    /// Seeds skipped because they failed domain validation.
    pub skipped_invalid: usize,
}

/// Insert `seeds` into `repository`.
///
/// Taken usernames and seeds that fail validation are skipped and counted;
/// any other store failure aborts the run.
pub async fn seed_users(
    repository: &dyn UserRepository,
    seeds: &[ExampleUserSeed],
) -> Result<SeedingOutcome, UserPersistenceError> {
    let mut outcome = SeedingOutcome::default();

    for seed in seeds {
        let profile = match NewUser::try_from_strings(
            seed.username.as_str(),
            seed.name.as_deref(),
            seed.avatar.as_deref(),
        ) {
            Ok(profile) => profile,
            Err(error) => {
                warn!(username = %seed.username, %error, "skipping invalid example user");
                outcome.skipped_invalid += 1;
                continue;
            }
        };

        match repository.create(profile).await {
            Ok(user) => outcome.created.push(user.id()),
            Err(UserPersistenceError::Duplicate { username }) => {
                info!(%username, "example user already present; skipping");
                outcome.skipped_duplicates += 1;
            }
            Err(other) => return Err(other),
        }
    }

    Ok(outcome)
}

/// Seed example users on startup when enabled.
///
/// Returns `Ok(None)` when seeding is disabled.
///
/// # Examples
///
/// ```rust,no_run
/// use backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
/// use backend::outbound::persistence::InMemoryUserRepository;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings {
///     enabled: false,
///     seed_name: None,
///     count: None,
///     registry_path: None,
/// };
/// let repository = InMemoryUserRepository::new();
/// let outcome = seed_example_data_on_startup(&settings, &repository).await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup(
    settings: &ExampleDataSettings,
    repository: &dyn UserRepository,
) -> Result<Option<SeedingOutcome>, StartupSeedingError> {
    if !settings.is_enabled() {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let seed_name = settings.seed_name().trim();
    if seed_name.is_empty() {
        return Err(StartupSeedingError::EmptySeedName);
    }

    let registry = SeedRegistry::from_file(&settings.registry_path())?;
    let definition = registry.find_seed(seed_name)?;
    let definition = match settings.count {
        Some(count) => definition.with_user_count(count),
        None => definition.clone(),
    };

    let seeds = example_data::generate_example_users(&registry, &definition)?;
    let outcome = seed_users(repository, &seeds).await?;

    info!(
        seed_key = seed_name,
        created = outcome.created.len(),
        skipped_duplicates = outcome.skipped_duplicates,
        skipped_invalid = outcome.skipped_invalid,
        "example data seeding applied"
    );
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockUserRepository;
    use crate::outbound::persistence::InMemoryUserRepository;
    use rstest::{fixture, rstest};

    fn seed(username: &str) -> ExampleUserSeed {
        ExampleUserSeed {
            username: username.to_owned(),
            name: None,
            avatar: None,
        }
    }

    #[fixture]
    fn settings() -> ExampleDataSettings {
        ExampleDataSettings {
            enabled: true,
            seed_name: None,
            count: Some(4),
            registry_path: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn duplicates_and_invalid_seeds_are_counted() {
        let repository = InMemoryUserRepository::new();
        let seeds = [seed("kody"), seed("KODY"), seed("no spaces"), seed("lola")];

        let outcome = seed_users(&repository, &seeds).await.expect("seeding runs");

        assert_eq!(outcome.created.len(), 2);
        assert_eq!(outcome.skipped_duplicates, 1);
        assert_eq!(outcome.skipped_invalid, 1);
        assert_eq!(repository.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn store_failures_abort_seeding() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|_| Err(UserPersistenceError::connection("refused")));

        let err = seed_users(&repository, &[seed("kody"), seed("lola")])
            .await
            .expect_err("connection failure aborts");

        assert_eq!(err, UserPersistenceError::connection("refused"));
    }

    #[rstest]
    #[tokio::test]
    async fn disabled_settings_skip_seeding(mut settings: ExampleDataSettings) {
        settings.enabled = false;
        let repository = InMemoryUserRepository::new();

        let outcome = seed_example_data_on_startup(&settings, &repository)
            .await
            .expect("disabled run succeeds");

        assert!(outcome.is_none());
        assert!(repository.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn bundled_registry_seeds_requested_count(settings: ExampleDataSettings) {
        let repository = InMemoryUserRepository::new();

        let outcome = seed_example_data_on_startup(&settings, &repository)
            .await
            .expect("seeding succeeds")
            .expect("seeding enabled");

        assert_eq!(outcome.created.len() + outcome.skipped_invalid, 4);
        assert_eq!(repository.len(), outcome.created.len());
    }

    #[rstest]
    #[tokio::test]
    async fn blank_seed_name_is_rejected(mut settings: ExampleDataSettings) {
        settings.seed_name = Some("  ".to_owned());
        let repository = InMemoryUserRepository::new();

        let err = seed_example_data_on_startup(&settings, &repository)
            .await
            .expect_err("blank seed name");

        assert!(matches!(err, StartupSeedingError::EmptySeedName));
    }
}
