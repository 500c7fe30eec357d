//! Deterministic user generation from seed definitions.
//!
//! The same seed value always produces identical output, including the
//! suffixes used to keep usernames unique within one generation run.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::registry::{SeedDefinition, SeedRegistry};
use crate::seed::ExampleUserSeed;
use crate::validation::{
    DISPLAY_NAME_MAX, USERNAME_MAX, is_valid_display_name, is_valid_username, sanitize_username,
};

/// Maximum number of attempts to generate a unique, valid username.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Probability of a user carrying a display name (4 in 5).
const NAME_PROBABILITY_NUMERATOR: u32 = 4;
const NAME_PROBABILITY_DENOMINATOR: u32 = 5;

/// Probability of a user carrying an avatar when the registry offers any.
const AVATAR_PROBABILITY_NUMERATOR: u32 = 7;
const AVATAR_PROBABILITY_DENOMINATOR: u32 = 10;

/// Generates example users from a seed definition.
///
/// Uses the seed's `seed` value to initialise a deterministic RNG. The
/// generated users have:
///
/// - Unique UUIDs (deterministically generated)
/// - Unique canonical usernames derived from a fake first and last name
/// - A display name for roughly four in five users
/// - An avatar drawn from the registry for roughly seven in ten users
///
/// # Errors
///
/// Returns [`GenerationError`] if a unique username cannot be produced after
/// the maximum number of retries.
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_users};
///
/// let json = r#"{
///     "version": 1,
///     "seeds": [{"name": "test", "seed": 42, "userCount": 3}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("test").expect("found");
/// let users = generate_example_users(&registry, seed_def).expect("generated");
///
/// assert_eq!(users.len(), 3);
/// let users2 = generate_example_users(&registry, seed_def).expect("generated");
/// assert_eq!(users, users2);
/// ```
pub fn generate_example_users(
    registry: &SeedRegistry,
    seed_def: &SeedDefinition,
) -> Result<Vec<ExampleUserSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let mut taken = HashSet::with_capacity(seed_def.user_count());
    let mut users = Vec::with_capacity(seed_def.user_count());

    for _ in 0..seed_def.user_count() {
        let user = generate_single_user(&mut rng, registry, &mut taken)?;
        users.push(user);
    }

    Ok(users)
}

fn generate_single_user(
    rng: &mut ChaCha8Rng,
    registry: &SeedRegistry,
    taken: &mut HashSet<String>,
) -> Result<ExampleUserSeed, GenerationError> {
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    let username = unique_username(&format!("{first}_{last}"), taken)?;

    let full_name: String = format!("{first} {last}")
        .chars()
        .take(DISPLAY_NAME_MAX)
        .collect();
    let name = (rng.random_ratio(NAME_PROBABILITY_NUMERATOR, NAME_PROBABILITY_DENOMINATOR)
        && is_valid_display_name(&full_name))
    .then_some(full_name);

    let avatars = registry.avatar_ids();
    let avatar = if !avatars.is_empty()
        && rng.random_ratio(AVATAR_PROBABILITY_NUMERATOR, AVATAR_PROBABILITY_DENOMINATOR)
    {
        avatars.get(rng.random_range(0..avatars.len())).cloned()
    } else {
        None
    };

    Ok(ExampleUserSeed {
        username,
        name,
        avatar,
    })
}

/// Derives a username from `raw` that is valid and not yet in `taken`.
///
/// Collisions are resolved by appending `_2`, `_3`, ... and shortening the
/// base so the result still fits [`USERNAME_MAX`].
fn unique_username(raw: &str, taken: &mut HashSet<String>) -> Result<String, GenerationError> {
    let base = sanitize_username(raw);
    if base.is_empty() {
        return Err(GenerationError::UsernameGenerationFailed { max_attempts: 0 });
    }

    for attempt in 1..=MAX_NAME_ATTEMPTS {
        let suffix = if attempt == 1 {
            String::new()
        } else {
            format!("_{attempt}")
        };
        let stem: String = base
            .chars()
            .take(USERNAME_MAX.saturating_sub(suffix.len()))
            .collect();
        let candidate = format!("{stem}{suffix}");

        if is_valid_username(&candidate) && taken.insert(candidate.clone()) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::UsernameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}
