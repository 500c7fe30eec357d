//! Behavioural tests for example-data crate.
//!
//! These tests validate the crate's behaviour against Gherkin scenarios
//! covering registry parsing, deterministic generation, and validation.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;

use example_data::{
    ExampleUserSeed, RegistryError, SeedDefinition, SeedRegistry, generate_example_users,
    is_valid_username,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures and constants
// ============================================================================

/// Base valid registry JSON used by multiple Given steps.
const VALID_REGISTRY_JSON: &str = r#"{
    "version": 1,
    "avatarIds": ["kody-koala", "lola-lemur"],
    "seeds": [
        {"name": "test-seed", "seed": 42, "userCount": 25}
    ]
}"#;

/// Test world holding parsed registry and generated users.
#[derive(Default, ScenarioState)]
struct World {
    json_input: Slot<String>,
    registry_result: Slot<Result<SeedRegistry, RegistryError>>,
    seed_def: Slot<SeedDefinition>,
    generated_users: Slot<Vec<ExampleUserSeed>>,
    second_generation: Slot<Vec<ExampleUserSeed>>,
}

impl World {
    fn registry(&self) -> SeedRegistry {
        self.registry_result
            .get()
            .expect("registry should be set")
            .expect("registry should be valid")
    }

    fn seed_def(&self) -> SeedDefinition {
        self.seed_def.get().expect("seed definition should be set")
    }

    fn registry_result(&self) -> Result<SeedRegistry, RegistryError> {
        self.registry_result
            .get()
            .expect("registry result should be set")
    }

    fn users(&self) -> Vec<ExampleUserSeed> {
        self.generated_users
            .get()
            .expect("users should be generated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a valid seed registry JSON")]
fn a_valid_seed_registry_json(world: &World) {
    world.json_input.set(VALID_REGISTRY_JSON.to_owned());
}

#[given("a valid seed registry")]
fn a_valid_seed_registry(world: &World) {
    let registry = SeedRegistry::from_json(VALID_REGISTRY_JSON).expect("valid test registry");
    world.registry_result.set(Ok(registry));
}

#[given("a seed definition with seed {seed:u64}")]
fn a_seed_definition_with_seed(world: &World, seed: u64) {
    let registry = world.registry();
    let seed_def = registry.find_seed("test-seed").expect("seed exists");
    assert_eq!(seed_def.seed(), seed, "seed value mismatch");
    world.seed_def.set(seed_def.clone());
}

#[given("a seed definition")]
fn a_seed_definition(world: &World) {
    let registry = world.registry();
    let seed_def = registry.find_seed("test-seed").expect("seed exists");
    world.seed_def.set(seed_def.clone());
}

#[given("malformed JSON")]
fn malformed_json(world: &World) {
    world.json_input.set("not valid json".to_owned());
}

#[given("registry JSON with empty seeds array")]
fn registry_json_with_empty_seeds_array(world: &World) {
    world
        .json_input
        .set(r#"{"version": 1, "avatarIds": [], "seeds": []}"#.to_owned());
}

#[given("registry JSON with a blank avatar identifier")]
fn registry_json_with_blank_avatar_identifier(world: &World) {
    let json = r#"{
        "version": 1,
        "avatarIds": ["  "],
        "seeds": [{"name": "test", "seed": 1, "userCount": 1}]
    }"#;
    world.json_input.set(json.to_owned());
}

// ============================================================================
// When steps
// ============================================================================

#[when("the registry is parsed")]
fn the_registry_is_parsed(world: &World) {
    let json = world.json_input.get().expect("JSON input should be set");
    world.registry_result.set(SeedRegistry::from_json(&json));
}

#[when("users are generated")]
fn users_are_generated(world: &World) {
    let registry = world.registry();
    let seed_def = world.seed_def();
    let users = generate_example_users(&registry, &seed_def).expect("generation succeeds");
    world.generated_users.set(users);
}

#[when("users are generated twice")]
fn users_are_generated_twice(world: &World) {
    let registry = world.registry();
    let seed_def = world.seed_def();

    let first = generate_example_users(&registry, &seed_def).expect("first generation");
    let second = generate_example_users(&registry, &seed_def).expect("second generation");

    world.generated_users.set(first);
    world.second_generation.set(second);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("parsing succeeds")]
fn parsing_succeeds(world: &World) {
    let result = world.registry_result();
    assert!(result.is_ok(), "Expected parsing to succeed: {result:?}");
}

#[then("the registry contains the expected seed definitions")]
fn the_registry_contains_the_expected_seed_definitions(world: &World) {
    let registry = world.registry();
    assert_eq!(registry.seeds().len(), 1);
    let seed = registry.find_seed("test-seed").expect("seed should exist");
    assert_eq!(seed.seed(), 42);
    assert_eq!(seed.user_count(), 25);
}

#[then("both generations produce identical users")]
fn both_generations_produce_identical_users(world: &World) {
    let first = world.users();
    let second = world
        .second_generation
        .get()
        .expect("second generation should be set");

    assert_eq!(first, second, "Generations should be deterministic");
}

#[then("all usernames satisfy backend constraints")]
fn all_usernames_satisfy_backend_constraints(world: &World) {
    for user in world.users() {
        assert!(
            is_valid_username(&user.username),
            "Invalid username: {}",
            user.username
        );
    }
}

#[then("no two users share a username")]
fn no_two_users_share_a_username(world: &World) {
    let users = world.users();
    let unique: HashSet<_> = users.iter().map(|user| user.username.clone()).collect();
    assert_eq!(unique.len(), users.len());
}

#[then("all avatars exist in the registry")]
fn all_avatars_exist_in_the_registry(world: &World) {
    let registry = world.registry();
    for avatar in world.users().iter().filter_map(|user| user.avatar.clone()) {
        assert!(
            registry.avatar_ids().contains(&avatar),
            "Avatar {avatar} not in registry"
        );
    }
}

#[then("parsing fails with a parse error")]
fn parsing_fails_with_a_parse_error(world: &World) {
    match world.registry_result() {
        Err(RegistryError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

#[then("parsing fails with empty seeds error")]
fn parsing_fails_with_empty_seeds_error(world: &World) {
    match world.registry_result() {
        Err(RegistryError::EmptySeeds) => {}
        other => panic!("Expected EmptySeeds, got: {other:?}"),
    }
}

#[then("parsing fails with invalid avatar error")]
fn parsing_fails_with_invalid_avatar_error(world: &World) {
    match world.registry_result() {
        Err(RegistryError::InvalidAvatarId { index: 0, .. }) => {}
        other => panic!("Expected InvalidAvatarId, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Valid registry parses successfully"
)]
fn valid_registry_parses_successfully(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Deterministic generation produces identical users"
)]
fn deterministic_generation_produces_identical_users(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Generated usernames are valid and unique"
)]
fn generated_usernames_are_valid_and_unique(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Avatar selection stays within registry"
)]
fn avatar_selection_stays_within_registry(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Invalid JSON fails parsing"
)]
fn invalid_json_fails_parsing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Empty seeds array fails parsing"
)]
fn empty_seeds_array_fails_parsing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Blank avatar identifier fails parsing"
)]
fn blank_avatar_identifier_fails_parsing(world: World) {
    let _ = world;
}
