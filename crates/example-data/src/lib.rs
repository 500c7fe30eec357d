//! Deterministic example user records for seeding and exercising user search.
//!
//! This crate provides tools for generating believable, reproducible user
//! records from a JSON seed registry. It is designed to be independent of
//! backend domain types to avoid circular dependencies.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries from JSON files
//! - Deterministic user generation using named seeds
//! - Username and display name validation matching backend constraints
//! - Optional avatar assignment from the registry's avatar pool
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_users};
//!
//! let json = r#"{
//!     "version": 1,
//!     "avatarIds": ["kody-koala"],
//!     "seeds": [{"name": "test-seed", "seed": 42, "userCount": 3}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let users = generate_example_users(&registry, seed_def).expect("generation succeeds");
//!
//! assert_eq!(users.len(), 3);
//! ```

mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::generate_example_users;
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::ExampleUserSeed;
pub use validation::{
    DISPLAY_NAME_MAX, USERNAME_MAX, USERNAME_MIN, is_valid_display_name, is_valid_username,
};
