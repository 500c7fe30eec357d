//! Startup wiring for example data seeding.

mod config;
mod startup;

pub use config::ExampleDataSettings;
pub use startup::{SeedingOutcome, StartupSeedingError, seed_example_data_on_startup, seed_users};
