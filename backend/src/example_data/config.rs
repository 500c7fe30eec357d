//! Example data configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_SEED_NAME: &str = "mossy-owl";

fn default_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("example-data")
        .join("seeds.json")
}

/// Settings controlling whether and how example users are seeded at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Seed example users on startup.
    #[ortho_config(default = false)]
    pub enabled: bool,
    /// Seed name to load from the registry.
    pub seed_name: Option<String>,
    /// Override for the number of users generated.
    #[ortho_config(file_key = "user_count")]
    pub count: Option<usize>,
    /// Registry path override.
    pub registry_path: Option<PathBuf>,
}

impl ExampleDataSettings {
    /// Whether seeding should run.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Configured seed name, falling back to the default.
    pub fn seed_name(&self) -> &str {
        self.seed_name.as_deref().unwrap_or(DEFAULT_SEED_NAME)
    }

    /// Configured registry path, falling back to the bundled fixture.
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(default_registry_path)
    }
}

#[cfg(test)]
mod tests {
    //! Configuration layering for example data settings.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "EXAMPLE_DATA_ENABLED",
        "EXAMPLE_DATA_SEED_NAME",
        "EXAMPLE_DATA_COUNT",
        "EXAMPLE_DATA_REGISTRY_PATH",
    ];

    fn load(args: &[&str]) -> ExampleDataSettings {
        let argv = std::iter::once(OsString::from("user-directory"))
            .chain(args.iter().map(OsString::from));
        ExampleDataSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load(&[]);
        assert!(!settings.is_enabled());
        assert_eq!(settings.seed_name(), DEFAULT_SEED_NAME);
        assert_eq!(settings.registry_path(), default_registry_path());
        assert!(settings.count.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("EXAMPLE_DATA_ENABLED", Some("true".to_owned())),
            ("EXAMPLE_DATA_SEED_NAME", Some("rainbow-fox".to_owned())),
            ("EXAMPLE_DATA_COUNT", Some("5".to_owned())),
            (
                "EXAMPLE_DATA_REGISTRY_PATH",
                Some("/tmp/example_registry.json".to_owned()),
            ),
        ]);

        let settings = load(&[]);
        assert!(settings.is_enabled());
        assert_eq!(settings.seed_name(), "rainbow-fox");
        assert_eq!(
            settings.registry_path(),
            PathBuf::from("/tmp/example_registry.json")
        );
        assert_eq!(settings.count, Some(5));
    }

    #[rstest]
    fn command_line_overrides_environment() {
        let _guard = lock_env([
            ("EXAMPLE_DATA_ENABLED", None::<String>),
            ("EXAMPLE_DATA_SEED_NAME", Some("rainbow-fox".to_owned())),
            ("EXAMPLE_DATA_COUNT", None),
            ("EXAMPLE_DATA_REGISTRY_PATH", None),
        ]);

        let settings = load(&["--seed-name", "mossy-owl"]);
        assert_eq!(settings.seed_name(), "mossy-owl");
    }
}
