//! Configuration loader for notify-dip
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "NOTIFY_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "NOTIFY_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "NOTIFY";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// Sources, lowest priority first:
/// 1. `default.toml`
/// 2. `{environment}.toml`
/// 3. `local.toml`
/// 4. `NOTIFY_*` environment variables
///
/// Every file is optional; missing sections fall back to the serde defaults
/// in [`Settings`]. When a single configuration file is selected, the
/// directory layers are skipped and only that file (which must exist) plus
/// environment variables are used.
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader from environment variables
    ///
    /// Reads `NOTIFY_CONFIG_DIR`, `NOTIFY_CONFIG_FILE` and `NOTIFY_APP_ENV`.
    ///
    /// # Errors
    ///
    /// Returns an error if both `NOTIFY_CONFIG_DIR` and `NOTIFY_CONFIG_FILE`
    /// are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from);
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_dir.is_some() && config_file.is_some() {
            return Err(ConfigError::ConflictingSources);
        }

        Ok(Self {
            config_dir: config_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Create a loader for layered loading from `config_dir`
    pub fn from_dir<P: Into<PathBuf>>(config_dir: P, environment: AppEnvironment) -> Self {
        Self {
            config_dir: config_dir.into(),
            config_file: None,
            environment,
        }
    }

    /// Create a loader that reads a single configuration file
    pub fn from_file<P: Into<PathBuf>>(config_file: P, environment: AppEnvironment) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(config_file.into()),
            environment,
        }
    }

    /// Override the environment used to select `{environment}.toml`
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the selected single configuration file does not exist
    /// - configuration parsing fails
    /// - configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match self.config_file {
            Some(ref config_file) => Self::add_file_source(builder, config_file, true)?,
            None => self.build_layered_config(builder),
        };

        // NOTIFY_CHANNELS__EMAIL__FROM_ADDRESS -> channels.email.from_address
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    fn build_layered_config(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> ConfigBuilder<DefaultState> {
        let layers = [
            "default".to_string(),
            self.environment.as_str().to_string(),
            "local".to_string(),
        ];

        layers.iter().fold(builder, |builder, layer| {
            let path = self.config_dir.join(format!("{}.toml", layer));
            builder.add_source(File::from(path).format(FileFormat::Toml).required(false))
        })
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.is_file() {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }

        Ok(builder.add_source(
            File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(required),
        ))
    }

    /// Values are kept as strings: origins such as `+56912345678` must not
    /// be coerced to numbers. Booleans still deserialize from `true`/`false`.
    fn add_env_source(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Serializes tests that touch process environment variables
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Restores touched environment variables on drop
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    fn clear_notify_env(env: &mut EnvGuard) {
        env.remove(CONFIG_DIR_ENV);
        env.remove(CONFIG_FILE_ENV);
        env.remove(AppEnvironment::ENV_VAR);
        env.remove("NOTIFY_CHANNELS__EMAIL__FROM_ADDRESS");
        env.remove("NOTIFY_LOGGER__LEVEL");
        env.remove("NOTIFY_CHANNELS__WHATSAPP__FROM_NUMBER");
        env.remove("NOTIFY_LOGGER__CONSOLE__COLORED");
    }

    #[test]
    fn test_config_loader_new_default() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_notify_env(&mut env);

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir(), Path::new("config"));
        assert!(loader.config_file().is_none());
        assert_eq!(loader.environment(), AppEnvironment::Development);
    }

    #[test]
    fn test_config_loader_mutual_exclusivity() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_notify_env(&mut env);
        env.set(CONFIG_DIR_ENV, "/tmp/notify");
        env.set(CONFIG_FILE_ENV, "/tmp/notify.toml");

        assert!(matches!(
            ConfigLoader::new(),
            Err(ConfigError::ConflictingSources)
        ));
    }

    #[test]
    fn test_load_empty_dir_uses_defaults() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_notify_env(&mut env);
        let dir = setup_config_dir(&[]);

        let settings = ConfigLoader::from_dir(dir.path(), AppEnvironment::Development)
            .load()
            .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_layered_precedence() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_notify_env(&mut env);
        let dir = setup_config_dir(&[
            (
                "default.toml",
                r#"
                [channels.email]
                from_address = "default@example.com"

                [channels.whatsapp]
                from_number = "+10000000000"
                "#,
            ),
            (
                "production.toml",
                r#"
                [channels.email]
                from_address = "prod@example.com"
                "#,
            ),
            (
                "local.toml",
                r#"
                [logger]
                level = "debug"
                "#,
            ),
        ]);

        let settings = ConfigLoader::from_dir(dir.path(), AppEnvironment::Production)
            .load()
            .unwrap();
        assert_eq!(settings.channels.email.from_address, "prod@example.com");
        assert_eq!(settings.channels.whatsapp.from_number, "+10000000000");
        assert_eq!(settings.logger.level, "debug");
    }

    #[test]
    fn test_env_overrides_files() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_notify_env(&mut env);
        env.set("NOTIFY_CHANNELS__EMAIL__FROM_ADDRESS", "env@example.com");
        let dir = setup_config_dir(&[(
            "default.toml",
            "[channels.email]\nfrom_address = \"file@example.com\"\n",
        )]);

        let settings = ConfigLoader::from_dir(dir.path(), AppEnvironment::Development)
            .load()
            .unwrap();
        assert_eq!(settings.channels.email.from_address, "env@example.com");
    }

    #[test]
    fn test_env_override_keeps_leading_plus() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_notify_env(&mut env);
        env.set("NOTIFY_CHANNELS__WHATSAPP__FROM_NUMBER", "+56900000000");
        let dir = setup_config_dir(&[]);

        let settings = ConfigLoader::from_dir(dir.path(), AppEnvironment::Development)
            .load()
            .unwrap();
        assert_eq!(settings.channels.whatsapp.from_number, "+56900000000");
    }

    #[test]
    fn test_env_override_bool_setting() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_notify_env(&mut env);
        env.set("NOTIFY_LOGGER__CONSOLE__COLORED", "false");
        let dir = setup_config_dir(&[]);

        let settings = ConfigLoader::from_dir(dir.path(), AppEnvironment::Development)
            .load()
            .unwrap();
        assert!(!settings.logger.console.colored);
    }

    #[test]
    fn test_load_single_file() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_notify_env(&mut env);
        let dir = setup_config_dir(&[(
            "custom.toml",
            "[channels.instagram]\nuser_handle = \"@custom\"\n",
        )]);

        let settings =
            ConfigLoader::from_file(dir.path().join("custom.toml"), AppEnvironment::Test)
                .load()
                .unwrap();
        assert_eq!(settings.channels.instagram.user_handle, "@custom");
    }

    #[test]
    fn test_load_single_file_missing() {
        let dir = setup_config_dir(&[]);
        let result =
            ConfigLoader::from_file(dir.path().join("missing.toml"), AppEnvironment::Test).load();
        assert!(matches!(result, Err(ConfigError::MissingFile(_))));
    }

    #[test]
    fn test_load_rejects_invalid_settings() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_notify_env(&mut env);
        let dir = setup_config_dir(&[("default.toml", "[logger]\nlevel = \"chatty\"\n")]);

        let result = ConfigLoader::from_dir(dir.path(), AppEnvironment::Development).load();
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
