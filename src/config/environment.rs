//! Deployment environment, selecting the `config/{environment}.toml` layer

use clap::ValueEnum;

/// Deployment environment
///
/// Shared by the loader (`NOTIFY_APP_ENV`) and the `--env` CLI flag.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    #[value(alias = "dev")]
    Development,
    Test,
    #[value(alias = "stage")]
    Staging,
    #[value(alias = "prod")]
    Production,
}

impl Environment {
    pub const ENV_VAR: &'static str = "NOTIFY_APP_ENV";

    /// Reads `NOTIFY_APP_ENV` (case-insensitive, aliases allowed)
    ///
    /// Unset or unrecognised values select `Development`.
    pub fn from_env() -> Self {
        std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|value| Self::from_str(value.trim(), true).ok())
            .unwrap_or_default()
    }

    /// Name of the configuration layer file, without extension
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
