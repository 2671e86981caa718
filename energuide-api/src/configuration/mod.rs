//! Logic for loading configuration in to an object model
mod database;
mod server;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use database::Database;
use displaydoc::Display;
use schemars::JsonSchema;
use schemars::schema::RootSchema;
use serde::Deserialize;
use serde::Serialize;
pub use server::Graphql;
pub use server::Server;
use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error, Display)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// could not read configuration file '{path}': {error}
    CannotReadFile {
        path: String,
        error: std::io::Error,
    },
    /// could not parse configuration: {0}
    InvalidYaml(serde_yaml::Error),
    /// invalid value '{value}' for environment variable {variable}: {reason}
    InvalidEnvironmentVariable {
        variable: &'static str,
        value: String,
        reason: String,
    },
    /// {message}: {error}
    InvalidConfiguration {
        message: &'static str,
        error: String,
    },
}

/// The configuration of the API server.
///
/// Every section has defaults, so an empty file is a valid configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    /// HTTP server options.
    #[serde(default)]
    pub server: Server,

    /// GraphQL execution options.
    #[serde(default)]
    pub graphql: Graphql,

    /// Coordinates of the MongoDB collection holding evaluations.
    #[serde(default)]
    pub database: Database,
}

impl Configuration {
    /// Reads the configuration file at `path`, or the defaults when there is none,
    /// then applies overrides from the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        let mut configuration = match path {
            Some(path) => {
                let content =
                    fs::read_to_string(path).map_err(|error| ConfigurationError::CannotReadFile {
                        path: path.display().to_string(),
                        error,
                    })?;
                tracing::debug!(path = %path.display(), "loading configuration");
                content.parse()?
            }
            None => Configuration::default(),
        };
        configuration.apply_env(|variable| std::env::var(variable).ok())?;
        configuration.validate()?;
        Ok(configuration)
    }

    /// Applies the `ENERGUIDE_*` and `PROD` environment variables read through `lookup`.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigurationError> {
        self.database.apply_env(lookup)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.server.validate()
    }
}

/// Parse configuration from a string in YAML syntax
impl FromStr for Configuration {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // serde_yaml reads an empty document as null rather than an empty mapping
        if s.trim().is_empty() {
            return Ok(Configuration::default());
        }
        serde_yaml::from_str(s).map_err(ConfigurationError::InvalidYaml)
    }
}

/// JSON schema of the configuration file.
pub fn generate_config_schema() -> RootSchema {
    schemars::schema_for!(Configuration)
}
