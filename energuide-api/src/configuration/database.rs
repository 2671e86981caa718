use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

use super::ConfigurationError;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 27017;
const DEFAULT_DATABASE: &str = "energuide";
const DEFAULT_COLLECTION: &str = "dwellings";

/// Coordinates of the evaluations collection.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct Database {
    /// User name; credentials are only sent when both user name and password are set.
    pub username: String,
    /// Password.
    pub password: String,
    /// Host name of the server, or of the cluster when `srv` is set.
    pub host: String,
    /// Port of the server; ignored when `srv` is set.
    pub port: u16,
    /// Database name.
    pub name: String,
    /// Collection holding one document per evaluation.
    pub collection: String,
    /// Resolve the cluster through DNS seed lists (`mongodb+srv://`).
    pub srv: bool,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            name: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            srv: false,
        }
    }
}

impl Database {
    /// Connection string without credentials.
    pub fn connection_string(&self) -> String {
        if self.srv {
            format!("mongodb+srv://{}", self.host)
        } else {
            format!("mongodb://{}:{}", self.host, self.port)
        }
    }

    pub fn credentials(&self) -> Option<(&str, &str)> {
        (!self.username.is_empty() && !self.password.is_empty())
            .then_some((self.username.as_str(), self.password.as_str()))
    }

    pub(super) fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigurationError> {
        let targets = [
            ("ENERGUIDE_USERNAME", &mut self.username),
            ("ENERGUIDE_PASSWORD", &mut self.password),
            ("ENERGUIDE_HOST", &mut self.host),
            ("ENERGUIDE_DBNAME", &mut self.name),
            ("ENERGUIDE_COLLECTION", &mut self.collection),
        ];
        for (variable, target) in targets {
            if let Some(value) = lookup(variable) {
                *target = value;
            }
        }

        if let Some(value) = lookup("ENERGUIDE_PORT") {
            self.port = value.parse().map_err(|err: std::num::ParseIntError| {
                ConfigurationError::InvalidEnvironmentVariable {
                    variable: "ENERGUIDE_PORT",
                    value: value.clone(),
                    reason: err.to_string(),
                }
            })?;
        }

        // Production clusters are only reachable through their seed list.
        if lookup("PROD").is_some_and(|value| !value.is_empty()) {
            self.srv = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_a_local_connection_string() {
        assert_eq!(
            Database::default().connection_string(),
            "mongodb://localhost:27017"
        );
    }

    #[test]
    fn production_uses_the_seed_list() {
        let mut database = Database {
            host: "cluster0.example.net".to_string(),
            ..Default::default()
        };
        database
            .apply_env(|variable| (variable == "PROD").then(|| "1".to_string()))
            .unwrap();
        assert_eq!(
            database.connection_string(),
            "mongodb+srv://cluster0.example.net"
        );
    }

    #[test]
    fn an_empty_prod_variable_is_ignored() {
        let mut database = Database::default();
        database
            .apply_env(|variable| (variable == "PROD").then(String::new))
            .unwrap();
        assert!(!database.srv);
    }

    #[test]
    fn credentials_need_both_parts() {
        let database = Database {
            username: "reader".to_string(),
            ..Default::default()
        };
        assert_eq!(database.credentials(), None);
    }
}
