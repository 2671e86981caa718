use std::net::Ipv4Addr;
use std::net::SocketAddr;

use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

use super::ConfigurationError;

fn default_listen() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 3000))
}

fn default_graphql_path() -> String {
    "/graphql".to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration for the HTTP server.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Server {
    /// The socket address and port to listen on; defaults to 127.0.0.1:3000
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    /// The HTTP path of the GraphQL endpoint; defaults to /graphql
    #[serde(default = "default_graphql_path")]
    pub graphql_path: String,

    /// Serve the GraphiQL IDE on GET requests to the GraphQL endpoint.
    #[serde(default = "default_true")]
    pub graphiql: bool,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            graphql_path: default_graphql_path(),
            graphiql: true,
        }
    }
}

impl Server {
    pub(super) fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.graphql_path.starts_with('/') {
            return Err(ConfigurationError::InvalidConfiguration {
                message: "the GraphQL path must start with '/'",
                error: self.graphql_path.clone(),
            });
        }
        if self.graphql_path == "/health" {
            return Err(ConfigurationError::InvalidConfiguration {
                message: "the GraphQL path conflicts with the health check",
                error: self.graphql_path.clone(),
            });
        }
        Ok(())
    }
}

/// GraphQL execution options.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Graphql {
    /// Answer introspection queries.
    #[serde(default = "default_true")]
    pub introspection: bool,

    /// Reject queries nested deeper than this.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for Graphql {
    fn default() -> Self {
        Self {
            introspection: true,
            max_depth: None,
        }
    }
}
