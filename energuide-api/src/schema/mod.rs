//! The GraphQL schema served by the API.
mod evaluation;
mod fields;
mod query;

use std::sync::Arc;

use async_graphql::EmptyMutation;
use async_graphql::EmptySubscription;
use async_graphql::Schema;
pub use evaluation::Evaluation;
pub use fields::Field;
pub use query::Query;

use crate::configuration::Graphql;
use crate::store::DocumentStore;

pub type EnerguideSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Builds the executable schema answering queries from `store`.
pub fn build_schema(store: Arc<dyn DocumentStore>, config: &Graphql) -> EnerguideSchema {
    let mut builder = Schema::build(Query::new(store), EmptyMutation, EmptySubscription);
    if !config.introspection {
        builder = builder.disable_introspection();
    }
    if let Some(max_depth) = config.max_depth {
        builder = builder.limit_depth(max_depth);
    }
    builder.finish()
}
