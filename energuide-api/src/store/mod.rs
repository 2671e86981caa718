//! Document stores evaluations are read from.
mod memory;
mod mongo;

use async_trait::async_trait;
pub use memory::InMemoryStore;
pub use mongo::MongoStore;

use crate::error::StoreError;
use crate::predicate::Predicate;
use crate::predicate::Sort;

/// A stored evaluation keyed by uppercase column names.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// A query handed to a [`DocumentStore`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FindRequest {
    pub predicate: Predicate,
    pub sort: Option<Sort>,
}

/// Executes queries against the collection of evaluations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Returns every record matching `request.predicate`, in `request.sort` order when given.
    async fn find(&self, request: FindRequest) -> Result<Vec<Record>, StoreError>;
}
