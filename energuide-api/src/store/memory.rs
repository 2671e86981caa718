use std::fs;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use super::DocumentStore;
use super::FindRequest;
use super::Record;
use crate::error::StoreError;

/// Evaluations held in memory, queried by evaluating predicates directly.
///
/// The records are never modified once loaded.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    records: Arc<[Record]>,
}

impl InMemoryStore {
    pub fn new(records: impl IntoIterator<Item = Record>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Loads records from a file holding a JSON array of objects.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let fixtures_error = |reason: String| StoreError::Fixtures {
            path: path.display().to_string(),
            reason,
        };
        let content = fs::read_to_string(path).map_err(|err| fixtures_error(err.to_string()))?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(|err| fixtures_error(err.to_string()))?;
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn find(&self, request: FindRequest) -> Result<Vec<Record>, StoreError> {
        let mut records: Vec<Record> = self
            .records
            .iter()
            .filter(|record| request.predicate.matches(record))
            .cloned()
            .collect();
        if let Some(sort) = request.sort {
            records.sort_by(|left, right| sort.compare(left, right));
        }
        Ok(records)
    }
}
