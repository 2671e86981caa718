use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Client;
use mongodb::Collection;
use mongodb::bson::Bson;
use mongodb::bson::Document;
use mongodb::options::ClientOptions;
use mongodb::options::Credential;

use super::DocumentStore;
use super::FindRequest;
use super::Record;
use crate::configuration::Database;
use crate::error::StoreError;

/// Evaluations stored in a MongoDB collection.
#[derive(Clone, Debug)]
pub struct MongoStore {
    collection: Collection<Document>,
}

impl MongoStore {
    /// Configures a client for `database`.
    ///
    /// The driver connects lazily, so an unreachable server is reported by the
    /// first query rather than here.
    pub async fn connect(database: &Database) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(database.connection_string())
            .await
            .map_err(|err| StoreError::Connection(err.to_string()))?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        if let Some((username, password)) = database.credentials() {
            let mut credential = Credential::default();
            credential.username = Some(username.to_string());
            credential.password = Some(password.to_string());
            options.credential = Some(credential);
        }
        let client =
            Client::with_options(options).map_err(|err| StoreError::Connection(err.to_string()))?;
        tracing::info!(
            host = %database.host,
            database = %database.name,
            collection = %database.collection,
            "using MongoDB document store"
        );
        Ok(Self {
            collection: client
                .database(&database.name)
                .collection(&database.collection),
        })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, request: FindRequest) -> Result<Vec<Record>, StoreError> {
        let filter = request.predicate.to_document();
        tracing::debug!(%filter, "finding evaluations");
        let mut find = self.collection.find(filter);
        if let Some(sort) = request.sort {
            find = find.sort(sort.to_document());
        }
        let documents: Vec<Document> = find
            .await
            .map_err(|err| StoreError::QueryExecution(err.to_string()))?
            .try_collect()
            .await
            .map_err(|err| StoreError::QueryExecution(err.to_string()))?;
        Ok(documents.into_iter().map(into_record).collect())
    }
}

/// Converts a document to relaxed extended JSON; numbers stay plain JSON numbers.
fn into_record(document: Document) -> Record {
    match Bson::Document(document).into_relaxed_extjson() {
        serde_json::Value::Object(record) => record,
        _ => Record::new(),
    }
}
