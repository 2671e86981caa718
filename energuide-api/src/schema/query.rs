use std::sync::Arc;

use async_graphql::ErrorExtensions;
use async_graphql::Object;
use async_graphql::Result;

use super::Evaluation;
use super::Field;
use crate::error::QueryError;
use crate::filter::Filter;
use crate::filter::build_predicate;
use crate::predicate::Condition;
use crate::predicate::Literal;
use crate::predicate::Sort;
use crate::scalars::ForwardSortationArea;
use crate::scalars::LatLng;
use crate::scalars::PostalCode;
use crate::store::DocumentStore;
use crate::store::FindRequest;
use crate::store::Record;

const ACCOUNT: &str = Field::HouseId.column();
const POSTAL_CODE: &str = Field::MailingAddressPostalCode.column();
const CREATION_DATE: &str = Field::CreationDate.column();
const LOCATION: &str = "location.coordinates";

/// The root query type.
pub struct Query {
    store: Arc<dyn DocumentStore>,
}

impl Query {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn find(
        &self,
        base: Vec<Condition>,
        filter: Option<&Filter>,
        sort: Option<Sort>,
    ) -> Result<Vec<Record>, QueryError> {
        let predicate = build_predicate(base, filter).inspect_err(|err| {
            tracing::debug!(%err, "rejected evaluation query");
        })?;
        tracing::debug!(?predicate, ?sort, "finding evaluations");
        let records = self
            .store
            .find(FindRequest { predicate, sort })
            .await
            .inspect_err(|err| tracing::error!(%err, "evaluation query failed"))?;
        tracing::debug!(records = records.len(), "found evaluations");
        Ok(records)
    }
}

#[Object]
impl Query {
    /// The evaluations of one dwelling, merged into a single view where the most recent values win.
    async fn evaluations_for(
        &self,
        #[graphql(desc = "The account number of the dwelling")] account: i32,
        #[graphql(desc = "The postal code of the dwelling")] postal_code: PostalCode,
        filter: Option<Filter>,
    ) -> Result<Option<Evaluation>> {
        let base = vec![
            Condition::equals(ACCOUNT, Literal::Int(account.into())),
            Condition::equals(POSTAL_CODE, Literal::Text(postal_code.into_inner())),
        ];
        let records = self
            .find(base, filter.as_ref(), Some(Sort::descending(CREATION_DATE)))
            .await
            .map_err(|err| err.extend())?;
        Ok(Evaluation::merge(records))
    }

    /// Evaluations of the dwellings located inside a polygon.
    async fn evaluations(
        &self,
        filter: Option<Filter>,
        #[graphql(desc = "The vertices of the polygon")] within_polygon: Vec<LatLng>,
    ) -> Result<Vec<Evaluation>> {
        let base = Condition::within_polygon(LOCATION, &within_polygon)
            .map_err(|err| QueryError::from(err).extend())?;
        let records = self
            .find(vec![base], filter.as_ref(), None)
            .await
            .map_err(|err| err.extend())?;
        Ok(records.into_iter().map(Evaluation::new).collect())
    }

    /// Evaluations of the dwellings whose postal code falls in a Forward Sortation Area.
    #[graphql(name = "evaluationsInFSA")]
    async fn evaluations_in_fsa(
        &self,
        forward_sortation_area: ForwardSortationArea,
        filter: Option<Filter>,
    ) -> Result<Vec<Evaluation>> {
        let base = Condition::starts_with(POSTAL_CODE, forward_sortation_area.as_str());
        let records = self
            .find(vec![base], filter.as_ref(), None)
            .await
            .map_err(|err| err.extend())?;
        Ok(records.into_iter().map(Evaluation::new).collect())
    }
}
