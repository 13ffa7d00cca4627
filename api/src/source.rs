use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;
use crate::query::Query;

/// Read-only query interface of the hosted data store.
///
/// Rows come back as raw JSON so the trait stays object safe; callers decode
/// with [`select_as`]. Futures are not `Send` because the browser transport
/// is single threaded.
#[async_trait(?Send)]
pub trait DataSource {
    async fn select(&self, query: &Query) -> Result<Vec<Value>, FetchError>;
}

/// Run `query` and decode every row as `T`.
///
/// A single malformed row fails the whole query.
pub async fn select_as<T>(source: &dyn DataSource, query: &Query) -> Result<Vec<T>, FetchError>
where
    T: DeserializeOwned,
{
    let rows = source.select(query).await?;
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(row).map_err(|err| FetchError::Decode {
                collection: query.collection.table(),
                message: err.to_string(),
            })
        })
        .collect()
}
