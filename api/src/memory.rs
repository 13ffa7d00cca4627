//! In-memory `DataSource` used by tests and local previews.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::FetchError;
use crate::query::{Collection, Query};
use crate::source::DataSource;

#[derive(Debug, Default)]
pub struct MemorySource {
    tables: HashMap<Collection, Result<Vec<Value>, FetchError>>,
    issued: RefCell<Vec<Query>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `collection` with typed records.
    pub fn with_rows<T: Serialize>(
        mut self,
        collection: Collection,
        rows: &[T],
    ) -> Result<Self, serde_json::Error> {
        let values = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.tables.insert(collection, Ok(values));
        Ok(self)
    }

    pub fn with_values(mut self, collection: Collection, rows: Vec<Value>) -> Self {
        self.tables.insert(collection, Ok(rows));
        self
    }

    /// Every query on `collection` fails with `error`.
    pub fn with_failure(mut self, collection: Collection, error: FetchError) -> Self {
        self.tables.insert(collection, Err(error));
        self
    }

    /// Queries received so far, in order.
    pub fn issued(&self) -> Vec<Query> {
        self.issued.borrow().clone()
    }
}

#[async_trait(?Send)]
impl DataSource for MemorySource {
    async fn select(&self, query: &Query) -> Result<Vec<Value>, FetchError> {
        self.issued.borrow_mut().push(query.clone());

        // Unknown collections behave like empty tables.
        let mut rows = match self.tables.get(&query.collection) {
            Some(Ok(rows)) => rows.clone(),
            Some(Err(err)) => return Err(err.clone()),
            None => Vec::new(),
        };

        if let Some(order) = query.order {
            // Stable sort keeps storage order among equal keys.
            rows.sort_by(|a, b| {
                let ord = compare_column(a, b, order.column);
                if order.descending {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }
        Ok(rows)
    }
}

fn compare_column(a: &Value, b: &Value, column: &str) -> Ordering {
    match (a.get(column), b.get(column)) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}
