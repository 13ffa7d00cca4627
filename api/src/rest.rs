//! PostgREST client for the hosted store.
//!
//! Every collection lives at `{endpoint}/rest/v1/{table}`; the anon key is
//! sent both as `apikey` and as a bearer token.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde_json::Value;
use url::Url;

use crate::config::DataStoreConfig;
use crate::error::FetchError;
use crate::query::{Collection, Query};
use crate::source::DataSource;

const REST_PREFIX: &str = "rest/v1/";

#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base: Url,
}

impl RestClient {
    pub fn new(config: &DataStoreConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.anon_key)
            .map_err(|_| FetchError::Setup("access key is not a valid header value".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
            .map_err(|_| FetchError::Setup("access key is not a valid header value".into()))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| FetchError::Setup(err.to_string()))?;

        let base = config
            .endpoint
            .join(REST_PREFIX)
            .map_err(|err| FetchError::Setup(err.to_string()))?;

        Ok(Self { http, base })
    }

    pub fn collection_url(&self, query: &Query) -> Result<Url, FetchError> {
        let mut url = self
            .base
            .join(query.collection.table())
            .map_err(|err| FetchError::Setup(err.to_string()))?;
        url.set_query(Some(&query.query_string()));
        Ok(url)
    }
}

#[async_trait(?Send)]
impl DataSource for RestClient {
    async fn select(&self, query: &Query) -> Result<Vec<Value>, FetchError> {
        let url = self.collection_url(query)?;
        tracing::debug!(collection = %query.collection, query = %query.query_string(), "select");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = parse_error_body(query.collection, status.as_u16(), &body);
            tracing::warn!(
                collection = %query.collection,
                status = status.as_u16(),
                "select failed"
            );
            return Err(err);
        }

        let rows: Vec<Value> = response.json().await.map_err(|err| FetchError::Decode {
            collection: query.collection.table(),
            message: err.without_url().to_string(),
        })?;
        tracing::debug!(collection = %query.collection, rows = rows.len(), "select ok");
        Ok(rows)
    }
}

/// Turn a non-2xx PostgREST response into a `FetchError::Query`.
///
/// PostgREST error bodies look like `{"code": "...", "message": "..."}`;
/// anything else falls back to the status reason.
pub(crate) fn parse_error_body(collection: Collection, status: u16, body: &str) -> FetchError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("request failed")
                .to_string()
        });

    FetchError::Query {
        collection: collection.table(),
        status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: &str) -> RestClient {
        let config = DataStoreConfig::new(endpoint, "anon").unwrap();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn builds_ordered_collection_url() {
        let url = client("https://demo.supabase.co")
            .collection_url(&Query::all(Collection::Competitions).order_desc("date"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://demo.supabase.co/rest/v1/competitions?select=*&order=date.desc"
        );
    }

    #[test]
    fn keeps_endpoint_sub_path() {
        let url = client("https://proxy.example/store")
            .collection_url(&Query::all(Collection::Profile))
            .unwrap();
        assert_eq!(url.as_str(), "https://proxy.example/store/rest/v1/profile?select=*");
    }

    #[test]
    fn error_body_message_is_used() {
        let err = parse_error_body(
            Collection::Projects,
            404,
            r#"{"code":"42P01","message":"relation \"public.projects\" does not exist"}"#,
        );
        assert_eq!(
            err,
            FetchError::Query {
                collection: "projects",
                status: 404,
                message: "relation \"public.projects\" does not exist".into(),
            }
        );
    }

    #[test]
    fn non_json_body_falls_back_to_reason() {
        let err = parse_error_body(Collection::Courses, 503, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "Query on `courses` failed (503): Service Unavailable");
    }

    #[test]
    fn rejects_key_with_control_characters() {
        let config = DataStoreConfig::new("https://demo.supabase.co", "bad\nkey").unwrap();
        assert!(matches!(RestClient::new(&config), Err(FetchError::Setup(_))));
    }
}
