use crate::error::{Result, SourceError};
use crate::models::QueryEnvelope;
use log::{debug, warn};
use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;

pub const ANILIST_URL: &str = "https://graphql.anilist.co";

/// Sends GraphQL queries to a single endpoint and unwraps the `data` envelope.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    client: Client,
    endpoint: String,
}

impl QueryExecutor {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        debug!("POST {} variables={}", self.endpoint, variables);

        let json_body = json!({ "query": query, "variables": variables });
        let res = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&json_body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!("{} responded with {}", self.endpoint, status);
            debug!("error body: {}", body);
            return Err(SourceError::remote(status));
        }

        let body_text = res.text().await?;
        let envelope: QueryEnvelope = serde_json::from_str(&body_text)?;
        Ok(envelope.data)
    }

    pub async fn execute_as<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        let data = self.execute(query, variables).await?;
        Ok(serde_json::from_value(data)?)
    }
}
