use crate::domain::model::RawRecord;
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Issues a single GET and decodes the body as an array of records.
///
/// Every failure (transport, non-success status, undecodable body) is logged
/// and turned into an empty result; this function never errors.
pub async fn fetch_records(client: &Client, url: &str) -> Vec<RawRecord> {
    tracing::debug!("Making API request to: {}", url);

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Error fetching data: {}", e);
            return Vec::new();
        }
    };

    tracing::debug!("API response status: {}", response.status());

    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Error fetching data: {}", e);
            return Vec::new();
        }
    };

    let body: serde_json::Value = match response.json().await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Error fetching data: {}", e);
            return Vec::new();
        }
    };

    match body {
        serde_json::Value::Array(items) => {
            tracing::debug!("Fetched {} records from {}", items.len(), url);
            items.into_iter().map(RawRecord::from).collect()
        }
        other => {
            tracing::warn!(
                "Expected a JSON array from {}, got {}; treating as empty",
                url,
                json_kind(&other)
            );
            Vec::new()
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
