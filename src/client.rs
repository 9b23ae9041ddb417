//! HTTP client for the SheetGenie backend.
//!
//! Five operations, each a single JSON POST to a fixed path. Every
//! response is a JSON body with a top-level `success` flag; failures
//! carry an `error` string instead of the payload. The backend reports
//! failures with a 4xx/5xx status *and* a JSON error body, so the body
//! is decoded regardless of status.

use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::column::Column;
use crate::error::GenieError;
use crate::Row;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    success: bool,
    sheet_name: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateColumnsResponse {
    success: bool,
    columns: Option<Vec<Column>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateDataResponse {
    success: bool,
    data: Option<Vec<Row>>,
    error: Option<String>,
}

/// Response shape shared by both push operations.
#[derive(Debug, Deserialize)]
struct PushResponse {
    success: bool,
    message: Option<String>,
    error: Option<String>,
}

/// Client for the SheetGenie backend.
pub struct SheetClient {
    base_url: String,
    client: reqwest::Client,
}

impl SheetClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, GenieError> {
        let resp = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        debug!(path, status = %resp.status(), "backend response");
        Ok(resp.json().await?)
    }

    /// Check that the sheet exists; returns its name.
    pub async fn verify_sheet(&self, sheet_id: &str) -> Result<String, GenieError> {
        debug!(sheet_id, "verifying sheet");
        let resp: VerifyResponse = self
            .post("/verify_sheet", &json!({ "sheet_id": sheet_id }))
            .await?;

        if resp.success {
            Ok(resp.sheet_name.unwrap_or_default())
        } else {
            Err(backend_error(resp.error))
        }
    }

    /// Ask the backend to suggest columns for the given sheet purpose.
    pub async fn generate_columns(&self, sheet_purpose: &str) -> Result<Vec<Column>, GenieError> {
        debug!(sheet_purpose, "generating columns");
        let resp: GenerateColumnsResponse = self
            .post("/generate_columns", &json!({ "sheet_purpose": sheet_purpose }))
            .await?;

        if resp.success {
            Ok(resp.columns.unwrap_or_default())
        } else {
            Err(backend_error(resp.error))
        }
    }

    /// Replace the sheet's columns; returns the backend's status message.
    pub async fn push_columns(
        &self,
        sheet_id: &str,
        columns: &[Column],
    ) -> Result<String, GenieError> {
        debug!(sheet_id, count = columns.len(), "pushing columns");
        let resp: PushResponse = self
            .post(
                "/push_columns",
                &json!({ "sheet_id": sheet_id, "columns": columns }),
            )
            .await?;

        if resp.success {
            Ok(resp.message.unwrap_or_default())
        } else {
            Err(backend_error(resp.error))
        }
    }

    /// Ask the backend to generate sample rows for the given columns.
    pub async fn generate_data(
        &self,
        sheet_id: &str,
        columns: &[Column],
        data_prompt: &str,
    ) -> Result<Vec<Row>, GenieError> {
        debug!(sheet_id, data_prompt, "generating data");
        let resp: GenerateDataResponse = self
            .post(
                "/generate_data",
                &json!({
                    "sheet_id": sheet_id,
                    "columns": columns,
                    "data_prompt": data_prompt,
                }),
            )
            .await?;

        if resp.success {
            Ok(resp.data.unwrap_or_default())
        } else {
            Err(backend_error(resp.error))
        }
    }

    /// Append the generated rows to the sheet; returns the backend's
    /// status message.
    pub async fn push_data(&self, sheet_id: &str, data: &[Row]) -> Result<String, GenieError> {
        debug!(sheet_id, rows = data.len(), "pushing data");
        let resp: PushResponse = self
            .post("/push_data", &json!({ "sheet_id": sheet_id, "data": data }))
            .await?;

        if resp.success {
            Ok(resp.message.unwrap_or_default())
        } else {
            Err(backend_error(resp.error))
        }
    }
}

fn backend_error(error: Option<String>) -> GenieError {
    GenieError::Backend(error.unwrap_or_else(|| "backend returned no error detail".to_string()))
}
