//! Google Sheets v4 `values` endpoints over synchronous HTTP.
//!
//! Uses `ureq` with a fixed request timeout. Non-2xx responses become
//! `RemoteRequestFailed`; connection problems become `Transport`.

use super::{RemoteTable, cell_text};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use url::Url;

/// Longest error body kept in an error message.
const MAX_ERROR_BODY: usize = 500;

pub struct SheetsClient {
    http: ureq::Agent,
    api_base: String,
    spreadsheet_id: String,
    append_range: String,
    read_range: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendResponse {
    #[serde(default)]
    updates: Option<AppendUpdates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    #[serde(default)]
    updated_rows: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl SheetsClient {
    pub fn from_config(cfg: &Config) -> Self {
        let http = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(cfg.http_timeout_secs))
            .build();

        Self {
            http,
            api_base: cfg.sheets_api_base.clone(),
            spreadsheet_id: cfg.spreadsheet_id.clone(),
            append_range: cfg.append_range(),
            read_range: cfg.read_range(),
        }
    }

    /// `{base}/spreadsheets/{id}/values/{range}{suffix}` with every segment
    /// percent-encoded (sheet names may contain spaces and non-ASCII text).
    fn values_url(&self, range: &str, suffix: &str) -> AppResult<Url> {
        let last = format!("{range}{suffix}");
        let mut url = Url::parse(&self.api_base)
            .map_err(|e| AppError::Config(format!("invalid sheets_api_base: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| AppError::Config("sheets_api_base cannot be a base URL".into()))?
            .pop_if_empty()
            .extend([
                "spreadsheets",
                self.spreadsheet_id.as_str(),
                "values",
                last.as_str(),
            ]);

        Ok(url)
    }
}

/// Map ureq failures onto the sync error taxonomy.
fn request_error(err: ureq::Error) -> AppError {
    match err {
        ureq::Error::Status(status, response) => {
            let body = response.into_string().unwrap_or_default();
            let message = if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|i| body.is_char_boundary(*i))
                    .unwrap_or(0);
                format!("{}...", &body[..cut])
            } else {
                body
            };
            AppError::RemoteRequestFailed { status, message }
        }
        ureq::Error::Transport(transport) => AppError::Transport(transport.to_string()),
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

impl RemoteTable for SheetsClient {
    fn append_rows(&self, token: &str, rows: &[Vec<Value>]) -> AppResult<usize> {
        let mut url = self.values_url(&self.append_range, ":append")?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED")
            .append_pair("insertDataOption", "INSERT_ROWS");

        let resp = self
            .http
            .request_url("POST", &url)
            .set("Authorization", &bearer(token))
            .send_json(json!({
                "range": self.append_range,
                "majorDimension": "ROWS",
                "values": rows,
            }))
            .map_err(request_error)?;

        let body: AppendResponse = resp
            .into_json()
            .map_err(|e| AppError::Transport(format!("failed to parse append response: {e}")))?;

        Ok(body
            .updates
            .and_then(|u| u.updated_rows)
            .unwrap_or(rows.len()))
    }

    fn fetch_rows(&self, token: &str) -> AppResult<Vec<Vec<String>>> {
        let mut url = self.values_url(&self.read_range, "")?;
        // Dates come back as serial day numbers, whatever the sheet locale.
        url.query_pairs_mut()
            .append_pair("majorDimension", "ROWS")
            .append_pair("valueRenderOption", "UNFORMATTED_VALUE")
            .append_pair("dateTimeRenderOption", "SERIAL_NUMBER");

        let resp = self
            .http
            .request_url("GET", &url)
            .set("Authorization", &bearer(token))
            .call()
            .map_err(request_error)?;

        let range: ValueRange = resp
            .into_json()
            .map_err(|e| AppError::Transport(format!("failed to parse values response: {e}")))?;

        Ok(range
            .values
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect())
    }
}
