// Rust guideline compliant 2026-10-16

//! `AdoptionStore` backed by the adoption REST API.

use async_trait::async_trait;
use chrono::NaiveDate;
use patitas_core::wire::{self, RecordBatch, RecordPayload, TransitionPayload};
use patitas_core::{AnimalRecord, Config, RecordId, Transition, ValidatedDraft};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::snapshot::View;
use crate::store::AdoptionStore;

const USER_AGENT: &str = concat!("patitas/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the adoption API.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// Builds a store for the configured API base.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::InvalidInput(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// The API base every path is joined to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn send(&self, method: &str, url: &str, request: RequestBuilder) -> Result<Response> {
        tracing::debug!(%method, %url, "Sending request");
        let response = request.send().await.map_err(transport_error)?;
        tracing::debug!(%method, %url, status = response.status().as_u16(), "Received response");
        Ok(response)
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        let url = self.url(path);
        let request = self.client.get(&url).query(query);
        self.send("GET", &url, request).await
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let response = expect_status(self.get(path, &[]).await?, StatusCode::OK).await?;
        read_json(response).await
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn transition_path(id: &RecordId, transition: Transition) -> String {
    let action = match transition {
        Transition::MarkAdopted => "adoptar",
        Transition::Deactivate => "desactivar",
        Transition::Reactivate => "reactivar",
    };
    format!("mascotas/{id}/{action}")
}

fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        AppError::MalformedResponse(err.to_string())
    } else {
        AppError::NetworkUnavailable(err.to_string())
    }
}

/// Extracts the user-facing message from an error body.
fn rejection_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}

async fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = rejection_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unexpected response status")
            .to_string()
    });
    Err(AppError::RemoteRejected {
        status: status.as_u16(),
        message,
    })
}

async fn read_json(response: Response) -> Result<Value> {
    response
        .json::<Value>()
        .await
        .map_err(|e| AppError::MalformedResponse(format!("Response is not JSON: {e}")))
}

/// Decodes a list response for `view`.
fn batch_from_value(view: View, value: Value) -> Result<RecordBatch> {
    let items = match value {
        Value::Array(items) => items,
        other if view.accepts_wrapper() => wire::extract_array(other).ok_or_else(|| {
            AppError::MalformedResponse(format!("No record array in {view} response"))
        })?,
        _ => {
            return Err(AppError::MalformedResponse(format!(
                "Expected an array in {view} response"
            )))
        }
    };
    Ok(wire::records_from_values(items, view.implied_status()))
}

fn record_from_detail(value: Value) -> Result<AnimalRecord> {
    let value = match value {
        Value::Array(mut items) if items.len() == 1 => items.remove(0),
        other => other,
    };
    wire::record_from_value(value, None).map_err(|e| AppError::MalformedResponse(e.to_string()))
}

#[async_trait]
impl AdoptionStore for HttpStore {
    async fn fetch_view(&self, view: View) -> Result<RecordBatch> {
        let response = self.get(view.path(), view.query()).await?;
        if view.not_found_is_empty() && response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(%view, "No records in view");
            return Ok(RecordBatch::default());
        }

        let value = read_json(expect_status(response, StatusCode::OK).await?).await?;
        batch_from_value(view, value)
    }

    async fn fetch_record(&self, id: &RecordId) -> Result<AnimalRecord> {
        let value = self.get_json(&format!("mascotas/{id}")).await?;
        record_from_detail(value)
    }

    async fn shelter_codes(&self) -> Result<Vec<String>> {
        let value = self.get_json("refugios/codigos").await?;
        wire::shelter_codes_from_value(value)
            .map_err(|e| AppError::MalformedResponse(format!("Invalid shelter codes: {e}")))
    }

    async fn create(&self, draft: &ValidatedDraft) -> Result<()> {
        let url = self.url("mascotas");
        let request = self.client.post(&url).json(&RecordPayload::from(draft));
        expect_status(self.send("POST", &url, request).await?, StatusCode::CREATED).await?;
        Ok(())
    }

    async fn update(&self, id: &RecordId, draft: &ValidatedDraft) -> Result<()> {
        let url = self.url(&format!("mascotas/{id}"));
        let request = self.client.put(&url).json(&RecordPayload::from(draft));
        expect_status(self.send("PUT", &url, request).await?, StatusCode::OK).await?;
        Ok(())
    }

    async fn apply_transition(
        &self,
        id: &RecordId,
        transition: Transition,
        today: NaiveDate,
    ) -> Result<()> {
        let url = self.url(&transition_path(id, transition));
        let request = self
            .client
            .put(&url)
            .json(&TransitionPayload::new(transition, today));
        expect_status(self.send("PUT", &url, request).await?, StatusCode::OK).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patitas_core::Status;
    use serde_json::json;

    fn wire_record(id: i64) -> Value {
        json!({
            "id": id,
            "nombre": "Toto",
            "especie": "Canina",
            "sexo": "Macho",
            "edad": "3 meses",
            "descripcion": "Juguetón",
        })
    }

    #[test]
    fn test_join_url_normalises_slashes() {
        assert_eq!(
            join_url("http://localhost:5000/api/", "/mascotas"),
            "http://localhost:5000/api/mascotas"
        );
        assert_eq!(
            join_url("http://localhost:5000/api", "refugios/codigos"),
            "http://localhost:5000/api/refugios/codigos"
        );
    }

    #[test]
    fn test_transition_paths() {
        let id = RecordId::new("7");
        assert_eq!(transition_path(&id, Transition::MarkAdopted), "mascotas/7/adoptar");
        assert_eq!(transition_path(&id, Transition::Deactivate), "mascotas/7/desactivar");
        assert_eq!(transition_path(&id, Transition::Reactivate), "mascotas/7/reactivar");
    }

    #[test]
    fn test_rejection_message_prefers_message_field() {
        assert_eq!(
            rejection_message(r#"{"message": "Mascota no encontrada"}"#).as_deref(),
            Some("Mascota no encontrada")
        );
        assert_eq!(
            rejection_message(r#"{"error": "Edad inválida"}"#).as_deref(),
            Some("Edad inválida")
        );
        assert_eq!(rejection_message("<html>500</html>"), None);
        assert_eq!(rejection_message(r#"{"message": "  "}"#), None);
    }

    #[test]
    fn test_recent_accepts_wrapper_other_views_do_not() {
        let wrapped = json!({ "mascotas": [wire_record(1), wire_record(2)] });
        let batch = batch_from_value(View::Recent, wrapped.clone()).unwrap();
        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.records[0].status, Status::Available);

        let err = batch_from_value(View::Catalog, wrapped).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn test_catalog_does_not_guess_missing_status() {
        let mut labelled = wire_record(2);
        labelled["estado"] = json!("adoptado");
        let batch = batch_from_value(View::Catalog, json!([wire_record(1), labelled])).unwrap();
        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].status, Status::Adopted);
        assert_eq!(batch.rejected.len(), 1);
    }

    #[test]
    fn test_inactive_batch_implies_inactive_status() {
        let batch = batch_from_value(View::Inactive, json!([wire_record(4)])).unwrap();
        assert_eq!(batch.records[0].status, Status::Inactive);
    }

    #[test]
    fn test_detail_accepts_single_element_array() {
        let mut value = wire_record(9);
        value["estado"] = json!("adoptado");
        let record = record_from_detail(json!([value])).unwrap();
        assert_eq!(record.id.as_str(), "9");
        assert_eq!(record.status, Status::Adopted);

        let err = record_from_detail(wire_record(9)).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn test_new_trims_base_url() {
        let config = Config {
            api_base_url: "http://localhost:5000/api/".to_string(),
            ..Config::default()
        };
        let store = HttpStore::new(&config).unwrap();
        assert_eq!(store.base_url(), "http://localhost:5000/api");
    }
}
