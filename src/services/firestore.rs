use crate::models::PublicClinic;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::{json, Map, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with Firestore
#[derive(Debug, Error)]
pub enum FirestoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key or security rules denied access")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Firestore REST client for the published clinic directory
///
/// Read-only: the client only lists and fetches documents of the public
/// clinics collection.
pub struct FirestoreClient {
    base_url: String,
    project_id: String,
    database_id: String,
    collection: String,
    api_key: Option<String>,
    client: Client,
}

impl FirestoreClient {
    /// Create a new Firestore client
    pub fn new(
        base_url: String,
        project_id: String,
        database_id: String,
        collection: String,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, FirestoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            project_id,
            database_id,
            collection,
            api_key,
            client,
        })
    }

    fn documents_root(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.project_id,
            self.database_id
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }

    /// Fetch every clinic document with `isPublished == true`
    pub async fn fetch_published_clinics(&self) -> Result<Vec<PublicClinic>, FirestoreError> {
        let url = format!("{}:runQuery", self.documents_root());

        let body = json!({
            "structuredQuery": {
                "from": [{ "collectionId": self.collection }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": "isPublished" },
                        "op": "EQUAL",
                        "value": { "booleanValue": true }
                    }
                }
            }
        });

        tracing::debug!("Querying published clinics from: {}", url);

        let response = self
            .authorize(self.client.post(&url))
            .json(&body)
            .send()
            .await?;

        check_status(response.status(), "query published clinics")?;

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| FirestoreError::InvalidResponse("Expected an array of query results".into()))?;

        let mut clinics = Vec::with_capacity(rows.len());
        // Rows without a document only carry a readTime
        for document in rows.iter().filter_map(|row| row.get("document")) {
            match decode_clinic(document) {
                Ok(clinic) => clinics.push(clinic),
                Err(e) => tracing::warn!("Skipping malformed clinic document: {}", e),
            }
        }

        tracing::debug!("Fetched {} published clinics", clinics.len());

        Ok(clinics)
    }

    /// Fetch a single clinic, `None` when missing or unpublished
    pub async fn fetch_published_clinic(
        &self,
        public_id: &str,
    ) -> Result<Option<PublicClinic>, FirestoreError> {
        let url = format!(
            "{}/{}/{}",
            self.documents_root(),
            self.collection,
            urlencoding::encode(public_id)
        );

        tracing::debug!("Fetching clinic from: {}", url);

        let response = self.authorize(self.client.get(&url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        check_status(response.status(), "fetch clinic")?;

        let document: Value = response.json().await?;
        let clinic = decode_clinic(&document)?;

        Ok(clinic.is_published.then_some(clinic))
    }
}

fn check_status(status: StatusCode, action: &str) -> Result<(), FirestoreError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(FirestoreError::Unauthorized);
    }
    if !status.is_success() {
        return Err(FirestoreError::ApiError(format!("Failed to {}: {}", action, status)));
    }
    Ok(())
}

/// Convert a Firestore document into a clinic
///
/// The document id is the last segment of the resource `name`.
pub fn decode_clinic(document: &Value) -> Result<PublicClinic, FirestoreError> {
    let name = document
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| FirestoreError::InvalidResponse("Document without name".into()))?;
    let id = name.rsplit('/').next().unwrap_or(name).to_string();

    let mut data = match document.get("fields") {
        Some(Value::Object(fields)) => decode_fields(fields),
        _ => Map::new(),
    };
    data.insert("id".to_string(), Value::String(id));

    // Non-finite coordinates decode to null; list the clinic as unlocated
    let unlocated = data
        .get("geo")
        .is_some_and(|geo| !(geo["lat"].is_number() && geo["lng"].is_number()));
    if unlocated {
        tracing::debug!("Clinic {} has no usable location", name);
        data.remove("geo");
    }

    serde_json::from_value(Value::Object(data))
        .map_err(|e| FirestoreError::InvalidResponse(format!("Failed to parse clinic {}: {}", name, e)))
}

fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), decode_value(value)))
        .collect()
}

/// Convert a typed Firestore value into plain JSON
pub fn decode_value(value: &Value) -> Value {
    let Some(object) = value.as_object() else {
        return Value::Null;
    };

    if let Some(v) = object.get("stringValue") {
        return v.clone();
    }
    if let Some(v) = object.get("booleanValue") {
        return v.clone();
    }
    if let Some(v) = object.get("integerValue") {
        // Int64 values are transmitted as strings
        return match v {
            Value::String(s) => s.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
            other => other.clone(),
        };
    }
    if let Some(v) = object.get("doubleValue") {
        return match v {
            Value::Number(_) => v.clone(),
            // NaN and infinities arrive as strings and have no JSON form
            _ => Value::Null,
        };
    }
    if let Some(v) = object
        .get("timestampValue")
        .or_else(|| object.get("referenceValue"))
        .or_else(|| object.get("bytesValue"))
    {
        return v.clone();
    }
    if let Some(geo) = object.get("geoPointValue") {
        // Zero coordinates are omitted on the wire
        return json!({
            "lat": geo.get("latitude").cloned().unwrap_or(json!(0.0)),
            "lng": geo.get("longitude").cloned().unwrap_or(json!(0.0)),
        });
    }
    if let Some(map) = object.get("mapValue") {
        return match map.get("fields") {
            Some(Value::Object(fields)) => Value::Object(decode_fields(fields)),
            _ => Value::Object(Map::new()),
        };
    }
    if let Some(array) = object.get("arrayValue") {
        let values: Vec<Value> = array
            .get("values")
            .and_then(Value::as_array)
            .map(|values| values.iter().map(decode_value).collect())
            .unwrap_or_default();
        return Value::Array(values);
    }

    Value::Null
}
