//! Handlers for create, get, delete, list and natural-language filtering.

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::{json, Value};

use super::{ApiResponse, StatusCode};
use crate::engine::{analyze, detect_conflict, parse};
use crate::store::{MemoryStore, RecordStore};
use crate::types::{now_micros, FilterSet, StringRecord, StrsError};

const MSG_VALUE_REQUIRED: &str = "The 'value' field is required.";
const MSG_VALUE_NOT_STRING: &str = "Value must be a string.";
const MSG_VALUE_EMPTY: &str = "Value cannot be empty.";
const MSG_DUPLICATE: &str = "String already exists in the database.";
const MSG_NOT_FOUND: &str = "String not found.";
const MSG_QUERY_REQUIRED: &str = "The 'query' parameter is required.";
const MSG_CONFLICT: &str = "Conflicting filters: min_length cannot be greater than max_length.";

/// The request layer over a [`RecordStore`].
pub struct StringService<S: RecordStore = MemoryStore> {
    store: S,
}

impl<S: RecordStore> StringService<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the service and return the store (e.g. to persist it).
    pub fn into_store(self) -> S {
        self.store
    }

    /// Create a record from a JSON payload of the form `{"value": "..."}`.
    ///
    /// 400 when `value` is missing or blank, 422 when it is not a string,
    /// 409 when the string is already stored.
    pub fn create(&mut self, payload: &Value) -> ApiResponse {
        let value = match payload.get("value") {
            None => return ApiResponse::error(StatusCode::BadRequest, MSG_VALUE_REQUIRED),
            Some(Value::String(s)) => s,
            Some(_) => {
                return ApiResponse::error(StatusCode::UnprocessableEntity, MSG_VALUE_NOT_STRING)
            }
        };
        if value.trim().is_empty() {
            return ApiResponse::error(StatusCode::BadRequest, MSG_VALUE_EMPTY);
        }

        let properties = analyze(value);
        let record = StringRecord::new(value.as_str(), properties, now_micros());
        match self.store.create(record) {
            Ok(stored) => {
                info!("created record {}", stored.id);
                to_body(stored).map_or_else(internal_error, |body| {
                    ApiResponse::new(StatusCode::Created, body)
                })
            }
            Err(StrsError::Duplicate(id)) => {
                debug!("rejected duplicate of {}", id);
                ApiResponse::error(StatusCode::Conflict, MSG_DUPLICATE)
            }
            Err(e) => internal_error(e),
        }
    }

    /// Fetch the record holding exactly `value`.
    pub fn get(&self, value: &str) -> ApiResponse {
        match self.store.get_by_value(value) {
            Some(record) => to_body(record)
                .map_or_else(internal_error, |body| ApiResponse::new(StatusCode::Ok, body)),
            None => ApiResponse::error(StatusCode::NotFound, MSG_NOT_FOUND),
        }
    }

    /// Delete the record holding exactly `value`. 204 with no body on success.
    pub fn delete(&mut self, value: &str) -> ApiResponse {
        match self.store.delete_by_value(value) {
            Some(record) => {
                info!("deleted record {}", record.id);
                ApiResponse::no_content()
            }
            None => ApiResponse::error(StatusCode::NotFound, MSG_NOT_FOUND),
        }
    }

    /// List records matching structured query parameters.
    ///
    /// Body: `{data, count, filters_applied}`. 400 on a malformed parameter,
    /// 422 when `min_length > max_length`.
    pub fn list<'a, I>(&self, params: I) -> ApiResponse
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let filters = match FilterSet::from_params(params) {
            Ok(f) => f,
            Err(e) => return ApiResponse::error(StatusCode::BadRequest, e.to_string()),
        };
        if detect_conflict(&filters) {
            warn!("rejected contradictory filters {:?}", filters);
            return ApiResponse::new(
                StatusCode::UnprocessableEntity,
                json!({ "error": MSG_CONFLICT, "filters_applied": filters }),
            );
        }

        let records = self.store.filter(&filters);
        match listing(&records, "filters_applied", &filters) {
            Ok(body) => ApiResponse::new(StatusCode::Ok, body),
            Err(e) => internal_error(e),
        }
    }

    /// List records matching a natural-language phrase.
    ///
    /// Body: `{data, count, interpreted_query: {original_query, parsed_filters}}`.
    /// 400 when the phrase is missing or empty, 422 on contradictory length bounds.
    pub fn filter_by_natural_language(&self, query: Option<&str>) -> ApiResponse {
        let phrase = match query {
            Some(q) if !q.is_empty() => q,
            _ => return ApiResponse::error(StatusCode::BadRequest, MSG_QUERY_REQUIRED),
        };

        let filters = parse(phrase);
        debug!("interpreted {:?} as {:?}", phrase, filters);
        if detect_conflict(&filters) {
            warn!("phrase {:?} yields contradictory filters", phrase);
            return ApiResponse::new(
                StatusCode::UnprocessableEntity,
                json!({ "error": MSG_CONFLICT, "parsed_filters": filters }),
            );
        }

        let records = self.store.filter(&filters);
        let interpreted = json!({
            "original_query": phrase,
            "parsed_filters": filters,
        });
        match listing(&records, "interpreted_query", &interpreted) {
            Ok(body) => ApiResponse::new(StatusCode::Ok, body),
            Err(e) => internal_error(e),
        }
    }
}

impl Default for StringService<MemoryStore> {
    fn default() -> Self {
        Self::new(MemoryStore::new())
    }
}

fn to_body(value: &impl Serialize) -> Result<Value, serde_json::Error> {
    serde_json::to_value(value)
}

/// `{data, count, <key>: extra}` for a listing response.
fn listing(
    records: &[&StringRecord],
    key: &str,
    extra: &impl Serialize,
) -> Result<Value, serde_json::Error> {
    let data = serde_json::to_value(records)?;
    let mut body = json!({ "data": data, "count": records.len() });
    body[key] = serde_json::to_value(extra)?;
    Ok(body)
}

fn internal_error(e: impl std::fmt::Display) -> ApiResponse {
    log::error!("unexpected failure: {}", e);
    ApiResponse::error(StatusCode::InternalError, e.to_string())
}
