//! Thin HTTP client over the REST API.
//!
//! Every request carries `Accept: application/json` and, when a user is
//! logged in, the `X-User-Id` header. Failures are mapped to [`ApiError`],
//! whose `Display` is the message shown to the user.

use super::api_utils::{api_url, resource_path, USER_ID_HEADER};
use crate::system::auth::storage;
use contracts::domain::common::{unwrap_collection, EntityId, Resource};
use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use web_sys::FormData;

fn with_defaults(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match storage::current_user_id() {
        Some(id) => builder.header(USER_ID_HEADER, &id.to_string()),
        None => builder,
    }
}

async fn dispatch(method: &str, path: &str, request: Request) -> Result<Value, ApiError> {
    log::debug!("{} {}", method, path);
    let response = request.send().await.map_err(|e| {
        log::warn!("{} {} failed: {}", method, path, e);
        ApiError::network()
    })?;
    read_body(method, path, response).await
}

async fn read_body(method: &str, path: &str, response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if !response.ok() {
        let err = ApiError::from_response(status, &text);
        log::warn!("{} {} -> HTTP {}: {}", method, path, status, err);
        return Err(err);
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| {
        log::warn!("{} {}: invalid JSON: {}", method, path, e);
        ApiError::decode(e)
    })
}

pub async fn get_json(path: &str) -> Result<Value, ApiError> {
    let request = with_defaults(Request::get(&api_url(path)))
        .build()
        .map_err(ApiError::decode)?;
    dispatch("GET", path, request).await
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<Value, ApiError> {
    let request = with_defaults(Request::post(&api_url(path)))
        .json(body)
        .map_err(ApiError::decode)?;
    dispatch("POST", path, request).await
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<Value, ApiError> {
    let request = with_defaults(Request::put(&api_url(path)))
        .json(body)
        .map_err(ApiError::decode)?;
    dispatch("PUT", path, request).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let request = with_defaults(Request::delete(&api_url(path)))
        .build()
        .map_err(ApiError::decode)?;
    dispatch("DELETE", path, request).await.map(|_| ())
}

/// Multipart upload. No content type is set so the browser adds the boundary.
pub async fn post_multipart(path: &str, form: FormData) -> Result<Value, ApiError> {
    let request = with_defaults(Request::post(&api_url(path)))
        .body(form)
        .map_err(ApiError::decode)?;
    dispatch("POST", path, request).await
}

/// Rows of a list response, bare array or `{"data": [...]}`.
pub fn decode_rows<T>(
    raw: Value,
    decode: impl Fn(Value) -> Result<T, serde_json::Error>,
) -> Result<Vec<T>, ApiError> {
    let rows = unwrap_collection(raw)
        .ok_or_else(|| ApiError::decode("a lista esperada não foi encontrada"))?;
    rows.into_iter()
        .map(|row| decode(row).map_err(ApiError::decode))
        .collect()
}

/// `{"data": {...}}` envelopes are unwrapped for single records too.
fn unwrap_record(raw: Value) -> Value {
    match raw {
        Value::Object(mut map) if map.len() == 1 && map.get("data").is_some_and(Value::is_object) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

pub async fn fetch_all<R: Resource>() -> Result<Vec<R>, ApiError> {
    let raw = get_json(&resource_path(R::collection_name(), None)).await?;
    decode_rows(raw, R::from_raw)
}

pub async fn fetch_one<R: Resource>(id: EntityId) -> Result<R, ApiError> {
    let raw = get_json(&resource_path(R::collection_name(), Some(id))).await?;
    R::from_raw(unwrap_record(raw)).map_err(ApiError::decode)
}

/// POST for new records, PUT for existing ones.
pub async fn save<R: Resource>(record: &R) -> Result<(), ApiError> {
    match record.id() {
        Some(id) => put_json(&resource_path(R::collection_name(), Some(id)), record).await?,
        None => post_json(&resource_path(R::collection_name(), None), record).await?,
    };
    Ok(())
}

pub async fn remove<R: Resource>(id: EntityId) -> Result<(), ApiError> {
    delete(&resource_path(R::collection_name(), Some(id))).await
}
