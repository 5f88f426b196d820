//! Requests issued by a panel, independent of any DOM.

use contracts::domain::common::MutationResponse;

use super::form::{validate, FormState};
use super::lookups::LookupCache;
use super::resource::Resource;
use crate::shared::api_utils::{item_path, with_query};
use crate::shared::error::ApiError;
use crate::shared::http::{get_json, send_json, ApiClient, ApiRequest, Method};

/// List path with the non-empty search text and a filter other than `all`.
pub fn list_path<R: Resource>(search: &str, filter: &str) -> String {
    let mut params: Vec<(&str, &str)> = Vec::new();
    if let Some(key) = R::SEARCH_PARAM {
        params.push((key, search));
    }
    if let Some(key) = R::FILTER_PARAM {
        if filter != "all" {
            params.push((key, filter));
        }
    }
    with_query(R::ENDPOINT, &params)
}

pub async fn load_items<R, C>(client: &C, search: &str, filter: &str) -> Result<Vec<R::Item>, ApiError>
where
    R: Resource,
    C: ApiClient + ?Sized,
{
    let path = list_path::<R>(search, filter);
    let items: Vec<R::Item> = get_json(client, &path).await?;
    let items = if R::FILTER_PARAM.is_none() && filter != "all" {
        R::local_filter(items, filter)
    } else {
        items
    };
    log::debug!("{}: loaded {} rows", R::KEY, items.len());
    Ok(items)
}

/// List load of a panel whose selects are fed by other panels: every
/// lookup in `R::dependencies()` is awaited, in order, before the list request.
pub async fn load_with_dependencies<R, C, L>(
    client: &C,
    lookups: &L,
    search: &str,
    filter: &str,
) -> Result<Vec<R::Item>, ApiError>
where
    R: Resource,
    C: ApiClient + ?Sized,
    L: LookupCache + ?Sized,
{
    for lookup in R::dependencies() {
        lookups.ensure_loaded(client, lookup).await;
    }
    load_items::<R, C>(client, search, filter).await
}

pub async fn fetch_detail<R, C>(client: &C, id: i64) -> Result<R::Detail, ApiError>
where
    R: Resource,
    C: ApiClient + ?Sized,
{
    get_json(client, &item_path(R::ENDPOINT, &id.to_string())).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated,
}

impl SubmitOutcome {
    pub fn message<R: Resource>(&self) -> String {
        match self {
            SubmitOutcome::Created => format!("{} created successfully", R::SINGULAR),
            SubmitOutcome::Updated => format!("{} updated successfully", R::SINGULAR),
        }
    }
}

/// Validate, then POST (empty id) or PUT (`ENDPOINT/<id>`).
///
/// A validation failure returns before any request is issued.
pub async fn submit<R, C>(client: &C, form: &FormState) -> Result<SubmitOutcome, ApiError>
where
    R: Resource,
    C: ApiClient + ?Sized,
{
    validate(&R::fields(), form)?;
    let payload = R::payload(form)?;
    let (method, path, outcome) = if form.is_new() {
        (Method::Post, R::ENDPOINT.to_string(), SubmitOutcome::Created)
    } else {
        (
            Method::Put,
            item_path(R::ENDPOINT, form.id.trim()),
            SubmitOutcome::Updated,
        )
    };
    let response = send_json(client, method, &path, &payload).await?;
    reject_unsuccessful(response)?;
    Ok(outcome)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
}

pub fn delete_prompt<R: Resource>() -> String {
    format!(
        "Are you sure you want to delete this {}?",
        R::SINGULAR.to_lowercase()
    )
}

/// Ask `confirm` first; only a confirmed delete issues the request.
pub async fn delete_confirmed<R, C>(
    client: &C,
    id: i64,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<DeleteOutcome, ApiError>
where
    R: Resource,
    C: ApiClient + ?Sized,
{
    if !confirm(&delete_prompt::<R>()) {
        return Ok(DeleteOutcome::Cancelled);
    }
    let response = client
        .send(ApiRequest::delete(item_path(R::ENDPOINT, &id.to_string())))
        .await?;
    reject_unsuccessful(response)?;
    Ok(DeleteOutcome::Deleted)
}

pub fn deleted_message<R: Resource>() -> String {
    format!("{} deleted successfully", R::SINGULAR)
}

pub fn load_failed_message<R: Resource>() -> String {
    format!("Failed to load {}", R::TITLE.to_lowercase())
}

pub fn detail_failed_message<R: Resource>() -> String {
    format!("Failed to load {} details", R::SINGULAR.to_lowercase())
}

pub fn save_failed_message<R: Resource>() -> String {
    format!("Failed to save {}", R::SINGULAR.to_lowercase())
}

pub fn delete_failed_message<R: Resource>() -> String {
    format!("Failed to delete {}", R::SINGULAR.to_lowercase())
}

/// A 2xx `{"success": false, "error": ...}` is still a failure.
pub(crate) fn reject_unsuccessful(response: serde_json::Value) -> Result<(), ApiError> {
    if let Some(message) = response.get("error").and_then(|v| v.as_str()) {
        if response.get("success").and_then(|v| v.as_bool()) != Some(true) {
            return Err(ApiError::Server {
                status: 200,
                message: message.to_string(),
            });
        }
    }
    if let Ok(ack) = serde_json::from_value::<MutationResponse>(response) {
        if let Some(id) = ack.id {
            log::debug!("mutation acknowledged, id {}", id);
        }
    }
    Ok(())
}
