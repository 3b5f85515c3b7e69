//! Request handlers for the component endpoints.
//!
//! Each handler validates its input, hands the store call to the blocking
//! pool and serializes the result. No state survives between requests.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use super::wire::{ComponentBody, ComponentView};
use super::AppState;
use crate::error::{Error, Result};
use crate::store::ComponentStore;

/// Runs a store operation on the blocking thread pool.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T>
where
    F: FnOnce(&ComponentStore) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| Error::Task(e.to_string()))?
}

/// Parses a path id; anything that is not an integer cannot name a component.
fn parse_id(raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| Error::NotFound {
        resource: format!("component {raw}"),
    })
}

fn decode_body(
    payload: std::result::Result<Json<ComponentBody>, JsonRejection>,
) -> Result<ComponentBody> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| Error::MalformedRequest {
            reason: rejection.body_text(),
        })
}

pub(super) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(super) async fn list_components(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ComponentView>>> {
    let components = with_store(&state, ComponentStore::list_all).await?;
    log::debug!("listed {} components", components.len());
    Ok(Json(components.into_iter().map(ComponentView::from).collect()))
}

pub(super) async fn create_component(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ComponentBody>, JsonRejection>,
) -> Result<(StatusCode, Json<ComponentView>)> {
    let fields = decode_body(payload)?.into_fields()?;
    let component = with_store(&state, move |store| store.create(&fields)).await?;
    log::info!("created component {component}");
    Ok((StatusCode::CREATED, Json(component.into())))
}

pub(super) async fn get_component(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ComponentView>> {
    let id = parse_id(&raw_id)?;
    let component = with_store(&state, move |store| store.get(id)).await?;
    Ok(Json(component.into()))
}

pub(super) async fn update_component(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    payload: std::result::Result<Json<ComponentBody>, JsonRejection>,
) -> Result<Json<ComponentView>> {
    let id = parse_id(&raw_id)?;
    let fields = decode_body(payload).and_then(|body| body.into_fields().map_err(Error::from));
    // An unknown id is reported before anything wrong with the body.
    let component = with_store(&state, move |store| {
        store.get(id)?;
        store.update(id, &fields?)
    })
    .await?;
    log::info!("updated component {component}");
    Ok(Json(component.into()))
}

pub(super) async fn delete_component(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&raw_id)?;
    with_store(&state, move |store| store.delete(id)).await?;
    log::info!("deleted component {id}");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert!(parse_id("abc").unwrap_err().is_not_found());
        assert!(parse_id("1.5").unwrap_err().is_not_found());
    }
}
