//! API Handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use bank_account_core::{Account, NewAccount};

use crate::error::ApiError;
use crate::state::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> &'static str {
    state.directory.health_check()
}

/// Get account by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Account>, ApiError> {
    let account = state.directory.get_by_id(&id).await?;
    Ok(Json(account))
}

/// List accounts of a customer
pub async fn get_by_customer_id(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = state.directory.get_by_customer_id(&customer_id).await?;
    Ok(Json(accounts))
}

/// Create a new account
pub async fn create_new(
    State(state): State<AppState>,
    payload: Result<Json<NewAccount>, JsonRejection>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let Json(request) = payload?;
    let accounts = state.directory.create_new(request).await?;
    Ok(Json(accounts))
}
