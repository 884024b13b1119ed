//! Wealth API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{ExchangeCurrencyRequestDto, ModifyCurrencyRequestDto};
use crate::application::services::WealthService;
use crate::domain::entities::Wealth;
use crate::infrastructure::state::AppState;

use super::error::parse_character_id;

pub async fn get_wealth(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Wealth>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let wealth = state.wealth_service.get_wealth(id).await?;

    Ok(Json(wealth))
}

/// Roll starting wealth for a character
pub async fn initialize_currency(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Wealth>), (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let wealth = state.wealth_service.initialize_currency(id).await?;

    Ok((StatusCode::CREATED, Json(wealth)))
}

pub async fn modify_currency(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ModifyCurrencyRequestDto>,
) -> Result<Json<Wealth>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let wealth = state.wealth_service.modify_currency(id, req.changes).await?;

    Ok(Json(wealth))
}

pub async fn exchange_currency(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ExchangeCurrencyRequestDto>,
) -> Result<Json<Wealth>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let wealth = state
        .wealth_service
        .exchange_currency(id, req.from, req.to, req.amount)
        .await?;

    Ok(Json(wealth))
}
