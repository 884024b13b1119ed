//! Dice API routes

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::application::dto::{RollDiceRequestDto, RollDiceResponseDto};
use crate::infrastructure::state::AppState;

pub async fn roll_dice(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RollDiceRequestDto>,
) -> Result<Json<RollDiceResponseDto>, (StatusCode, String)> {
    let rolls = state.dice_service.roll_dice(req.sides, req.count)?;

    Ok(Json(RollDiceResponseDto {
        sides: req.sides,
        total: rolls.iter().sum(),
        rolls,
    }))
}
