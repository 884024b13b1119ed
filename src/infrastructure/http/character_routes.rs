//! Character API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{
    CharacterResponseDto, CharacterSheetDto, CreateCharacterRequestDto, EquipItemRequestDto,
    EquipWeaponRequestDto, HitPointsResponseDto, ModifyHitPointsRequestDto,
};
use crate::application::services::{CharacterService, CreateCharacterRequest};
use crate::domain::entities::{Equipment, EquipmentSlot, Item};
use crate::infrastructure::state::AppState;

use super::error::parse_character_id;

/// List all characters
pub async fn list_characters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CharacterResponseDto>>, (StatusCode, String)> {
    let characters = state.character_service.list_characters().await?;

    Ok(Json(characters.into_iter().map(CharacterResponseDto::from).collect()))
}

/// Create a character with rolled ability scores
pub async fn create_character(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCharacterRequestDto>,
) -> Result<(StatusCode, Json<CharacterResponseDto>), (StatusCode, String)> {
    let service_request = CreateCharacterRequest {
        name: req.name,
        race: req.race,
        subrace: req.subrace,
        class: req.class,
        ability_scores: None,
    };

    let character = state
        .character_service
        .create_character(service_request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CharacterResponseDto::from(character)),
    ))
}

/// Get a character by ID
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CharacterResponseDto>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let character = state.character_service.get_character(id).await?;

    Ok(Json(CharacterResponseDto::from(character)))
}

/// Delete a character
pub async fn delete_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    state.character_service.delete_character(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Derived statistics for a character
pub async fn get_character_sheet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CharacterSheetDto>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let sheet = state.character_service.character_sheet(id).await?;

    Ok(Json(sheet))
}

/// Apply damage (negative delta) or healing (positive delta)
pub async fn modify_hit_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ModifyHitPointsRequestDto>,
) -> Result<Json<HitPointsResponseDto>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let hit_points = state
        .character_service
        .modify_hit_points(id, req.delta)
        .await?;

    Ok(Json(HitPointsResponseDto { hit_points }))
}

pub async fn equip_weapon(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<EquipWeaponRequestDto>,
) -> Result<Json<Equipment>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let equipment = state
        .character_service
        .equip_weapon(id, req.item_id, req.off_hand)
        .await?;

    Ok(Json(equipment))
}

pub async fn equip_armor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<EquipItemRequestDto>,
) -> Result<Json<Equipment>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let equipment = state.character_service.equip_armor(id, req.item_id).await?;

    Ok(Json(equipment))
}

pub async fn equip_shield(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<EquipItemRequestDto>,
) -> Result<Json<Equipment>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let equipment = state.character_service.equip_shield(id, req.item_id).await?;

    Ok(Json(equipment))
}

/// Clear one equipment slot (`main_hand`, `off_hand` or `armor`)
pub async fn unequip(
    State(state): State<Arc<AppState>>,
    Path((id, slot)): Path<(String, EquipmentSlot)>,
) -> Result<Json<Equipment>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let equipment = state.character_service.unequip(id, slot).await?;

    Ok(Json(equipment))
}

/// Equippable item catalog
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Item>>, (StatusCode, String)> {
    let items = state.character_service.list_items().await?;

    Ok(Json(items))
}
