//! HTTP REST API routes

mod character_routes;
mod dice_routes;
mod error;
mod wealth_routes;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Character routes
        .route(
            "/api/characters",
            get(character_routes::list_characters).post(character_routes::create_character),
        )
        .route(
            "/api/characters/{id}",
            get(character_routes::get_character).delete(character_routes::delete_character),
        )
        .route(
            "/api/characters/{id}/sheet",
            get(character_routes::get_character_sheet),
        )
        .route(
            "/api/characters/{id}/hit-points",
            put(character_routes::modify_hit_points),
        )
        // Equipment routes
        .route(
            "/api/characters/{id}/equipment/weapon",
            put(character_routes::equip_weapon),
        )
        .route(
            "/api/characters/{id}/equipment/armor",
            put(character_routes::equip_armor),
        )
        .route(
            "/api/characters/{id}/equipment/shield",
            put(character_routes::equip_shield),
        )
        .route(
            "/api/characters/{id}/equipment/{slot}",
            delete(character_routes::unequip),
        )
        .route("/api/items", get(character_routes::list_items))
        // Wealth routes
        .route(
            "/api/characters/{id}/wealth",
            get(wealth_routes::get_wealth).put(wealth_routes::modify_currency),
        )
        .route(
            "/api/characters/{id}/wealth/initialize",
            post(wealth_routes::initialize_currency),
        )
        .route(
            "/api/characters/{id}/wealth/exchange",
            post(wealth_routes::exchange_currency),
        )
        // Dice routes
        .route("/api/dice/roll", post(dice_routes::roll_dice))
}
