use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RollDiceRequestDto {
    pub sides: i32,
    #[serde(default = "default_dice_count")]
    pub count: i32,
}

fn default_dice_count() -> i32 {
    1
}

#[derive(Debug, Serialize)]
pub struct RollDiceResponseDto {
    pub sides: i32,
    pub rolls: Vec<i32>,
    pub total: i32,
}
