use std::env;

use serde::{Deserialize, Serialize};

fn default_points_per_correct() -> u32 {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    /// Points awarded for each correct guess
    #[serde(default = "default_points_per_correct")]
    pub points_per_correct: u32,
}

impl GameConfig {
    pub fn new() -> Self {
        let points_per_correct = env::var("GLOSSA_GAME_POINTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_points_per_correct);

        Self { points_per_correct }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_per_correct: default_points_per_correct(),
        }
    }
}
