use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::game::GameConfig;

pub mod dictionary;
pub mod game;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub game: GameConfig,
}

impl Config {
    /// Build a config from the environment, falling back to defaults for
    /// anything unset.
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            game: GameConfig::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_dictionary() {
        let config = Config::default();
        assert_eq!(config.dictionary.fallback_path, "dictionary_2024S1.txt");
        assert_eq!(config.game.points_per_correct, 10);
    }
}
