use std::env;

use serde::{Deserialize, Serialize};

fn default_fallback_path() -> String {
    "dictionary_2024S1.txt".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// File the menu falls back to when an explicit load fails
    #[serde(default = "default_fallback_path")]
    pub fallback_path: String,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let fallback_path =
            env::var("GLOSSA_FALLBACK_DICT").unwrap_or_else(|_| default_fallback_path());

        Self { fallback_path }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            fallback_path: default_fallback_path(),
        }
    }
}
