// src/core/config.rs
use serde::{Deserialize, Serialize};

use crate::models::GenerationConfig;

/// The subset of generator settings a caller persists between sessions,
/// plus its display-mode flag.
///
/// The library only converts to and from this snapshot; reading and
/// writing the actual store belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedSettings {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub dark_mode: bool,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            dark_mode: false,
        }
    }
}

impl PersistedSettings {
    /// Snapshot the persisted fields out of a full config.
    pub fn capture(config: &GenerationConfig, dark_mode: bool) -> Self {
        Self {
            length: config.length,
            include_uppercase: config.include_uppercase,
            include_lowercase: config.include_lowercase,
            include_numbers: config.include_numbers,
            include_symbols: config.include_symbols,
            dark_mode,
        }
    }

    /// Overlay the persisted fields onto a config, leaving everything
    /// else untouched.
    pub fn apply(&self, config: &mut GenerationConfig) {
        config.length = self.length;
        config.include_uppercase = self.include_uppercase;
        config.include_lowercase = self.include_lowercase;
        config.include_numbers = self.include_numbers;
        config.include_symbols = self.include_symbols;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_then_apply_round_trips_the_subset() {
        let original = GenerationConfig {
            length: 32,
            include_numbers: false,
            ..Default::default()
        };

        let settings = PersistedSettings::capture(&original, true);
        assert!(settings.dark_mode);

        let mut restored = GenerationConfig::default();
        settings.apply(&mut restored);
        assert_eq!(restored.length, 32);
        assert!(!restored.include_numbers);
    }

    #[test]
    fn apply_leaves_non_persisted_fields_alone() {
        let settings = PersistedSettings::default();
        let mut config = GenerationConfig {
            exclude_similar: true,
            custom_chars: "@@".to_string(),
            quantity: 7,
            ..Default::default()
        };
        settings.apply(&mut config);
        assert!(config.exclude_similar);
        assert_eq!(config.custom_chars, "@@");
        assert_eq!(config.quantity, 7);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let settings: PersistedSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, PersistedSettings::default());

        let settings: PersistedSettings =
            serde_json::from_str(r#"{"length": 20, "dark_mode": true}"#).unwrap();
        assert_eq!(settings.length, 20);
        assert!(settings.dark_mode);
        assert!(settings.include_symbols);
    }
}
