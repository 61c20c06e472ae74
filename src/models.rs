// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::charset::CharClass;

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub quantity: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Characters appended to the alphabet verbatim, duplicates and all.
    pub custom_chars: String,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
    /// Caller-specified characters removed from the alphabet.
    pub exclude_chars: String,
    /// Force at least one character from every enabled class.
    pub must_include_each: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            quantity: 1,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            custom_chars: String::new(),
            exclude_similar: false,
            exclude_ambiguous: false,
            exclude_chars: String::new(),
            must_include_each: true,
        }
    }
}

impl GenerationConfig {
    /// Enabled character classes in canonical order.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        let mut classes = Vec::with_capacity(4);
        if self.include_lowercase {
            classes.push(CharClass::Lowercase);
        }
        if self.include_uppercase {
            classes.push(CharClass::Uppercase);
        }
        if self.include_numbers {
            classes.push(CharClass::Numbers);
        }
        if self.include_symbols {
            classes.push(CharClass::Special);
        }
        classes
    }
}

/// One generated password. Immutable once created; the v4 id keeps entries
/// distinct even when a whole batch is stamped in the same instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub id: Uuid,
    pub value: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    Excellent,
}

impl StrengthLevel {
    /// Classify a 0-100 score. Tier boundaries are inclusive on the lower
    /// bound.
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            StrengthLevel::Excellent
        } else if score >= 75 {
            StrengthLevel::Strong
        } else if score >= 50 {
            StrengthLevel::Medium
        } else if score >= 25 {
            StrengthLevel::Weak
        } else {
            StrengthLevel::VeryWeak
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLevel::VeryWeak => write!(f, "Very Weak"),
            StrengthLevel::Weak => write!(f, "Weak"),
            StrengthLevel::Medium => write!(f, "Medium"),
            StrengthLevel::Strong => write!(f, "Strong"),
            StrengthLevel::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Result of scoring a single password. Derived purely from the password's
/// content; holds no reference to the password itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthAnalysis {
    pub score: u8,
    pub level: StrengthLevel,
    pub feedback: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_initial_ui_state() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 16);
        assert_eq!(config.quantity, 1);
        assert!(config.must_include_each);
        assert_eq!(config.enabled_classes().len(), 4);
    }

    #[test]
    fn enabled_classes_keep_canonical_order() {
        let config = GenerationConfig {
            include_lowercase: false,
            ..Default::default()
        };
        assert_eq!(
            config.enabled_classes(),
            vec![CharClass::Uppercase, CharClass::Numbers, CharClass::Special]
        );
    }

    #[test]
    fn level_boundaries_are_inclusive() {
        assert_eq!(StrengthLevel::from_score(90), StrengthLevel::Excellent);
        assert_eq!(StrengthLevel::from_score(89), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(75), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(74), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(50), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(49), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(25), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(24), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::VeryWeak);
    }
}
