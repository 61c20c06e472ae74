// src/analyzer.rs
use std::collections::HashSet;

use crate::models::{StrengthAnalysis, StrengthLevel};

const VARIETY_THRESHOLD: f64 = 0.7;

/// Score a password and collect improvement hints.
///
/// Each criterion contributes its bonus independently and emits a hint
/// exactly when the bonus is missed. The maximum attainable score is 100.
/// Pure function of the password's content.
pub fn analyze(password: &str) -> StrengthAnalysis {
    let mut score: u8 = 0;
    let mut feedback = Vec::new();

    let length = password.chars().count();

    // The two length tiers are mutually exclusive; below eight characters
    // neither applies.
    if length >= 12 {
        score += 25;
    } else if length >= 8 {
        score += 15;
    } else {
        feedback.push("Too short".to_string());
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 15;
    } else {
        feedback.push("Add lowercase".to_string());
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 15;
    } else {
        feedback.push("Add uppercase".to_string());
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15;
    } else {
        feedback.push("Add numbers".to_string());
    }

    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 20;
    } else {
        feedback.push("Add symbols".to_string());
    }

    // Distinct-character ratio. An empty password has no ratio and earns
    // no bonus.
    let distinct = password.chars().collect::<HashSet<_>>().len();
    if length > 0 && distinct as f64 / length as f64 > VARIETY_THRESHOLD {
        score += 10;
    } else {
        feedback.push("More variety needed".to_string());
    }

    StrengthAnalysis {
        score,
        level: StrengthLevel::from_score(score),
        feedback,
    }
}
