// src/utils/format.rs
use chrono::{DateTime, Utc};

// Render a timestamp the way exports and console output show it
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

// Mask a password for log output, keeping only the outer characters
pub fn mask_secret(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    format!(
        "{}{}{}",
        chars[0],
        "*".repeat(chars.len() - 2),
        chars[chars.len() - 1]
    )
}
