// src/export.rs
use serde::Serialize;
use thiserror::Error;

use crate::analyzer;
use crate::models::GeneratedPassword;
use crate::utils::format_timestamp;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Formats offered to the export collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Txt,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "txt" => Ok(ExportFormat::Txt),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

// One row of the structured export.
#[derive(Serialize)]
struct ExportRecord<'a> {
    value: &'a str,
    level: String,
    created_at: String,
}

/// Render a batch with each entry's strength level, in generation order.
///
/// `Txt` emits one `<value> (<level>) - <timestamp>` line per entry;
/// `Json` emits a structured array of the same records. Levels are
/// re-derived from the values at render time, never stored. Writing the
/// artifact anywhere is the caller's business.
pub fn render_batch(batch: &[GeneratedPassword], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Txt => {
            let lines: Vec<String> = batch
                .iter()
                .map(|p| {
                    let analysis = analyzer::analyze(&p.value);
                    format!(
                        "{} ({}) - {}",
                        p.value,
                        analysis.level,
                        format_timestamp(p.created_at)
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
        ExportFormat::Json => {
            let records: Vec<ExportRecord<'_>> = batch
                .iter()
                .map(|p| {
                    let analysis = analyzer::analyze(&p.value);
                    ExportRecord {
                        value: &p.value,
                        level: analysis.level.to_string(),
                        created_at: format_timestamp(p.created_at),
                    }
                })
                .collect();
            Ok(serde_json::to_string_pretty(&records)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn fixed_entry(value: &str) -> GeneratedPassword {
        GeneratedPassword {
            id: Uuid::new_v4(),
            value: value.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn txt_renders_one_line_per_entry_in_order() {
        let batch = vec![fixed_entry("abcdefghijkl"), fixed_entry("aB3!aB3!aB3!")];
        let rendered = render_batch(&batch, ExportFormat::Txt).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "abcdefghijkl (Medium) - 2024-05-01 12:30:00");
        assert_eq!(lines[1], "aB3!aB3!aB3! (Excellent) - 2024-05-01 12:30:00");
    }

    #[test]
    fn txt_of_empty_batch_is_empty() {
        assert_eq!(render_batch(&[], ExportFormat::Txt).unwrap(), "");
    }

    #[test]
    fn json_parses_back_to_the_same_records() {
        let batch = vec![fixed_entry("abcdefghijkl")];
        let rendered = render_batch(&batch, ExportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["value"], "abcdefghijkl");
        assert_eq!(records[0]["level"], "Medium");
        assert_eq!(records[0]["created_at"], "2024-05-01 12:30:00");
    }

    #[test]
    fn format_parses_from_strings() {
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("csv".parse::<ExportFormat>().is_err());
    }
}
