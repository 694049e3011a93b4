//! Seed data loading.
//!
//! Seed files are JSON arrays of [`QuestionRecord`]s. The built-in sample
//! set mirrors the original development fixtures so the server can run
//! without any external data.

use crate::persistence::record::{ChoiceRecord, QuestionRecord};
use crate::persistence::PersistenceError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load question records from a JSON seed file.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<QuestionRecord>, PersistenceError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let records: Vec<QuestionRecord> = serde_json::from_str(&raw)?;
    info!("loaded {} questions from {}", records.len(), path.display());
    Ok(records)
}

/// Built-in sample questions for development and tests.
pub fn sample_records() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord {
            id: "q1".to_string(),
            sentence: "The new marketing campaign has been _______ successful.".to_string(),
            choices: vec![
                choice("A", "remarkably", true),
                choice("B", "remarked", false),
                choice("C", "remarkable", false),
                choice("D", "remarking", false),
            ],
        },
        QuestionRecord {
            id: "q2".to_string(),
            sentence: "All employees must wear their identification badges _______ all times."
                .to_string(),
            choices: vec![
                choice("A", "at", true),
                choice("B", "in", false),
                choice("C", "on", false),
                choice("D", "by", false),
            ],
        },
    ]
}

fn choice(label: &str, text: &str, is_correct: bool) -> ChoiceRecord {
    ChoiceRecord {
        label: label.to_string(),
        text: text.to_string(),
        is_correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_records_each_have_one_correct_choice() {
        for record in sample_records() {
            let correct = record.choices.iter().filter(|c| c.is_correct).count();
            assert_eq!(correct, 1, "question {} is malformed", record.id);
        }
    }

    #[test]
    fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_records()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let records = load_seed_file(file.path()).unwrap();

        assert_eq!(records, sample_records());
    }

    #[test]
    fn test_load_seed_file_missing_path() {
        let result = load_seed_file("/nonexistent/questions.json");
        assert!(matches!(result.unwrap_err(), PersistenceError::Io(_)));
    }

    #[test]
    fn test_load_seed_file_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let result = load_seed_file(file.path());
        assert!(matches!(result.unwrap_err(), PersistenceError::Json(_)));
    }
}
