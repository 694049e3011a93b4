//! Raw storage records and their mapping to domain entities.

use crate::persistence::PersistenceError;
use quiz_domain::{Choice, Question, QuestionId};
use serde::{Deserialize, Serialize};

/// Storage shape of a single choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceRecord {
    pub label: String,
    pub text: String,
    pub is_correct: bool,
}

/// Storage shape of a question, as found in seed files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    pub sentence: String,
    pub choices: Vec<ChoiceRecord>,
}

impl QuestionRecord {
    /// Convert this record into a domain entity.
    ///
    /// Fails when the stored id does not pass [`QuestionId`] validation.
    pub fn into_entity(self) -> Result<Question, PersistenceError> {
        let id = QuestionId::new(self.id)?;
        let choices = self
            .choices
            .into_iter()
            .map(|c| Choice::new(c.label, c.text, c.is_correct))
            .collect();
        Ok(Question::new(id, self.sentence, choices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_maps_to_entity() {
        let record = QuestionRecord {
            id: "q1".to_string(),
            sentence: "Test sentence _______.".to_string(),
            choices: vec![
                ChoiceRecord {
                    label: "A".to_string(),
                    text: "Correct".to_string(),
                    is_correct: true,
                },
                ChoiceRecord {
                    label: "B".to_string(),
                    text: "Incorrect".to_string(),
                    is_correct: false,
                },
            ],
        };

        let question = record.into_entity().unwrap();

        assert_eq!(question.id().as_str(), "q1");
        assert_eq!(question.sentence(), "Test sentence _______.");
        assert_eq!(question.choices().len(), 2);
        assert_eq!(question.correct_choice().unwrap().label(), "A");
    }

    #[test]
    fn test_record_with_empty_id_is_invalid() {
        let record = QuestionRecord {
            id: String::new(),
            sentence: "Test".to_string(),
            choices: vec![],
        };

        assert!(matches!(
            record.into_entity().unwrap_err(),
            PersistenceError::InvalidRecord(_)
        ));
    }

    #[test]
    fn test_choice_record_uses_camel_case() {
        let json = r#"{"label":"A","text":"remarkably","isCorrect":true}"#;
        let record: ChoiceRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_correct);
        assert_eq!(
            serde_json::to_value(&record).unwrap()["isCorrect"],
            serde_json::json!(true)
        );
    }
}
