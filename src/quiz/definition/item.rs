use csv::StringRecord;

use super::DefinitionError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuizItem {
    question: String,
    expected_answer: String,
}

impl QuizItem {
    pub fn new<Q: Into<String>, A: Into<String>>(question: Q, expected_answer: A) -> Self {
        QuizItem {
            question: question.into(),
            expected_answer: expected_answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn expected_answer(&self) -> &str {
        &self.expected_answer
    }

    /// Answers must match verbatim, including case and inner whitespace.
    pub fn is_answer_correct(&self, answer: &str) -> bool {
        answer == self.expected_answer
    }

    pub(super) fn from_record(record: &StringRecord) -> Result<Self, DefinitionError> {
        match (record.get(0), record.get(1)) {
            (Some(question), Some(answer)) => Ok(QuizItem::new(question, answer)),
            _ => Err(DefinitionError::MalformedRecord {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                reason: format!(
                    "expected a question and an answer, found {} field(s)",
                    record.len()
                ),
            }),
        }
    }
}
