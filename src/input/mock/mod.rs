use std::collections::VecDeque;

use crate::input::{AnswerError, AnswerSource};

/// Replays scripted answers, then reports closed input.
pub struct MockAnswerSource {
    answers: VecDeque<Result<String, AnswerError>>,
}

impl MockAnswerSource {
    pub fn new() -> Self {
        MockAnswerSource {
            answers: VecDeque::new(),
        }
    }

    pub fn answer(mut self, answer: &str) -> Self {
        self.answers.push_back(Ok(answer.to_owned()));
        self
    }

    pub fn fail(mut self, error: AnswerError) -> Self {
        self.answers.push_back(Err(error));
        self
    }
}

impl AnswerSource for MockAnswerSource {
    fn read_answer(&mut self) -> Result<String, AnswerError> {
        self.answers.pop_front().unwrap_or(Err(AnswerError::Closed))
    }
}

