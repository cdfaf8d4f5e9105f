use crate::input::{AnswerError, AnswerSource};
use crate::output::{Message, QuizOutput};
use crate::quiz::definition::QuizItem;


#[derive(Debug)]
pub enum Outcome {
    Correct,
    Incorrect(String),
    Unanswered(AnswerError),
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        match self {
            Outcome::Correct => true,
            _ => false,
        }
    }
}

/// Presents one item and grades the reply. Failing to collect an answer is
/// graded like a wrong answer; it never ends the quiz.
pub fn ask<I, O>(item: &QuizItem, input: &mut I, output: &mut O) -> Outcome
where
    I: AnswerSource,
    O: QuizOutput,
{
    output.say(&Message::QuestionBegins(item.clone()));

    let outcome = match input.read_answer() {
        Ok(answer) if item.is_answer_correct(&answer) => Outcome::Correct,
        Ok(answer) => Outcome::Incorrect(answer),
        Err(e) => Outcome::Unanswered(e),
    };

    if !outcome.is_correct() {
        output.say(&Message::AnswerIncorrect(item.clone()));
    }

    outcome
}
