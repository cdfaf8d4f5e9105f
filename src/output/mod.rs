use std::io::Write;

use crate::quiz::definition::QuizItem;
use crate::quiz::Score;

#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    QuestionBegins(QuizItem),
    AnswerIncorrect(QuizItem),
    FinalScore(Score),
}

pub trait QuizOutput {
    fn say(&mut self, message: &Message);
}

pub struct ConsoleOutput<W> {
    out: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(out: W) -> Self {
        ConsoleOutput { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn interpret_message(message: &Message) -> String {
        use Message::*;
        match message {
            QuestionBegins(item) => format!("{}?", item.question()),
            AnswerIncorrect(item) => format!("Wrong. Correct: {}", item.expected_answer()),
            FinalScore(score) => format!("Your Score: {}", score.correct),
        }
    }
}

impl<W: Write> QuizOutput for ConsoleOutput<W> {
    fn say(&mut self, message: &Message) {
        let text = Self::interpret_message(message);
        let result = writeln!(self.out, "{}", text).and_then(|_| self.out.flush());
        if let Err(e) = result {
            log::warn!("Error writing message: {:?}", e);
        }
    }
}
