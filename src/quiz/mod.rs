use self::definition::QuizDefinition;
use self::question::Outcome;
use crate::input::AnswerSource;
use crate::output::{Message, QuizOutput};

pub mod definition;
mod question;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

/// A quiz that has not started yet. Running it consumes the quiz, so every
/// session produces exactly one score.
pub struct Quiz<I, O> {
    definition: QuizDefinition,
    input: I,
    output: O,
}

impl<I: AnswerSource, O: QuizOutput> Quiz<I, O> {
    pub fn new(definition: QuizDefinition, input: I, output: O) -> Quiz<I, O> {
        log::info!("Entering quiz phase: Idle");
        Quiz {
            definition,
            input,
            output,
        }
    }

    pub fn run(self) -> Score {
        let Quiz {
            definition,
            mut input,
            mut output,
        } = self;

        let total = definition.len();
        log::info!("Entering quiz phase: Running ({} questions)", total);

        let correct = definition.get_items().iter().fold(0, |correct, item| {
            match question::ask(item, &mut input, &mut output) {
                Outcome::Correct => correct + 1,
                Outcome::Incorrect(answer) => {
                    log::debug!("Wrong answer {:?} to {:?}", answer, item.question());
                    correct
                }
                Outcome::Unanswered(e) => {
                    log::warn!("No answer to {:?}: {}", item.question(), e);
                    correct
                }
            }
        });

        let score = Score { correct, total };
        log::info!(
            "Entering quiz phase: Completed ({}/{})",
            score.correct,
            score.total
        );
        output.say(&Message::FinalScore(score));
        score
    }
}
