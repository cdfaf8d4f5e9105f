use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod item;
pub mod source;


pub use item::QuizItem;
pub use source::read_source;

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("could not read quiz file {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("quiz file {} is larger than the {limit} byte limit", path.display())]
    SourceTooLarge { path: PathBuf, limit: u64 },

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct QuizDefinition {
    items: Vec<QuizItem>,
}

impl QuizDefinition {
    pub fn open(source: &Path, max_bytes: u64) -> Result<QuizDefinition, DefinitionError> {
        let text = read_source(source, max_bytes)?;
        let definition = QuizDefinition::from_text(&text)?;
        if definition.is_empty() {
            log::warn!("{} contains no questions", source.display());
        }
        log::info!(
            "Loaded {} question(s) from {}",
            definition.len(),
            source.display()
        );
        Ok(definition)
    }

    pub fn from_text(text: &str) -> Result<QuizDefinition, DefinitionError> {
        Ok(QuizDefinition {
            items: parse_items(text)?,
        })
    }

    pub fn get_items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Parses headerless `question,answer[,ignored...]` rows, in file order.
pub fn parse_items(text: &str) -> Result<Vec<QuizItem>, DefinitionError> {
    check_quoting(text)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut items = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| DefinitionError::MalformedRecord {
            line: e.position().map(|p| p.line()).unwrap_or_default(),
            reason: e.to_string(),
        })?;
        items.push(QuizItem::from_record(&record)?);
    }

    Ok(items)
}

enum Field {
    Start,
    Unquoted,
    Quoted { opened_on_line: u64 },
    QuoteInQuoted { opened_on_line: u64 },
}

// The csv tokenizer is lenient about quoting: it accepts quotes that never
// close, text after a closing quote, and quotes inside unquoted fields.
// All three are rejected here before tokenizing.
fn check_quoting(text: &str) -> Result<(), DefinitionError> {
    let malformed = |line: u64, reason: &str| DefinitionError::MalformedRecord {
        line,
        reason: reason.to_owned(),
    };

    let mut line = 1;
    let mut field = Field::Start;

    for c in text.chars() {
        field = match (field, c) {
            (Field::Start, '"') => Field::Quoted {
                opened_on_line: line,
            },
            (Field::Quoted { opened_on_line }, '"') => {
                Field::QuoteInQuoted { opened_on_line }
            }
            (quoted @ Field::Quoted { .. }, _) => quoted,
            // A doubled quote is an escaped literal, so the field is still open.
            (Field::QuoteInQuoted { opened_on_line }, '"') => {
                Field::Quoted { opened_on_line }
            }
            (_, ',') | (_, '\n') | (_, '\r') => Field::Start,
            (Field::QuoteInQuoted { .. }, _) => {
                return Err(malformed(line, "extraneous quote in quoted field"));
            }
            (Field::Unquoted, '"') => {
                return Err(malformed(line, "bare quote in unquoted field"));
            }
            _ => Field::Unquoted,
        };
        if c == '\n' {
            line += 1;
        }
    }

    match field {
        Field::Quoted { opened_on_line } => {
            Err(malformed(opened_on_line, "quoted field is never closed"))
        }
        _ => Ok(()),
    }
}
