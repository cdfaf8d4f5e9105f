use std::path::PathBuf;

pub const DEFAULT_QUIZ_PATH: &'static str = "problems.csv";

#[derive(Debug)]
pub struct Settings {
    pub quiz_path: PathBuf,
    pub max_source_bytes: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            quiz_path: PathBuf::from(DEFAULT_QUIZ_PATH),
            max_source_bytes: 1024 * 1024,
        }
    }
}
