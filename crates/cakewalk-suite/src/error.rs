use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Browser(#[from] cakewalk_browser::Error),

    #[error("Check failed: {0}")]
    Check(String),

    #[error("Malformed lesson card text: expected 4 lines, got {0}")]
    LessonCardShape(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
