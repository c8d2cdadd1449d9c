use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrenchError {
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for FrenchError {
    fn from(error: std::io::Error) -> Self {
        FrenchError::Io(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, FrenchError>;
