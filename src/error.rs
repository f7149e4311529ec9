use crate::widget::ElementId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing required option: {0}")]
    MissingRequiredOption(&'static str),

    #[error("no tooltip constructed for element {0}")]
    NotConstructed(ElementId),

    #[error("operation '{0}' does not exist")]
    UnknownOperation(String),

    #[error("element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
