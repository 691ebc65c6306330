use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("field '{0}' must be a string, number or boolean")]
    InvalidFieldValue(String),

    #[error("malformed assignment '{0}', expected key=value")]
    MalformedAssignment(String),
}
