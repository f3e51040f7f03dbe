use thiserror::Error;

pub type Result<T> = std::result::Result<T, ComplexError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComplexError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Division by zero")]
    DivisionByZero,
}

impl ComplexError {
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        ComplexError::InvalidParameter(message.into())
    }
}
