use thiserror::Error;

pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("invalid digit: {0} (expected 0..=9)")]
    InvalidDigit(u8),

    #[error("unknown command token: `{0}`")]
    UnknownCommand(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
