//! Errors raised by the terminal front end.
//!
//! Calculation failures pass through unchanged as [`CalcError`]; the rest
//! come from talking to the terminal.

use std::io;

use headloss_core::{CalcError, ValidationError};
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    /// stdin closed while a value was still being asked for
    #[error("Input ended before every value was entered")]
    InputClosed,
}

impl CliError {
    /// The core error, if this came from the calculator
    pub fn calc(&self) -> Option<&CalcError> {
        match self {
            CliError::Calc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(e: ValidationError) -> Self {
        CliError::Calc(e.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Calc(e.into())
    }
}
