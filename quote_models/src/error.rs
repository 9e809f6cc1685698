use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ModelResult<T> = error_stack::Result<T, Error>;

#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Error {
    #[error("Parse error")]
    ParseError,

    #[error("Reqwest error: {0}")]
    ReqwestError(String),

    #[error("Serde deserialize error: {0}")]
    SerdeDeserialize(String),

    #[error("Response status {status}: {body}")]
    ResponseStatus { status: u16, body: String },
}
