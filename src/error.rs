// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// Identifier is none of `CODE`, `CODE.EX` or `EXCODE`.
    #[error("Invalid symbol format: {0:?}")]
    InvalidSymbolFormat(String),
}
