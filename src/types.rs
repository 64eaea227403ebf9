// src/types.rs
use crate::error::SymbolError;
use crate::symbols::{classify, LegacySymbol, SymbolKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeReport {
    pub input: String,
    pub token: String,
    pub kind: SymbolKind,
}

impl NormalizeReport {
    pub fn new(input: &str, symbol: &LegacySymbol) -> Self {
        Self {
            input: input.to_string(),
            token: symbol.token(),
            kind: symbol.kind,
        }
    }
}

/// One report per identifier, failing on the first malformed one.
pub fn build_reports<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<NormalizeReport>, SymbolError> {
    symbols
        .iter()
        .map(|input| {
            let input = input.as_ref();
            classify(input).map(|symbol| NormalizeReport::new(input, &symbol))
        })
        .collect()
}
