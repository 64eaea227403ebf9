// src/symbols/legacy_symbol.rs

use crate::error::SymbolError;
use crate::symbols::index_registry::is_index_code;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static SUFFIX_REGEX: OnceLock<Regex> = OnceLock::new();
static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
static BARE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Whether a legacy token addresses an index or a single equity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Index,
    Equity,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Index => write!(f, "index"),
            SymbolKind::Equity => write!(f, "equity"),
        }
    }
}

/// A classified identifier, ready to be rendered as a legacy endpoint token.
///
/// `exchange` is only kept for indices; equities are addressed by bare code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegacySymbol {
    pub code: String,
    pub exchange: Option<String>,
    pub kind: SymbolKind,
}

impl LegacySymbol {
    fn equity(code: &str) -> Self {
        Self {
            code: code.to_string(),
            exchange: None,
            kind: SymbolKind::Equity,
        }
    }

    /// Applies the registry only when an explicit exchange tag was given.
    fn with_exchange(code: &str, exchange: &str) -> Self {
        if is_index_code(code) {
            Self {
                code: code.to_string(),
                exchange: Some(exchange.to_ascii_lowercase()),
                kind: SymbolKind::Index,
            }
        } else {
            Self::equity(code)
        }
    }

    pub fn is_index(&self) -> bool {
        self.kind == SymbolKind::Index
    }

    /// The exact token the legacy real-time endpoint expects.
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LegacySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(exchange) = &self.exchange {
            write!(f, "{}", exchange)?;
        }
        write!(f, "{}", self.code)
    }
}

impl FromStr for LegacySymbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        classify(s)
    }
}

/// Classifies `identifier` as index or equity.
///
/// Accepted shapes, checked in order:
///
/// * `600519.SH` / `000001.sz` - dotted exchange suffix
/// * `sh000001` / `SZ399001` - exchange prefix without separator
/// * `000001` - bare code, always an equity
///
/// Index status requires both an explicit exchange tag and a registered
/// index code. Input is not trimmed.
pub fn classify(identifier: &str) -> Result<LegacySymbol, SymbolError> {
    let suffix_regex = SUFFIX_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{6})\.([A-Za-z]{2})$").unwrap()
    });
    let prefix_regex = PREFIX_REGEX.get_or_init(|| {
        Regex::new(r"^([A-Za-z]{2})([0-9]{6})$").unwrap()
    });
    let bare_regex = BARE_REGEX.get_or_init(|| Regex::new(r"^[0-9]{6}$").unwrap());

    let symbol = if let Some(caps) = suffix_regex.captures(identifier) {
        LegacySymbol::with_exchange(&caps[1], &caps[2])
    } else if let Some(caps) = prefix_regex.captures(identifier) {
        LegacySymbol::with_exchange(&caps[2], &caps[1])
    } else if bare_regex.is_match(identifier) {
        LegacySymbol::equity(identifier)
    } else {
        log::warn!("Rejected symbol identifier {:?}", identifier);
        return Err(SymbolError::InvalidSymbolFormat(identifier.to_string()));
    };

    log::debug!("Classified {} as {} -> {}", identifier, symbol.kind, symbol);
    Ok(symbol)
}

/// Converts an identifier into the legacy real-time endpoint token.
///
/// Equities come back as six digits, indices as a lowercase two-letter
/// exchange followed by six digits. A bare code never becomes an index
/// token, even when it matches a registered index code.
pub fn to_legacy_realtime_symbol(identifier: &str) -> Result<String, SymbolError> {
    classify(identifier).map(|symbol| symbol.token())
}

/// Normalizes every identifier, stopping at the first malformed one.
pub fn normalize_all<I, S>(identifiers: I) -> Result<Vec<String>, SymbolError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    identifiers
        .into_iter()
        .map(|id| to_legacy_realtime_symbol(id.as_ref()))
        .collect()
}
