// src/lib.rs
pub mod config;
pub mod error;
pub mod symbols;
pub mod types;

// Optional re-exports
pub use config::SymbolConfig;
pub use error::SymbolError;
pub use symbols::{
    classify, is_index_code, normalize_all, to_legacy_realtime_symbol, LegacySymbol, SymbolKind,
};
pub use types::{build_reports, NormalizeReport};
