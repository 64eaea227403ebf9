// src/symbols/mod.rs
pub mod index_registry;
pub mod legacy_symbol;

pub use index_registry::{index_codes, is_index_code, INDEX_CODES};
pub use legacy_symbol::{
    classify, normalize_all, to_legacy_realtime_symbol, LegacySymbol, SymbolKind,
};
