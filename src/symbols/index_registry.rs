// src/symbols/index_registry.rs

use std::collections::HashSet;

/// Six-digit codes that denote market indices rather than single equities.
/// Kept in ascending order.
pub const INDEX_CODES: &[&str] = &[
    "000001", // SSE Composite
    "000002", // SSE A-share
    "000003", // SSE B-share
    "000016", // SSE 50
    "000300", // CSI 300
    "000688", // STAR 50
    "000852", // CSI 1000
    "000905", // CSI 500
    "399001", // SZSE Component
    "399005", // SZSE SME 100
    "399006", // ChiNext
    "399300", // CSI 300 (Shenzhen listing)
    "399330", // SZSE 100
];

lazy_static::lazy_static! {
    static ref INDEX_CODE_SET: HashSet<&'static str> = INDEX_CODES.iter().copied().collect();
}

/// Returns true when `code` is a registered index code.
///
/// Membership alone never turns a bare code into an index symbol; callers
/// only consult this once an explicit exchange marker is present.
pub fn is_index_code(code: &str) -> bool {
    INDEX_CODE_SET.contains(code)
}

/// Registered index codes in ascending order.
pub fn index_codes() -> impl Iterator<Item = &'static str> {
    INDEX_CODES.iter().copied()
}
