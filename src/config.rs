// src/config.rs
use crate::error::SymbolError;
use crate::symbols::normalize_all;
use anyhow::{bail, Result};

#[derive(Clone, Debug)]
pub struct SymbolConfig {
    pub stock_list: Vec<String>,
    pub trim_input: bool,
}

impl SymbolConfig {
    pub fn new(stock_list: Vec<String>, trim_input: bool) -> Self {
        Self {
            stock_list,
            trim_input,
        }
    }

    /// Reads `STOCK_LIST` (comma separated, required) and `SYMBOL_TRIM_INPUT`.
    ///
    /// Trimming stays on unless `SYMBOL_TRIM_INPUT` is one of `false`, `0`,
    /// `no` or `off` (case-insensitive).
    pub fn from_env() -> Result<Self> {
        let trim_input = std::env::var("SYMBOL_TRIM_INPUT")
            .map(|v| is_trim_enabled(&v))
            .unwrap_or(true);
        let raw = std::env::var("STOCK_LIST")?;
        Self::from_list(&raw, trim_input)
    }

    pub fn from_list(raw: &str, trim_input: bool) -> Result<Self> {
        let stock_list = parse_stock_list(raw, trim_input);
        if stock_list.is_empty() {
            bail!("STOCK_LIST contains no symbols");
        }
        Ok(Self::new(stock_list, trim_input))
    }

    /// Legacy endpoint tokens for every configured identifier.
    pub fn legacy_symbols(&self) -> Result<Vec<String>, SymbolError> {
        normalize_all(&self.stock_list)
    }
}

fn is_trim_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

/// Splits a comma separated symbol list, dropping empty entries.
///
/// Trimming happens here and only when asked; the normalizer itself
/// rejects padded identifiers.
pub fn parse_stock_list(raw: &str, trim: bool) -> Vec<String> {
    raw.split(',')
        .map(|entry| if trim { entry.trim() } else { entry })
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stock_list_trims_when_enabled() {
        assert_eq!(
            parse_stock_list(" 600519.SH, sh000001 ,,000001", true),
            vec!["600519.SH", "sh000001", "000001"]
        );
    }

    #[test]
    fn test_parse_stock_list_keeps_padding_when_disabled() {
        assert_eq!(
            parse_stock_list("600519, 000001", false),
            vec!["600519", " 000001"]
        );
    }

    #[test]
    fn test_legacy_symbols() {
        let config = SymbolConfig::from_list("600519.SH, 000001.SH, 000001, SZ399001", true).unwrap();
        assert_eq!(
            config.legacy_symbols().unwrap(),
            vec!["600519", "sh000001", "000001", "sz399001"]
        );
    }

    #[test]
    fn test_untrimmed_padding_surfaces_as_invalid_format() {
        let config = SymbolConfig::from_list("600519, 000001", false).unwrap();
        assert_eq!(
            config.legacy_symbols(),
            Err(SymbolError::InvalidSymbolFormat(" 000001".to_string()))
        );
    }

    #[test]
    fn test_trim_flag_values() {
        for on in ["true", "TRUE", "1", "yes", "On", ""] {
            assert!(is_trim_enabled(on), "expected trimming for {:?}", on);
        }
        for off in ["false", "FALSE", "0", "no", "OFF", " false "] {
            assert!(!is_trim_enabled(off), "expected no trimming for {:?}", off);
        }
    }

    // Environment variables are process-wide, so every env case lives here.
    #[test]
    fn test_from_env() {
        std::env::remove_var("STOCK_LIST");
        std::env::remove_var("SYMBOL_TRIM_INPUT");
        assert!(SymbolConfig::from_env().is_err());

        std::env::set_var("STOCK_LIST", " 600519.SH, 000001.SH ");
        let config = SymbolConfig::from_env().unwrap();
        assert!(config.trim_input);
        assert_eq!(config.stock_list, vec!["600519.SH", "000001.SH"]);
        assert_eq!(config.legacy_symbols().unwrap(), vec!["600519", "sh000001"]);

        std::env::set_var("SYMBOL_TRIM_INPUT", "FALSE");
        let config = SymbolConfig::from_env().unwrap();
        assert!(!config.trim_input);
        assert_eq!(config.stock_list, vec![" 600519.SH", " 000001.SH "]);
        assert!(config.legacy_symbols().is_err());

        std::env::set_var("SYMBOL_TRIM_INPUT", "yes");
        assert!(SymbolConfig::from_env().unwrap().trim_input);

        std::env::remove_var("STOCK_LIST");
        std::env::remove_var("SYMBOL_TRIM_INPUT");
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert!(SymbolConfig::from_list(" , ,", true).is_err());
    }
}
