//! # `earnings-catalog` - 股票代码清单
//!
//! 启动时从随包分发的 CSV 文件读取一次 `Symbol` 列，供前端创建过滤器时选择。
//! 加载后不可变。

use earnings_core::catalog::error::CatalogError;
use std::io::Read;
use std::path::Path;

/// 清单文件中股票代码所在列的表头
pub const SYMBOL_COLUMN: &str = "Symbol";

/// # Summary
/// 已加载的股票代码清单。
///
/// # Invariants
/// - 保持文件中的行顺序，不去重。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolCatalog {
    symbols: Vec<String>,
}

impl SymbolCatalog {
    /// # Summary
    /// 从 CSV 文件加载清单。
    ///
    /// # Arguments
    /// * `path`: CSV 文件路径。
    ///
    /// # Returns
    /// 成功返回清单；文件不可读返回 `CatalogError::Io`，其余见 `from_reader`。
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_reader(file)?;
        tracing::info!("Loaded {} symbols from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// # Summary
    /// 从任意字节流解析清单。
    ///
    /// # Logic
    /// 1. 读取表头并定位 `Symbol` 列（区分大小写）。
    /// 2. 逐行取出该列的值并去除首尾空白。
    /// 3. 列数与表头不一致的行视为格式错误。
    ///
    /// # Returns
    /// 缺少 `Symbol` 列返回 `CatalogError::MissingColumn`，记录无法解析返回 `CatalogError::Malformed`。
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let column = reader
            .headers()
            .map_err(|e| CatalogError::Malformed(e.to_string()))?
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}') == SYMBOL_COLUMN)
            .ok_or_else(|| CatalogError::MissingColumn(SYMBOL_COLUMN.to_string()))?;

        let mut symbols = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| CatalogError::Malformed(e.to_string()))?;
            let symbol = record.get(column).ok_or_else(|| {
                CatalogError::Malformed(format!("record {:?} has no symbol field", record.position()))
            })?;
            symbols.push(symbol.to_string());
        }

        Ok(Self { symbols })
    }

    /// 空清单，加载失败时使用
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<Vec<String>> for SymbolCatalog {
    fn from(symbols: Vec<String>) -> Self {
        Self { symbols }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_symbol_column_in_file_order() {
        let data = "Symbol,Name,Market Cap\nAAPL,Apple Inc.,2800\nMSFT,Microsoft,3000\nGOOG,Alphabet,1700\n";
        let catalog = SymbolCatalog::from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.symbols(), ["AAPL", "MSFT", "GOOG"]);
    }

    #[test]
    fn test_column_position_does_not_matter() {
        let data = "Name,Symbol\n\"Apple, Inc.\",AAPL\nMicrosoft, MSFT \n";
        let catalog = SymbolCatalog::from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.symbols(), ["AAPL", "MSFT"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let data = "Symbol\nAAPL\nAAPL\n";
        let catalog = SymbolCatalog::from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_missing_symbol_column() {
        let data = "Ticker,Name\nAAPL,Apple\n";
        let err = SymbolCatalog::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn(ref c) if c == "Symbol"));
    }

    #[test]
    fn test_header_is_case_sensitive() {
        let data = "symbol\nAAPL\n";
        assert!(SymbolCatalog::from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_ragged_record_is_malformed() {
        let data = "Symbol,Name\nAAPL,Apple\nMSFT\n";
        let err = SymbolCatalog::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_byte_order_mark_header() {
        let data = "\u{feff}Symbol,Name\nAAPL,Apple\n";
        let catalog = SymbolCatalog::from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.symbols(), ["AAPL"]);
    }
}
