use super::error::FilterError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// # Summary
/// 自定义过滤器实体：一个带名字的股票代码集合。
///
/// # Invariants
/// - `name` 非空，并在所有已存储过滤器中唯一（区分大小写的精确匹配）。
/// - `symbols` 非空且无重复，保留用户录入顺序用于展示。
/// - 创建后不可修改，只能删除后重建。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    // 过滤器名称
    pub name: String,
    // 关注的股票代码
    pub symbols: Vec<String>,
}

impl Filter {
    /// # Summary
    /// 校验并构造过滤器。
    ///
    /// # Logic
    /// 1. 名称去除首尾空白后不能为空。
    /// 2. 逐个修剪股票代码，丢弃空白项。
    /// 3. 按首次出现的顺序去重。
    /// 4. 去重后的集合不能为空。
    ///
    /// # Arguments
    /// * `name`: 过滤器名称。
    /// * `symbols`: 用户选择的股票代码。
    ///
    /// # Returns
    /// 成功返回过滤器，校验失败返回 `FilterError::Validation`。
    pub fn new<I, S>(name: impl Into<String>, symbols: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(FilterError::Validation("请输入过滤器名称".to_string()));
        }

        let mut seen = HashSet::new();
        let symbols: Vec<String> = symbols
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.clone()))
            .collect();

        if symbols.is_empty() {
            return Err(FilterError::Validation("请选择关注的股票".to_string()));
        }

        Ok(Self { name, symbols })
    }

    /// 判断代码是否属于该过滤器（精确匹配）
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }
}
