use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// # Summary
/// 财报日历中的一行，原样透传上游字段。
///
/// # Invariants
/// - `symbol` 是过滤匹配键与前端表格行键，上游缺失时为空字符串。
/// - 其余字段 (`name`、`marketCap`、`time` 等) 不做任何校验，序列化时展开回顶层。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarRow {
    // 股票代码
    #[serde(default, deserialize_with = "lenient_symbol")]
    pub symbol: String,
    // 上游透传字段
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

// 非字符串的 symbol（如 null）按空字符串处理，避免单行脏数据拖垮整批结果
fn lenient_symbol<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// # Summary
/// 上游财报接口的响应信封，行数据位于 `data.rows`。
///
/// # Invariants
/// - 任一层级缺失或为 `null` 都表示"没有数据"，而不是错误。
#[derive(Debug, Default, Deserialize)]
pub struct EarningsEnvelope {
    #[serde(default)]
    pub data: Option<EarningsPayload>,
}

/// 信封内的数据部分
#[derive(Debug, Default, Deserialize)]
pub struct EarningsPayload {
    #[serde(default)]
    pub rows: Option<Vec<CalendarRow>>,
}

impl EarningsEnvelope {
    /// # Summary
    /// 从任意 JSON 中解析信封。
    ///
    /// # Logic
    /// 1. 按 `data.rows` 结构进行强类型反序列化。
    /// 2. 结构不匹配（例如上游改版、字段类型变化）时降级为空信封。
    ///
    /// # Arguments
    /// * `value`: 上游返回的完整 JSON。
    ///
    /// # Returns
    /// 解析后的信封，永不失败。
    pub fn from_value(value: &Value) -> Self {
        match Self::deserialize(value) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!("Upstream envelope shape mismatch, treating as empty: {}", e);
                Self::default()
            }
        }
    }

    /// 取出行数据，缺失时返回空列表
    pub fn into_rows(self) -> Vec<CalendarRow> {
        self.data.and_then(|d| d.rows).unwrap_or_default()
    }
}
