pub mod time;

use chrono::NaiveDate;

/// 上游接口与 HTTP 查询参数统一使用的日期格式 (`YYYY-MM-DD`)。
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// # Summary
/// 将日期格式化为线上传输格式。
///
/// # Arguments
/// * `date`: 目标日期。
///
/// # Returns
/// 形如 `2024-03-01` 的字符串。
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// # Summary
/// 解析 `YYYY-MM-DD` 格式的日期字符串。
///
/// # Logic
/// 1. 去除首尾空白。
/// 2. 按 `DATE_FORMAT` 严格解析。
///
/// # Returns
/// 成功返回日期，失败返回可直接展示给用户的错误描述。
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| format!("Invalid date '{}', expected YYYY-MM-DD: {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_date(date), "2024-03-01");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2024-03-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(parse_date("03/01/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }
}
