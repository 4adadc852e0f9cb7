//! # `earnings-feed` - 上游财报日历数据源
//!
//! 基于 `reqwest` 实现 `EarningsFeed` 端口，默认对接 Nasdaq 公开的财报日历接口。

pub mod nasdaq;

pub use nasdaq::NasdaqProvider;
