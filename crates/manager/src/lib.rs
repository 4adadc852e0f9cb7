//! # `earnings-manager` - 应用服务层
//!
//! - [`filter::FilterStore`]：过滤器注册表，负责唯一性约束与"变更即整体落盘"。
//! - [`calendar::CalendarService`]：按日期与过滤器名称查询财报日历。
//!
//! 两者都只依赖 `earnings-core` 中的端口，具体实现由 `app` 注入。

pub mod calendar;
pub mod filter;
