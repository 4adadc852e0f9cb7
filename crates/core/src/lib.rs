//! # `earnings-core` - 领域核心
//!
//! 定义财报日历系统的实体、端口 (Trait) 与错误类型，不包含任何具体的 IO 实现。
//! 基础设施 crate (`store`、`feed`、`catalog`) 实现这里的端口，
//! 应用层 (`manager`) 只依赖这里的抽象。

pub mod calendar;
pub mod catalog;
pub mod common;
pub mod config;
pub mod filter;
pub mod store;

#[cfg(feature = "test-utils")]
pub mod test_utils;
