//! # `earnings-store` - 持久化适配器
//!
//! 为 `FilterRepository` 端口提供 SQLite 与内存两种实现。

pub mod filter;
pub mod memory;

pub use filter::SqliteFilterRepository;
pub use memory::MemoryFilterRepository;
