//! # 批量处理模块
//!
//! 提供统一的文件批量处理能力。
//!
//! ## 功能
//! - 按扩展名收集文件列表
//! - 顺序处理
//! - 逐文件报告与统计
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `walkdir` 收集文件，`csv` 导出报告

pub mod collector;
pub mod report;
pub mod runner;

pub use collector::FileCollector;
pub use report::{FileReport, FileStatus};
pub use runner::{BatchResult, BatchRunner};
