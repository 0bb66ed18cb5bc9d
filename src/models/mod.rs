//! # 数据模型模块
//!
//! 定义迁移过程中的文件记录。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: file_record

pub mod file_record;

pub use file_record::FileRecord;
