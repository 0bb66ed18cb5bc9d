//! # 统一错误处理模块
//!
//! 定义 provider-migrate 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 迁移工具统一错误类型
#[derive(Error, Debug)]
pub enum MigrateError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 规则错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl MigrateError {
    /// 带上底层原因的完整描述（用于逐文件报错）
    pub fn detail(&self) -> String {
        match self {
            MigrateError::FileReadError { source, .. }
            | MigrateError::FileWriteError { source, .. } => format!("{}: {}", self, source),
            _ => self.to_string(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MigrateError>;
