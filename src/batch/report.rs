//! # 逐文件报告
//!
//! 记录每个文件的处理状态，并可导出为 CSV。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 与 `commands/run.rs` 使用
//! - 使用 `serde` + `csv` 写入报告

use crate::error::{MigrateError, Result};

use serde::Serialize;
use std::path::{Path, PathBuf};

/// 文件处理状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// 已写回
    Updated,
    /// dry-run：内容有变化但未写入
    WouldUpdate,
    /// 无需修改
    Unchanged,
    /// 读取 / 解码 / 写入失败
    Failed,
}

/// 单个文件的处理报告
#[derive(Debug, Clone)]
pub struct FileReport {
    /// 文件路径
    pub path: PathBuf,
    /// 状态
    pub status: FileStatus,
    /// 改写了文本的规则
    pub applied: Vec<String>,
    /// 仅提示的规则（需人工重构）
    pub advisories: Vec<String>,
    /// 错误描述
    pub error: Option<String>,
}

impl FileReport {
    /// 失败报告
    pub fn failed(path: &Path, error: &MigrateError) -> Self {
        Self {
            path: path.to_path_buf(),
            status: FileStatus::Failed,
            applied: vec![],
            advisories: vec![],
            error: Some(error.detail()),
        }
    }

    /// 是否含需人工处理的调用
    pub fn is_flagged(&self) -> bool {
        !self.advisories.is_empty()
    }
}

/// CSV 行
#[derive(Serialize)]
struct ReportRow<'a> {
    path: String,
    status: FileStatus,
    applied: String,
    advisories: String,
    error: &'a str,
}

/// 导出逐文件报告为 CSV
pub fn to_csv(reports: &[FileReport], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for report in reports {
        wtr.serialize(ReportRow {
            path: report.path.display().to_string(),
            status: report.status,
            applied: report.applied.join("; "),
            advisories: report.advisories.join("; "),
            error: report.error.as_deref().unwrap_or(""),
        })?;
    }

    wtr.flush().map_err(|e| MigrateError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
