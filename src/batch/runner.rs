//! # 批量执行器
//!
//! 顺序执行批量处理任务：一个文件完整读取、改写、写回后才处理下一个。
//!
//! ## 功能
//! - 逐文件调用处理函数
//! - 单个文件失败不影响后续文件
//! - 结果统计（写入 / 未变 / 仅提示 / 失败）
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `batch/report.rs` 的 FileReport

use super::report::{FileReport, FileStatus};

use std::path::{Path, PathBuf};

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 无错误完成的数量
    pub success: usize,
    /// 已写回（或 dry-run 下将写回）的数量
    pub updated: usize,
    /// 无需修改的数量
    pub unchanged: usize,
    /// 含需人工处理调用的数量（与是否写入无关）
    pub flagged: usize,
    /// 失败数量
    pub failed: usize,
    /// 逐文件报告（按处理顺序）
    pub reports: Vec<FileReport>,
}

impl BatchResult {
    /// 合并单个文件结果
    pub fn merge(&mut self, report: FileReport) {
        match report.status {
            FileStatus::Updated | FileStatus::WouldUpdate => {
                self.success += 1;
                self.updated += 1;
            }
            FileStatus::Unchanged => {
                self.success += 1;
                self.unchanged += 1;
            }
            FileStatus::Failed => self.failed += 1,
        }
        if report.is_flagged() {
            self.flagged += 1;
        }
        self.reports.push(report);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    /// 失败详情
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.reports
            .iter()
            .filter(|r| r.status == FileStatus::Failed)
    }
}

/// 批量执行器
#[derive(Default)]
pub struct BatchRunner;

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new() -> Self {
        Self
    }

    /// 顺序处理文件列表
    pub fn run<F>(&self, files: &[PathBuf], mut processor: F) -> BatchResult
    where
        F: FnMut(&Path) -> FileReport,
    {
        let mut batch_result = BatchResult::default();
        for file in files {
            batch_result.merge(processor(file));
        }
        batch_result
    }
}
