//! # run 子命令 CLI 定义
//!
//! 扫描源文件并应用迁移规则
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Root directory to scan recursively
    #[arg(long, default_value = "lib")]
    pub root: PathBuf,

    /// File extension to process (with or without the leading dot)
    #[arg(long, default_value = "dart")]
    pub ext: String,

    /// Report what would change without writing any file
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Also write a per-file CSV report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("lib"),
            ext: "dart".to_string(),
            dry_run: false,
            report: None,
        }
    }
}
