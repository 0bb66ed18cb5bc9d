//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `run`: 扫描并改写源文件（无子命令时的默认行为）
//! - `rules`: 列出内置重写规则
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run

pub mod run;

use clap::{Parser, Subcommand};

/// provider-migrate - SQLite DatabaseHandler → API + Provider 迁移助手
#[derive(Parser, Debug)]
#[command(name = "provider-migrate")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Regex-driven helper for migrating a Flutter codebase from DatabaseHandler to API + Provider",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 可用的子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan source files and apply the migration rules (default)
    Run(run::RunArgs),

    /// List the built-in rewrite rules in application order
    Rules,
}

impl Cli {
    /// 无子命令时等价于使用默认参数的 `run`
    pub fn command_or_default(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Run(run::RunArgs::default()))
    }
}
