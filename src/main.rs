//! # provider-migrate - SQLite → API + Provider 迁移助手
//!
//! 扫描 Flutter 工程源码，按固定顺序应用正则重写规则，
//! 把本地 `DatabaseHandler` 访问方式迁移到远程 API + Provider 模式。
//!
//! ## 子命令
//! - `run`   - 扫描并改写源文件（默认）
//! - `rules` - 列出内置规则
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── rules/     (重写规则与引擎)
//!   │     ├── batch/     (文件收集、顺序执行、报告)
//!   │     └── models/    (文件记录)
//!   ├── utils/      (输出工具)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod rules;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = commands::run(cli.command_or_default()) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
