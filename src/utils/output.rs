//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `main.rs` 与 `commands/` 模块使用
//! - 使用 `colored` crate

use crate::rules::{RuleHit, RuleKind};

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印正在处理的文件
pub fn print_processing(path: &str) {
    println!("\n{} {}", "Processing:".green().bold(), path);
}

/// 打印规则命中（文件内的缩进子行）
pub fn print_rule_hit(hit: &RuleHit) {
    match (&hit.replacement, hit.kind) {
        (Some(_), RuleKind::ImportRemoval) => {
            println!("  {}", format!("→ Removing {} x{}", hit.rule, hit.count).yellow());
        }
        (Some(replacement), _) => {
            println!(
                "  {}",
                format!("→ Replacing {} with {} x{}", hit.rule, replacement, hit.count).yellow()
            );
        }
        (None, _) => {
            println!(
                "  {}",
                format!("→ Found DatabaseHandler call: {} x{}", hit.rule, hit.count).red()
            );
            println!("    {}", "TODO: Replace with Provider pattern".blue());
        }
    }
}

/// 打印单个文件的最终状态
pub fn print_file_status(symbol: &str, msg: &str, ok: bool) {
    if ok {
        println!("  {} {}", symbol.green().bold(), msg);
    } else {
        println!("  {} {}", symbol.blue(), msg.dimmed());
    }
}

/// 打印单个文件的错误
pub fn print_file_error(msg: &str) {
    println!("  {} {}", "✗ Error:".red().bold(), msg.red());
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
