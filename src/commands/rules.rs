//! # rules 命令实现
//!
//! 以表格形式列出内置重写规则。
//!
//! ## 依赖关系
//! - 使用 `rules/` 的 RuleSet
//! - 使用 `tabled` 渲染表格

use crate::error::Result;
use crate::rules::{RuleAction, RuleSet};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 规则表行
#[derive(Debug, Clone, Tabled)]
struct RuleRow {
    #[tabled(rename = "#")]
    order: usize,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Pattern")]
    pattern: String,
    #[tabled(rename = "Action")]
    action: String,
}

/// 执行 rules 命令
pub fn execute() -> Result<()> {
    output::print_header("Built-in Migration Rules");

    let rules = RuleSet::builtin()?;
    println!("{}", Table::new(rule_rows(&rules)));

    output::print_info("Rules are applied top to bottom; advisory rules never modify files.");
    Ok(())
}

fn rule_rows(rules: &RuleSet) -> Vec<RuleRow> {
    rules
        .rules()
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleRow {
            order: i + 1,
            kind: rule.kind.label(),
            pattern: rule.pattern.as_str().to_string(),
            action: match &rule.action {
                RuleAction::Replace(replacement) => format!("→ {}", replacement),
                RuleAction::Advise => "report only (manual refactor)".to_string(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_rows() {
        let rows = rule_rows(&RuleSet::builtin().unwrap());
        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0].order, 1);
        assert_eq!(rows[0].kind, "import");
        assert_eq!(rows[1].action, "→ ApiService()");
        assert_eq!(rows[12].kind, "advisory");
        assert_eq!(rows[12].action, "report only (manual refactor)");
    }
}
