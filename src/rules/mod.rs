//! # 重写规则模块
//!
//! 定义重写规则 (pattern → replacement / 仅提示) 以及按序应用规则的引擎。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `regex` crate
//! - 子模块: builtin, engine

pub mod builtin;
pub mod engine;

pub use engine::{RuleHit, RuleSet};

use crate::error::{MigrateError, Result};
use regex::Regex;

/// 规则类别（决定控制台输出颜色与汇总方式）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// 删除本地数据库 import
    ImportRemoval,
    /// 单例访问改为构造调用
    Singleton,
    /// Provider 方法重命名
    MethodRename,
    /// 数据访问层调用（仅提示）
    DataAccess,
}

impl RuleKind {
    /// 显示名称
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::ImportRemoval => "import",
            RuleKind::Singleton => "singleton",
            RuleKind::MethodRename => "rename",
            RuleKind::DataAccess => "advisory",
        }
    }
}

/// 规则动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleAction {
    /// 以字面文本替换全部匹配
    Replace(String),
    /// 只报告，不修改内容
    Advise,
}

/// 单条重写规则
#[derive(Debug, Clone)]
pub struct RewriteRule {
    /// 规则名称
    pub name: String,
    /// 类别
    pub kind: RuleKind,
    /// 触发模式
    pub pattern: Regex,
    /// 动作
    pub action: RuleAction,
}

impl RewriteRule {
    /// 创建替换规则
    pub fn replace(name: &str, kind: RuleKind, pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            kind,
            pattern: compile(name, pattern)?,
            action: RuleAction::Replace(replacement.to_string()),
        })
    }

    /// 创建仅提示规则
    pub fn advise(name: &str, kind: RuleKind, pattern: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            kind,
            pattern: compile(name, pattern)?,
            action: RuleAction::Advise,
        })
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| MigrateError::InvalidPattern {
        rule: name.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_rule_keeps_literal_replacement() {
        let rule = RewriteRule::replace(
            "single",
            RuleKind::Singleton,
            r"ApiService\.instance",
            "ApiService()",
        )
        .unwrap();
        assert_eq!(rule.action, RuleAction::Replace("ApiService()".to_string()));
        assert_eq!(rule.kind.label(), "singleton");
    }

    #[test]
    fn test_invalid_pattern_reports_rule_name() {
        let err = RewriteRule::advise("broken", RuleKind::DataAccess, r"handler\.(").unwrap_err();
        match err {
            MigrateError::InvalidPattern { rule, .. } => assert_eq!(rule, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
