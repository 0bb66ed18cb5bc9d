//! # 规则引擎
//!
//! 按固定顺序对单个文件的文本应用全部规则。
//!
//! ## 功能
//! - 替换规则：全部匹配替换为字面文本（不做 `$1` 展开）
//! - 提示规则：只记录命中次数，不修改文本
//! - 记录每条触发的规则，供调用方在写回前输出
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `rules/builtin.rs` 的内置规则

use super::{builtin, RewriteRule, RuleAction, RuleKind};
use crate::error::Result;

use regex::NoExpand;

/// 单条规则的命中记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    /// 规则名称
    pub rule: String,
    /// 规则类别
    pub kind: RuleKind,
    /// 匹配次数
    pub count: usize,
    /// 替换文本（提示规则为 None）
    pub replacement: Option<String>,
}

impl RuleHit {
    /// 是否只是提示
    pub fn is_advisory(&self) -> bool {
        self.replacement.is_none()
    }
}

/// 一次完整规则应用的结果
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    /// 应用后的文本
    pub content: String,
    /// 按规则顺序排列的命中记录
    pub hits: Vec<RuleHit>,
}

impl RewriteOutcome {
    /// 实际改写了文本的规则
    pub fn applied(&self) -> impl Iterator<Item = &RuleHit> {
        self.hits.iter().filter(|h| !h.is_advisory())
    }

    /// 仅提示的命中
    pub fn advisories(&self) -> impl Iterator<Item = &RuleHit> {
        self.hits.iter().filter(|h| h.is_advisory())
    }
}

/// 有序规则集合
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    /// 使用给定规则创建
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// 内置迁移规则
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(builtin::rules()?))
    }

    /// 规则列表（按应用顺序）
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// 依次应用所有规则
    pub fn apply(&self, text: &str) -> RewriteOutcome {
        let mut content = text.to_string();
        let mut hits = Vec::new();

        for rule in &self.rules {
            let count = rule.pattern.find_iter(&content).count();
            if count == 0 {
                continue;
            }

            let replacement = match &rule.action {
                RuleAction::Replace(replacement) => {
                    content = rule
                        .pattern
                        .replace_all(&content, NoExpand(replacement.as_str()))
                        .into_owned();
                    Some(replacement.clone())
                }
                RuleAction::Advise => None,
            };

            hits.push(RuleHit {
                rule: rule.name.clone(),
                kind: rule.kind,
                count,
                replacement,
            });
        }

        RewriteOutcome { content, hits }
    }
}
