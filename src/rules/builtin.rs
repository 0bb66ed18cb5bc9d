//! # 内置迁移规则
//!
//! SQLite `DatabaseHandler` → 远程 API + Provider 迁移所用的固定规则表。
//! 顺序即应用顺序：import 删除 → 单例访问 → 方法重命名 → 数据访问提示。
//!
//! ## 依赖关系
//! - 被 `rules/engine.rs` 的 `RuleSet::builtin` 使用

use super::{RewriteRule, RuleKind};
use crate::error::Result;

/// import 被删除后留下的注释标记
pub const IMPORT_MARKER: &str = "// DatabaseHandler removed - use Provider instead";

const IMPORT_PATTERN: &str = r#"import\s+['"]\.\./services/DatabaseHandler\.dart['"];"#;

const SINGLETON_PATTERN: &str = r"ApiService\.instance";
const SINGLETON_REPLACEMENT: &str = "ApiService()";

/// Provider 旧方法名 → 新方法名（不关心参数，仅匹配空参调用）
const METHOD_RENAMES: &[(&str, &str)] = &[
    (r"\.getCategory\(\)", ".loadCategories()"),
    (r"\.getProduct\(\)", ".loadProducts()"),
    (r"\.getNewArchiveProduct\(\)", ".loadNewProducts()"),
    (r"\.getTopSeller\(\)", ".loadTopSellers()"),
    (r"\.getReview\(\)", ".loadReviews()"),
];

/// 需要人工重构的 DatabaseHandler 调用
const DATA_ACCESS_CALLS: &[&str] = &[
    r"handler\.getListCart\(\)",
    r"handler\.getListFavorite\(\)",
    r"handler\.getListUser\(\)",
    r"handler\.getListHistorySearch\(\)",
    r"handler\.insertCart\(",
    r"handler\.deleteFavorite\(",
];

/// 构建内置规则（按应用顺序）
pub fn rules() -> Result<Vec<RewriteRule>> {
    let mut rules = Vec::with_capacity(2 + METHOD_RENAMES.len() + DATA_ACCESS_CALLS.len());

    rules.push(RewriteRule::replace(
        "DatabaseHandler import",
        RuleKind::ImportRemoval,
        IMPORT_PATTERN,
        IMPORT_MARKER,
    )?);

    rules.push(RewriteRule::replace(
        "ApiService.instance",
        RuleKind::Singleton,
        SINGLETON_PATTERN,
        SINGLETON_REPLACEMENT,
    )?);

    for (pattern, replacement) in METHOD_RENAMES {
        rules.push(RewriteRule::replace(
            &unescape(pattern),
            RuleKind::MethodRename,
            pattern,
            replacement,
        )?);
    }

    for pattern in DATA_ACCESS_CALLS {
        rules.push(RewriteRule::advise(
            &unescape(pattern),
            RuleKind::DataAccess,
            pattern,
        )?);
    }

    Ok(rules)
}

/// 把简单的转义模式还原为可读名称，如 `\.getReview\(\)` → `.getReview()`
fn unescape(pattern: &str) -> String {
    pattern.replace('\\', "")
}
