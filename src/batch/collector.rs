//! # 文件收集器
//!
//! 按扩展名递归收集根目录下的待迁移源文件。
//!
//! ## 功能
//! - 递归目录搜索（walkdir 遍历顺序）
//! - 扩展名精确匹配（区分大小写）
//! - 根目录不存在时返回空列表
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `walkdir` 遍历目录

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 根目录
    root: PathBuf,
    /// 扩展名（不含点）
    extension: String,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: "dart".to_string(),
        }
    }

    /// 设置扩展名（不含点）
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    /// 根目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 根目录是否存在
    pub fn root_exists(&self) -> bool {
        self.root.is_dir()
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Vec<PathBuf> {
        if !self.root_exists() {
            return vec![];
        }

        // 符号链接文件按目标判断；不进入符号链接目录
        WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter(|e| self.matches_extension(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect()
    }

    /// 检查扩展名
    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e == self.extension)
            .unwrap_or(false)
    }
}
