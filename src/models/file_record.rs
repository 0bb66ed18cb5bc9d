//! # 文件记录
//!
//! 路径 + 完整文本内容。读入一次，在内存中修改，仅在内容变化时写回。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `error.rs`

use crate::error::{MigrateError, Result};

use std::fs;
use std::path::{Path, PathBuf};

/// 单个源文件的内存表示
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// 文件路径
    pub path: PathBuf,
    /// 读入时的原始内容
    original: String,
    /// 当前内容
    pub content: String,
}

impl FileRecord {
    /// 以 UTF-8 读取文件
    pub fn load(path: &Path) -> Result<Self> {
        let original = fs::read_to_string(path).map_err(|e| MigrateError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            content: original.clone(),
            original,
        })
    }

    /// 内容是否与读入时不同（逐字节比较）
    pub fn is_modified(&self) -> bool {
        self.content != self.original
    }

    /// 内容有变化时写回，返回是否写入
    pub fn write_back(&self) -> Result<bool> {
        if !self.is_modified() {
            return Ok(false);
        }

        fs::write(&self.path, &self.content).map_err(|e| MigrateError::FileWriteError {
            path: self.path.display().to_string(),
            source: e,
        })?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmodified_record_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("home.dart");
        fs::write(&path, "void main() {}\n").unwrap();

        let record = FileRecord::load(&path).unwrap();
        assert!(!record.is_modified());
        assert!(!record.write_back().unwrap());
    }

    #[test]
    fn test_modified_record_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("home.dart");
        fs::write(&path, "ApiService.instance").unwrap();

        let mut record = FileRecord::load(&path).unwrap();
        record.content = "ApiService()".to_string();
        assert!(record.write_back().unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "ApiService()");
    }

    #[test]
    fn test_non_utf8_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.dart");
        fs::write(&path, [0x63, 0x61, 0x66, 0xe9]).unwrap();

        let err = FileRecord::load(&path).unwrap_err();
        assert!(matches!(err, MigrateError::FileReadError { .. }));
    }
}
