//! # run 命令实现
//!
//! 扫描源文件，按序应用迁移规则，内容变化时写回。
//!
//! ## 功能
//! - 按扩展名递归收集文件（根目录缺失时报告 0 个文件，不中断）
//! - 逐文件应用规则，写回前输出每条触发的规则
//! - 单个文件出错只记录，不影响其余文件
//! - 汇总：成功数 / 总数，并区分已写入与仅提示
//! - 可选 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `rules/`, `batch/`, `models/`
//! - 使用 `utils/output.rs`

use crate::batch::{
    report, BatchResult, BatchRunner, FileCollector, FileReport, FileStatus,
};
use crate::cli::run::RunArgs;
use crate::error::{MigrateError, Result};
use crate::models::FileRecord;
use crate::rules::{RuleHit, RuleSet};
use crate::utils::output;

use std::path::{Path, PathBuf};

/// 迁移选项
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    /// 扫描根目录
    pub root: PathBuf,
    /// 扩展名（不含点）
    pub extension: String,
    /// 只报告不写入
    pub dry_run: bool,
    /// CSV 报告路径
    pub report: Option<PathBuf>,
}

impl TryFrom<RunArgs> for MigrateOptions {
    type Error = MigrateError;

    fn try_from(args: RunArgs) -> Result<Self> {
        let extension = args.ext.trim().trim_start_matches('.').to_string();
        if extension.is_empty() {
            return Err(MigrateError::InvalidArgument(format!(
                "file extension must not be empty (got '{}')",
                args.ext
            )));
        }

        Ok(Self {
            root: args.root,
            extension,
            dry_run: args.dry_run,
            report: args.report,
        })
    }
}

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    let options = MigrateOptions::try_from(args)?;
    let rules = RuleSet::builtin()?;

    output::print_header("SQLite → FastAPI Migration Helper");
    if options.dry_run {
        output::print_warning("Dry run: no file will be written.");
    }

    let result = migrate(&options, &rules);

    // 批处理已完成，报告写入失败只提示，不改变退出状态
    if let Some(report_path) = &options.report {
        match report::to_csv(&result.reports, report_path) {
            Ok(()) => output::print_success(&format!(
                "Report written to '{}'",
                report_path.display()
            )),
            Err(e) => output::print_error(&e.to_string()),
        }
    }

    print_next_steps();
    Ok(())
}

/// 扫描并处理全部文件，打印汇总
pub fn migrate(options: &MigrateOptions, rules: &RuleSet) -> BatchResult {
    let collector = FileCollector::new(options.root.clone()).with_extension(&options.extension);
    if !collector.root_exists() {
        output::print_warning(&format!(
            "Directory not found: {}",
            collector.root().display()
        ));
    }

    let files = collector.collect();
    output::print_info(&format!(
        "Found {} .{} files in '{}'",
        files.len(),
        options.extension,
        options.root.display()
    ));

    let result = BatchRunner::new().run(&files, |path| {
        process_file(path, rules, options.dry_run, output::print_rule_hit)
    });

    print_summary(&result, options.dry_run);
    result
}

/// 处理单个文件，错误在此边界被捕获
pub fn process_file<F>(path: &Path, rules: &RuleSet, dry_run: bool, mut on_hit: F) -> FileReport
where
    F: FnMut(&RuleHit),
{
    output::print_processing(&path.display().to_string());

    match rewrite_file(path, rules, dry_run, &mut on_hit) {
        Ok(report) => {
            match report.status {
                FileStatus::Updated => output::print_file_status("✓", "Updated", true),
                FileStatus::WouldUpdate => output::print_file_status("✓", "Would update", true),
                _ if report.is_flagged() => output::print_file_status(
                    "○",
                    "No automatic changes (manual refactor needed)",
                    false,
                ),
                _ => output::print_file_status("○", "No changes needed", false),
            }
            report
        }
        Err(e) => {
            output::print_file_error(&e.detail());
            FileReport::failed(path, &e)
        }
    }
}

fn rewrite_file<F>(
    path: &Path,
    rules: &RuleSet,
    dry_run: bool,
    on_hit: &mut F,
) -> Result<FileReport>
where
    F: FnMut(&RuleHit),
{
    let mut record = FileRecord::load(path)?;
    let outcome = rules.apply(&record.content);

    for hit in &outcome.hits {
        on_hit(hit);
    }

    let applied = outcome.applied().map(|h| h.rule.clone()).collect();
    let advisories = outcome.advisories().map(|h| h.rule.clone()).collect();
    record.content = outcome.content;

    let status = if !record.is_modified() {
        FileStatus::Unchanged
    } else if dry_run {
        FileStatus::WouldUpdate
    } else {
        record.write_back()?;
        FileStatus::Updated
    };

    Ok(FileReport {
        path: path.to_path_buf(),
        status,
        applied,
        advisories,
        error: None,
    })
}

fn print_summary(result: &BatchResult, dry_run: bool) {
    println!();
    output::print_separator();
    output::print_done(&format!(
        "Processed: {}/{} files",
        result.success,
        result.total()
    ));

    let written = if dry_run { "would update" } else { "updated" };
    output::print_info(&format!(
        "{} {}, {} unchanged, {} failed",
        result.updated, written, result.unchanged, result.failed
    ));

    if result.flagged > 0 {
        output::print_warning(&format!(
            "{} file(s) still call DatabaseHandler and need a manual Provider refactor",
            result.flagged
        ));
    }

    for failure in result.failures() {
        output::print_skip(&format!(
            "{}: {}",
            failure.path.display(),
            failure.error.as_deref().unwrap_or("unknown error")
        ));
    }
    output::print_separator();
}

fn print_next_steps() {
    output::print_header("Next steps");
    println!("1. Review changes: git diff");
    println!("2. Run: flutter pub get");
    println!("3. Run: flutter analyze");
    println!("4. Fix remaining errors manually");
    println!("5. Test with backend running");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::builtin::IMPORT_MARKER;
    use std::fs;

    fn options(root: &Path) -> MigrateOptions {
        MigrateOptions {
            root: root.to_path_buf(),
            extension: "dart".to_string(),
            dry_run: false,
            report: None,
        }
    }

    #[test]
    fn test_rewrites_and_writes_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("home.dart");
        fs::write(
            &path,
            "import '../services/DatabaseHandler.dart';\nfinal c = ApiService.instance.getCategory();\n",
        )
        .unwrap();

        let rules = RuleSet::builtin().unwrap();
        let mut fired = Vec::new();
        let report = process_file(&path, &rules, false, |hit| fired.push(hit.rule.clone()));

        assert_eq!(report.status, FileStatus::Updated);
        assert_eq!(
            fired,
            vec!["DatabaseHandler import", "ApiService.instance", ".getCategory()"]
        );
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("{}\nfinal c = ApiService().loadCategories();\n", IMPORT_MARKER)
        );

        let second = process_file(&path, &rules, false, |_| {});
        assert_eq!(second.status, FileStatus::Unchanged);
    }

    #[test]
    fn test_advisory_only_file_is_success_but_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.dart");
        fs::write(&path, "handler.getListCart()").unwrap();

        let rules = RuleSet::builtin().unwrap();
        let mut advisories = 0;
        let report = process_file(&path, &rules, false, |hit| {
            if hit.is_advisory() {
                advisories += 1;
            }
        });

        assert_eq!(advisories, 1);
        assert_eq!(report.status, FileStatus::Unchanged);
        assert!(report.is_flagged());
        assert_eq!(fs::read_to_string(&path).unwrap(), "handler.getListCart()");

        let result = migrate(&options(dir.path()), &rules);
        assert_eq!((result.success, result.total()), (1, 1));
        assert_eq!(result.flagged, 1);
        assert_eq!(result.updated, 0);
    }

    #[test]
    fn test_dry_run_leaves_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top.dart");
        fs::write(&path, "provider.getTopSeller();").unwrap();

        let rules = RuleSet::builtin().unwrap();
        let report = process_file(&path, &rules, true, |_| {});

        assert_eq!(report.status, FileStatus::WouldUpdate);
        assert_eq!(report.applied, vec![".getTopSeller()".to_string()]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "provider.getTopSeller();");
    }

    #[test]
    fn test_bad_file_does_not_abort_batch() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.dart"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(dir.path().join("b.dart"), "x.getReview();").unwrap();

        let result = migrate(&options(dir.path()), &RuleSet::builtin().unwrap());

        assert_eq!(result.total(), 2);
        assert_eq!(result.success, 1);
        assert_eq!(result.failed, 1);
        let failure = result.failures().next().unwrap();
        assert_eq!(failure.path, dir.path().join("a.dart"));
        assert!(failure.error.as_deref().unwrap().contains("Failed to read file"));
        assert_eq!(
            fs::read_to_string(dir.path().join("b.dart")).unwrap(),
            "x.loadReviews();"
        );
    }

    #[test]
    fn test_missing_root_reports_zero_of_zero() {
        let dir = tempfile::tempdir().unwrap();
        let result = migrate(&options(&dir.path().join("lib")), &RuleSet::builtin().unwrap());
        assert_eq!((result.success, result.total()), (0, 0));
    }

    #[test]
    fn test_directory_without_matches_reports_zero_of_zero() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "ApiService.instance").unwrap();

        let result = migrate(&options(dir.path()), &RuleSet::builtin().unwrap());

        assert_eq!((result.success, result.total()), (0, 0));
        assert_eq!(
            fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
            "ApiService.instance"
        );
    }

    #[test]
    fn test_unwritable_report_does_not_fail_run() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().join("lib");
        fs::create_dir_all(&lib).unwrap();
        fs::write(lib.join("home.dart"), "x.getReview();").unwrap();

        let args = RunArgs {
            root: lib.clone(),
            report: Some(dir.path().to_path_buf()),
            ..RunArgs::default()
        };

        assert!(execute(args).is_ok());
        assert_eq!(
            fs::read_to_string(lib.join("home.dart")).unwrap(),
            "x.loadReviews();"
        );
    }

    #[test]
    fn test_extension_normalized_once() {
        let args = RunArgs {
            ext: " .dart ".to_string(),
            ..RunArgs::default()
        };
        assert_eq!(MigrateOptions::try_from(args).unwrap().extension, "dart");
    }

    #[test]
    fn test_empty_extension_rejected() {
        let args = RunArgs {
            ext: " . ".to_string(),
            ..RunArgs::default()
        };
        assert!(matches!(
            MigrateOptions::try_from(args),
            Err(MigrateError::InvalidArgument(_))
        ));
    }
}
