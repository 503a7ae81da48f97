//! # tag 命令实现
//!
//! 批量读取 EXIF 字段、组合描述文本并写回 ImageDescription。
//!
//! ## 功能
//! - glob 模式展开输入文件
//! - 并行处理（rayon），计数器原子累加
//! - 结果按输入顺序写入 CSV 日志
//! - 可选 `--stats` 统计表格
//!
//! ## 依赖关系
//! - 使用 `cli/tag.rs` 定义的参数
//! - 使用 `batch/`, `exif/`, `tagger.rs`, `report.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{collector, BatchRunner};
use crate::cli::tag::TagArgs;
use crate::error::Result;
use crate::exif::ExifTool;
use crate::report;
use crate::tagger::{self, TagOptions, TagStats};
use crate::utils::output;

use chrono::Local;
use std::time::Instant;

/// 执行 tag 命令
pub fn execute(args: TagArgs) -> Result<()> {
    output::print_header("Set ImageDescription from EXIF");

    let files = collector::expand_globs(&args.files)?;

    if files.is_empty() {
        // 照常生成仅含表头的日志文件
        output::print_warning("No files matched the given patterns.");
    } else {
        output::print_info(&format!("Found {} file(s)", files.len()));
    }

    output::print_info(&format!(
        "Processing started at {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    output::print_info(&format!("Logging to '{}'", args.logfile.display()));

    if args.dry_run {
        output::print_warning("Dry-run mode: no file will be modified.");
    }

    let start = Instant::now();

    let stats = TagStats::default();
    let opts = TagOptions {
        dry_run: args.dry_run,
        skip_tagged: args.skip_tagged,
    };
    let tool = ExifTool::new();

    let runner = BatchRunner::new(args.jobs);
    let rows = runner.run(files, "Tagging", |file| {
        tagger::process_file(file, &tool, &opts, &stats)
    });

    report::write_log(&args.logfile, &rows)?;

    let elapsed = start.elapsed();
    let snapshot = stats.snapshot();
    let rate = report::files_per_second(snapshot.total, elapsed);

    output::print_separator();
    output::print_done(&format!(
        "Processed {} file(s) in {:.1}s ({:.2} files/sec)",
        snapshot.total,
        elapsed.as_secs_f64(),
        rate
    ));
    output::print_success(&format!("CSV log saved to '{}'", args.logfile.display()));

    if args.stats {
        report::print_summary(&snapshot);
    }

    Ok(())
}
