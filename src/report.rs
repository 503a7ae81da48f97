//! # 报告输出
//!
//! 写入 CSV 处理日志，计算吞吐率，打印 `--stats` 统计表格。
//!
//! ## 依赖关系
//! - 被 `commands/tag.rs` 调用
//! - 使用 `csv` 库写入日志
//! - 使用 `tabled` 渲染统计表格

use crate::error::{ExifDescError, Result};
use crate::tagger::{LogRow, StatsSnapshot};
use crate::utils::output;

use std::path::Path;
use std::time::Duration;
use tabled::{Table, Tabled};

/// CSV 表头，列顺序固定
const LOG_COLUMNS: [&str; 5] = [
    "File",
    "OriginalDescription",
    "NewDescription",
    "MissingFields",
    "Status",
];

/// 写入 CSV 日志
///
/// 表头总是写入，零输入时生成仅含表头的日志文件。
pub fn write_log(path: &Path, rows: &[LogRow]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(ExifDescError::CsvError)?;

    wtr.write_record(LOG_COLUMNS)
        .map_err(ExifDescError::CsvError)?;

    for row in rows {
        wtr.serialize(row).map_err(ExifDescError::CsvError)?;
    }

    wtr.flush().map_err(|e| ExifDescError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 吞吐率（文件/秒）
///
/// 耗时为零时直接返回总数，避免除零。
pub fn files_per_second(total: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        total as f64 / secs
    } else {
        total as f64
    }
}

/// 统计表格行
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

/// 打印 `--stats` 统计表格
pub fn print_summary(stats: &StatsSnapshot) {
    output::print_header("Summary");

    let rows = vec![
        SummaryRow {
            metric: "Total Files",
            count: stats.total,
        },
        SummaryRow {
            metric: "Updated",
            count: stats.updated,
        },
        SummaryRow {
            metric: "Dry-run",
            count: stats.dry_run,
        },
        SummaryRow {
            metric: "Skipped Tagged",
            count: stats.skipped,
        },
        SummaryRow {
            metric: "Not a File",
            count: stats.not_a_file,
        },
    ];

    let table = Table::new(&rows);
    println!("{}", table);
}
