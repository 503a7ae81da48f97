//! # tag 子命令 CLI 定义
//!
//! 批量写入 ImageDescription 的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/tag.rs`

use clap::Args;
use std::path::PathBuf;

/// tag 子命令参数
#[derive(Args, Debug)]
pub struct TagArgs {
    /// File paths or glob patterns (e.g., "photos/**/*.jpg")
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Dry-run mode: compute descriptions without writing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip images that already have an ImageDescription
    #[arg(long)]
    pub skip_tagged: bool,

    /// CSV log output path
    #[arg(long, default_value = "set_description_log.csv")]
    pub logfile: PathBuf,

    /// Show a processing summary after completion
    #[arg(long)]
    pub stats: bool,

    /// Number of parallel jobs (0 = number of CPU cores)
    #[arg(short, long, default_value_t = 4)]
    pub jobs: usize,
}
