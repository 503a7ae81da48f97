//! # inspect 子命令 CLI 定义
//!
//! 只读预览组合结果的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use clap::Args;

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// File paths, glob patterns, or directories
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Number of parallel jobs (0 = number of CPU cores)
    #[arg(short, long, default_value_t = 4)]
    pub jobs: usize,
}
