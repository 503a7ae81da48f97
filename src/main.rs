//! # exifdesc - 批量写入 EXIF ImageDescription 工具
//!
//! 通过外部 `exiftool` 读取相机参数（机身、镜头、焦距、快门、
//! 光圈、ISO），组合成描述文本并批量写回 ImageDescription 字段，
//! 处理结果记录到 CSV 日志。
//!
//! ## 子命令
//! - `tag`     - 批量写入描述并生成 CSV 日志
//! - `inspect` - 只读预览组合结果（不写入）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (文件收集与并行执行)
//!   │     ├── exif/    (exiftool 进程封装与描述组合)
//!   │     ├── tagger.rs(单文件处理与计数)
//!   │     └── report.rs(CSV 日志与统计输出)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod exif;
mod report;
mod tagger;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
