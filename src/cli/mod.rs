//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `tag`: 批量写入 ImageDescription 并生成 CSV 日志
//! - `inspect`: 只读预览组合结果
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: tag, inspect

pub mod inspect;
pub mod tag;

use clap::{Parser, Subcommand};

/// exifdesc - 批量写入 EXIF ImageDescription 工具
#[derive(Parser)]
#[command(name = "exifdesc")]
#[command(version)]
#[command(about = "Batch-set the EXIF ImageDescription field from camera metadata", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Set ImageDescription from EXIF fields via exiftool
    Tag(tag::TagArgs),

    /// Preview the composed description without writing
    Inspect(inspect::InspectArgs),
}
