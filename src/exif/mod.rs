//! # EXIF 元数据模块
//!
//! 封装外部 `exiftool` 进程，并实现描述文本的组合逻辑。
//!
//! ## 依赖关系
//! - 被 `tagger.rs`, `commands/` 使用
//! - 子模块: tool, description

pub mod description;
pub mod tool;

pub use tool::{ExifTool, MetadataTool};
