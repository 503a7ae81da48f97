//! # exiftool 进程封装
//!
//! 以子进程方式调用外部 `exiftool`，读取单个标签值或写入描述字段。
//!
//! ## 功能
//! - `-s3` 读取单个标签的裸值
//! - `-overwrite_original` 原地写入描述（无备份）
//! - 通过 `MetadataTool` trait 隔离进程调用，便于测试替换
//!
//! ## 依赖关系
//! - 被 `tagger.rs`, `commands/inspect.rs` 调用
//! - 使用 `error.rs` 的错误类型

use crate::error::{ExifDescError, Result};
use crate::exif::description::DESCRIPTION_TAG;

use std::path::Path;
use std::process::Command;

/// 外部元数据工具的窄接口
///
/// 读取返回 `Ok("")` 表示字段不存在，`Err` 表示调用本身失败；
/// 批量处理路径将两者统一折叠为空值。
pub trait MetadataTool {
    /// 读取单个标签的文本值（已去除首尾空白）
    fn read_field(&self, path: &Path, tag: &str) -> Result<String>;

    /// 覆盖写入 ImageDescription 字段
    fn write_description(&self, path: &Path, description: &str) -> Result<()>;
}

/// exiftool 子进程实现
pub struct ExifTool {
    /// 可执行文件名
    command: String,
}

impl ExifTool {
    /// 使用 PATH 中的 `exiftool`
    pub fn new() -> Self {
        Self {
            command: "exiftool".to_string(),
        }
    }
}

impl Default for ExifTool {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataTool for ExifTool {
    fn read_field(&self, path: &Path, tag: &str) -> Result<String> {
        let output = Command::new(&self.command)
            .arg(format!("-{}", tag))
            .arg("-s3")
            .arg(path)
            .output()
            .map_err(|_| ExifDescError::CommandNotFound {
                command: self.command.clone(),
            })?;

        if !output.status.success() {
            return Err(ExifDescError::CommandFailed {
                command: format!("{} -{} -s3 {}", self.command, tag, path.display()),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn write_description(&self, path: &Path, description: &str) -> Result<()> {
        let output = Command::new(&self.command)
            .arg("-overwrite_original")
            .arg(format!("-{}={}", DESCRIPTION_TAG, description))
            .arg(path)
            .output()
            .map_err(|_| ExifDescError::CommandNotFound {
                command: self.command.clone(),
            })?;

        if !output.status.success() {
            return Err(ExifDescError::CommandFailed {
                command: format!("{} -overwrite_original {}", self.command, path.display()),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(())
    }
}
