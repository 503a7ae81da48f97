//! # 文件收集器
//!
//! 将命令行输入参数展开为待处理文件列表。
//!
//! ## 功能
//! - 每个参数作为 glob 模式展开（支持 `**` 递归通配符）
//! - 不去重、不排序：结果为各参数展开顺序的拼接
//! - `inspect` 模式下额外支持目录参数（递归收集）
//!
//! ## 依赖关系
//! - 被 `commands/tag.rs`, `commands/inspect.rs` 调用
//! - 使用 `glob` 展开模式
//! - 使用 `walkdir` 遍历目录

use crate::error::{ExifDescError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 将每个参数作为 glob 模式展开
///
/// 匹配到的路径原样收集，包括目录等非常规文件（由处理阶段
/// 标记为 "Not a file"）。匹配不到任何内容的模式贡献空集。
pub fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let matches = glob::glob(pattern).map_err(|e| ExifDescError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;

        files.extend(matches.filter_map(|m| m.ok()));
    }

    Ok(files)
}

/// 展开输入参数，目录参数递归收集其下所有文件
///
/// 仅供只读的 inspect 命令使用；tag 命令保持纯 glob 语义。
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_dir() {
            files.extend(collect_dir(path));
        } else {
            let matches = glob::glob(pattern).map_err(|e| ExifDescError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
            files.extend(matches.filter_map(|m| m.ok()));
        }
    }

    Ok(files)
}

/// 递归收集目录下的所有常规文件
fn collect_dir(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .collect()
}
