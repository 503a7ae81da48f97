//! # 单文件处理逻辑
//!
//! 定义处理状态、日志行、共享计数器，以及核心的 `process_file`。
//!
//! ## 契约
//! - 每个输入路径恰好产生一行日志
//! - 从不向调用者抛错：外部工具的任何失败折叠为空字段值
//! - 计数器使用原子递增，可被多个 worker 并发更新
//!
//! ## 依赖关系
//! - 被 `commands/tag.rs` 通过 `batch/runner.rs` 并行调用
//! - 使用 `exif/` 读写元数据

use crate::exif::description::{TagBundle, DESCRIPTION_TAG};
use crate::exif::MetadataTool;

use serde::{Serialize, Serializer};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 单个文件的处理状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStatus {
    /// 路径不是常规文件
    NotAFile,
    /// 已有描述且启用了 --skip-tagged
    Skipped,
    /// 干跑模式，未写入
    DryRun,
    /// 描述已写入
    Updated,
}

impl TagStatus {
    /// CSV 日志中记录的状态文本
    pub fn as_str(&self) -> &'static str {
        match self {
            TagStatus::NotAFile => "Not a file",
            TagStatus::Skipped => "Skipped - already tagged",
            TagStatus::DryRun => "Dry run",
            TagStatus::Updated => "Updated",
        }
    }
}

impl std::fmt::Display for TagStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for TagStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// CSV 日志行
#[derive(Debug, Clone, Serialize)]
pub struct LogRow {
    #[serde(rename = "File")]
    pub file: String,
    #[serde(rename = "OriginalDescription")]
    pub original_description: String,
    #[serde(rename = "NewDescription")]
    pub new_description: String,
    #[serde(rename = "MissingFields")]
    pub missing_fields: String,
    #[serde(rename = "Status")]
    pub status: TagStatus,
}

impl LogRow {
    fn empty(file: String, status: TagStatus) -> Self {
        Self {
            file,
            original_description: String::new(),
            new_description: String::new(),
            missing_fields: String::new(),
            status,
        }
    }
}

/// 处理选项
#[derive(Debug, Clone, Copy, Default)]
pub struct TagOptions {
    pub dry_run: bool,
    pub skip_tagged: bool,
}

/// 并发共享的聚合计数器
#[derive(Debug, Default)]
pub struct TagStats {
    pub total: AtomicUsize,
    pub updated: AtomicUsize,
    pub skipped: AtomicUsize,
    pub dry_run: AtomicUsize,
    pub not_a_file: AtomicUsize,
}

/// 计数器快照，供报告使用
#[derive(Debug, Clone, Copy)]
pub struct StatsSnapshot {
    pub total: usize,
    pub updated: usize,
    pub skipped: usize,
    pub dry_run: usize,
    pub not_a_file: usize,
}

impl TagStats {
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total: self.total.load(Ordering::Relaxed),
            updated: self.updated.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            dry_run: self.dry_run.load(Ordering::Relaxed),
            not_a_file: self.not_a_file.load(Ordering::Relaxed),
        }
    }
}

/// 处理单个文件
///
/// 总是返回恰好一行日志。非常规文件直接标记；其余路径读取现有
/// 描述，按选项决定跳过、干跑或写入。
pub fn process_file(
    path: &Path,
    tool: &dyn MetadataTool,
    opts: &TagOptions,
    stats: &TagStats,
) -> LogRow {
    let file = path.display().to_string();

    if !path.is_file() {
        stats.not_a_file.fetch_add(1, Ordering::Relaxed);
        return LogRow::empty(file, TagStatus::NotAFile);
    }

    stats.total.fetch_add(1, Ordering::Relaxed);
    let original = tool.read_field(path, DESCRIPTION_TAG).unwrap_or_default();

    if opts.skip_tagged && !original.is_empty() {
        stats.skipped.fetch_add(1, Ordering::Relaxed);
        return LogRow {
            file,
            original_description: original,
            new_description: String::new(),
            missing_fields: String::new(),
            status: TagStatus::Skipped,
        };
    }

    let bundle = TagBundle::collect(tool, path);
    let new_description = bundle.compose();
    let missing_fields = bundle.missing_joined();

    let status = if opts.dry_run {
        stats.dry_run.fetch_add(1, Ordering::Relaxed);
        TagStatus::DryRun
    } else {
        // 写入失败同样被吞掉，单个坏文件不中断批处理
        tool.write_description(path, &new_description).ok();
        stats.updated.fetch_add(1, Ordering::Relaxed);
        TagStatus::Updated
    };

    LogRow {
        file,
        original_description: original,
        new_description,
        missing_fields,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExifDescError, Result};
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// 记录写入调用的测试替身
    struct MockTool {
        fields: HashMap<String, String>,
        fail_reads: bool,
        writes: Mutex<Vec<(PathBuf, String)>>,
    }

    impl MockTool {
        fn new(fields: &[(&str, &str)]) -> Self {
            Self {
                fields: fields
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                fail_reads: false,
                writes: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            let mut tool = Self::new(&[]);
            tool.fail_reads = true;
            tool
        }

        fn writes(&self) -> Vec<(PathBuf, String)> {
            self.writes.lock().unwrap().clone()
        }
    }

    impl MetadataTool for MockTool {
        fn read_field(&self, _path: &Path, tag: &str) -> Result<String> {
            if self.fail_reads {
                return Err(ExifDescError::CommandNotFound {
                    command: "exiftool".to_string(),
                });
            }
            Ok(self.fields.get(tag).cloned().unwrap_or_default())
        }

        fn write_description(&self, path: &Path, description: &str) -> Result<()> {
            self.writes
                .lock()
                .unwrap()
                .push((path.to_path_buf(), description.to_string()));
            Ok(())
        }
    }

    fn image_file() -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("photo.jpg");
        std::fs::write(&path, b"jpeg").unwrap();
        (tmp, path)
    }

    #[test]
    fn test_not_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.jpg");
        let tool = MockTool::new(&[]);
        let stats = TagStats::default();

        let row = process_file(&missing, &tool, &TagOptions::default(), &stats);

        assert_eq!(row.status, TagStatus::NotAFile);
        assert_eq!(row.original_description, "");
        assert_eq!(row.new_description, "");
        assert_eq!(row.missing_fields, "");
        assert_eq!(stats.snapshot().not_a_file, 1);
        assert_eq!(stats.snapshot().total, 0);
        assert!(tool.writes().is_empty());
    }

    #[test]
    fn test_skip_tagged_suppresses_write() {
        let (_tmp, path) = image_file();
        let tool = MockTool::new(&[("ImageDescription", "already here")]);
        let stats = TagStats::default();
        let opts = TagOptions {
            skip_tagged: true,
            ..Default::default()
        };

        let row = process_file(&path, &tool, &opts, &stats);

        assert_eq!(row.status, TagStatus::Skipped);
        assert_eq!(row.original_description, "already here");
        assert_eq!(row.new_description, "");
        assert!(tool.writes().is_empty());
        assert_eq!(stats.snapshot().skipped, 1);
        assert_eq!(stats.snapshot().updated, 0);
    }

    #[test]
    fn test_dry_run_never_writes() {
        let (_tmp, path) = image_file();
        let tool = MockTool::new(&[("Model", "X100V")]);
        let stats = TagStats::default();
        let opts = TagOptions {
            dry_run: true,
            // skip-tagged 同时开启也不影响干跑语义
            skip_tagged: true,
        };

        let row = process_file(&path, &tool, &opts, &stats);

        assert_eq!(row.status, TagStatus::DryRun);
        assert!(tool.writes().is_empty());
        assert_eq!(stats.snapshot().dry_run, 1);
        assert_eq!(stats.snapshot().total, 1);
    }

    #[test]
    fn test_update_writes_composed_description() {
        let (_tmp, path) = image_file();
        let tool = MockTool::new(&[
            ("Model", "Canon EOS R5"),
            ("LensID", "RF 50mm F1.8"),
            ("FocalLength", "50.0 mm"),
            ("ShutterSpeedValue", "1/200"),
            ("ApertureValue", "2.8"),
            ("ISO", "400"),
        ]);
        let stats = TagStats::default();

        let row = process_file(&path, &tool, &TagOptions::default(), &stats);

        let expected = "Canon EOS R5 - RF 50mm F1.8 - 50.0 mm - 1/200 - 2.8 - 400";
        assert_eq!(row.status, TagStatus::Updated);
        assert_eq!(row.new_description, expected);
        assert_eq!(row.missing_fields, "");
        assert_eq!(tool.writes(), vec![(path, expected.to_string())]);
        assert_eq!(stats.snapshot().updated, 1);
    }

    #[test]
    fn test_all_fields_missing_worked_example() {
        let (_tmp, path) = image_file();
        let tool = MockTool::new(&[]);
        let stats = TagStats::default();

        let row = process_file(&path, &tool, &TagOptions::default(), &stats);

        assert_eq!(row.original_description, "");
        assert_eq!(
            row.new_description,
            "[Missing] - [Missing] - [Missing] - [Missing] - [Missing] - [Missing]"
        );
        assert_eq!(
            row.missing_fields,
            "Camera; Lens; Focal; Shutter; Aperture; ISO"
        );
        assert_eq!(row.status, TagStatus::Updated);
    }

    #[test]
    fn test_read_failure_reads_as_missing() {
        let (_tmp, path) = image_file();
        let tool = MockTool::failing();
        let stats = TagStats::default();

        let row = process_file(&path, &tool, &TagOptions::default(), &stats);

        // 调用失败与字段缺失不可区分，均为空值
        assert_eq!(
            row.missing_fields,
            "Camera; Lens; Focal; Shutter; Aperture; ISO"
        );
        assert_eq!(row.status, TagStatus::Updated);
    }

    #[test]
    fn test_existing_description_without_skip_is_replaced() {
        let (_tmp, path) = image_file();
        let tool = MockTool::new(&[("ImageDescription", "old text"), ("ISO", "200")]);
        let stats = TagStats::default();

        let row = process_file(&path, &tool, &TagOptions::default(), &stats);

        assert_eq!(row.original_description, "old text");
        assert_eq!(row.status, TagStatus::Updated);
        assert_eq!(tool.writes().len(), 1);
    }
}
