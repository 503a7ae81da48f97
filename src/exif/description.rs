//! # 描述文本组合
//!
//! 从六个固定字段（Camera, Lens, Focal, Shutter, Aperture, ISO）
//! 组合 ImageDescription 文本。
//!
//! ## 规则
//! - 字段顺序固定，以 `" - "` 连接
//! - 取值为空的字段以 `[Missing]` 占位，并记入缺失列表
//! - 缺失列表以 `"; "` 连接，保持字段顺序
//!
//! ## 依赖关系
//! - 被 `tagger.rs`, `commands/inspect.rs` 调用
//! - 使用 `exif/tool.rs` 的 MetadataTool

use crate::exif::MetadataTool;

use std::path::Path;

/// 写入目标字段
pub const DESCRIPTION_TAG: &str = "ImageDescription";

/// 空字段占位符
pub const MISSING_PLACEHOLDER: &str = "[Missing]";

const FIELD_SEPARATOR: &str = " - ";
const MISSING_SEPARATOR: &str = "; ";

/// 描述字段定义：显示名 ↔ exiftool 标签名
pub struct DescriptionField {
    pub label: &'static str,
    pub tag: &'static str,
}

/// 组成描述的六个字段，顺序即输出顺序
pub const DESCRIPTION_FIELDS: [DescriptionField; 6] = [
    DescriptionField { label: "Camera", tag: "Model" },
    DescriptionField { label: "Lens", tag: "LensID" },
    DescriptionField { label: "Focal", tag: "FocalLength" },
    DescriptionField { label: "Shutter", tag: "ShutterSpeedValue" },
    DescriptionField { label: "Aperture", tag: "ApertureValue" },
    DescriptionField { label: "ISO", tag: "ISO" },
];

/// 单个文件的字段取值集合，与 `DESCRIPTION_FIELDS` 一一对应
pub struct TagBundle {
    values: Vec<String>,
}

impl TagBundle {
    /// 通过外部工具逐字段读取；调用失败按空值处理
    pub fn collect(tool: &dyn MetadataTool, path: &Path) -> Self {
        let values = DESCRIPTION_FIELDS
            .iter()
            .map(|field| tool.read_field(path, field.tag).unwrap_or_default())
            .collect();
        Self { values }
    }

    /// 组合描述文本：六段按固定顺序以 `" - "` 连接
    pub fn compose(&self) -> String {
        self.values
            .iter()
            .map(|v| {
                if v.is_empty() {
                    MISSING_PLACEHOLDER
                } else {
                    v.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(FIELD_SEPARATOR)
    }

    /// 取值为空的字段显示名，保持字段顺序
    pub fn missing_fields(&self) -> Vec<&'static str> {
        DESCRIPTION_FIELDS
            .iter()
            .zip(&self.values)
            .filter(|(_, v)| v.is_empty())
            .map(|(field, _)| field.label)
            .collect()
    }

    /// 缺失列表文本，以 `"; "` 连接
    pub fn missing_joined(&self) -> String {
        self.missing_fields().join(MISSING_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use std::collections::HashMap;

    /// 以固定表驱动的测试替身
    struct StubTool {
        fields: HashMap<&'static str, &'static str>,
    }

    impl StubTool {
        fn new(fields: &[(&'static str, &'static str)]) -> Self {
            Self {
                fields: fields.iter().copied().collect(),
            }
        }
    }

    impl MetadataTool for StubTool {
        fn read_field(&self, _path: &Path, tag: &str) -> Result<String> {
            Ok(self.fields.get(tag).copied().unwrap_or_default().to_string())
        }

        fn write_description(&self, _path: &Path, _description: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_compose_all_fields_present() {
        let tool = StubTool::new(&[
            ("Model", "Canon EOS R5"),
            ("LensID", "RF 50mm F1.8"),
            ("FocalLength", "50.0 mm"),
            ("ShutterSpeedValue", "1/200"),
            ("ApertureValue", "2.8"),
            ("ISO", "400"),
        ]);
        let bundle = TagBundle::collect(&tool, Path::new("x.jpg"));

        assert_eq!(
            bundle.compose(),
            "Canon EOS R5 - RF 50mm F1.8 - 50.0 mm - 1/200 - 2.8 - 400"
        );
        assert!(bundle.missing_fields().is_empty());
        assert_eq!(bundle.missing_joined(), "");
    }

    #[test]
    fn test_compose_all_fields_missing() {
        let tool = StubTool::new(&[]);
        let bundle = TagBundle::collect(&tool, Path::new("x.jpg"));

        assert_eq!(
            bundle.compose(),
            "[Missing] - [Missing] - [Missing] - [Missing] - [Missing] - [Missing]"
        );
        assert_eq!(
            bundle.missing_joined(),
            "Camera; Lens; Focal; Shutter; Aperture; ISO"
        );
    }

    #[test]
    fn test_compose_partial_keeps_field_order() {
        let tool = StubTool::new(&[("Model", "X100V"), ("ISO", "800")]);
        let bundle = TagBundle::collect(&tool, Path::new("x.jpg"));

        assert_eq!(
            bundle.compose(),
            "X100V - [Missing] - [Missing] - [Missing] - [Missing] - 800"
        );
        assert_eq!(bundle.missing_joined(), "Lens; Focal; Shutter; Aperture");
    }

    #[test]
    fn test_segment_count_is_always_six() {
        let tool = StubTool::new(&[("FocalLength", "35 mm")]);
        let bundle = TagBundle::collect(&tool, Path::new("x.jpg"));

        assert_eq!(bundle.compose().split(" - ").count(), 6);
    }
}
