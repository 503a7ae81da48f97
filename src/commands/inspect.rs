//! # inspect 命令实现
//!
//! 只读预览：读取六个字段与现有描述，打印组合结果表格，不写入。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `batch/`, `exif/`
//! - 使用 `utils/output.rs`

use crate::batch::{collector, BatchRunner};
use crate::cli::inspect::InspectArgs;
use crate::error::Result;
use crate::exif::description::{TagBundle, DESCRIPTION_TAG};
use crate::exif::{ExifTool, MetadataTool};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 预览表格行
#[derive(Tabled)]
struct InspectRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Composed")]
    composed: String,
    #[tabled(rename = "Missing")]
    missing: String,
}

/// 执行 inspect 命令
pub fn execute(args: InspectArgs) -> Result<()> {
    output::print_header("Inspect EXIF Description Fields");

    let files = collector::expand_inputs(&args.files)?;

    if files.is_empty() {
        output::print_warning("No files matched the given inputs.");
        return Ok(());
    }

    output::print_info(&format!("Found {} file(s)", files.len()));

    let tool = ExifTool::new();
    let runner = BatchRunner::new(args.jobs);
    let rows = runner.run(files, "Reading", |file| inspect_file(file, &tool));

    let table = Table::new(&rows);
    println!("{}", table);

    Ok(())
}

/// 读取单个文件的预览行
fn inspect_file(path: &Path, tool: &dyn MetadataTool) -> InspectRow {
    let file = path.display().to_string();

    if !path.is_file() {
        return InspectRow {
            file,
            description: String::new(),
            composed: String::new(),
            missing: "not a file".to_string(),
        };
    }

    let description = tool.read_field(path, DESCRIPTION_TAG).unwrap_or_default();
    let bundle = TagBundle::collect(tool, path);

    InspectRow {
        file,
        description,
        composed: bundle.compose(),
        missing: bundle.missing_joined(),
    }
}
