// apps/gw_cli/src/commands/validate.rs

//! 名称文件验证命令
//!
//! 验证名称文件的可解析性与文件集一致性。

use anyhow::{bail, Result};
use clap::Args;
use gw_model::{reserved_unit, ExtUnitDict};
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 名称文件路径
    pub namefile: PathBuf,

    /// 严格模式（警告也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 验证结果
#[derive(Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn is_ok_strict(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    println!("检查名称文件: {}", args.namefile.display());

    let mut result = ValidationResult::default();

    if !args.namefile.exists() {
        result.add_error(format!("名称文件不存在: {}", args.namefile.display()));
        return print_validation_result(&result, args.strict);
    }

    // 解析 (单元号冲突和格式错误在此暴露)
    let dict = match ExtUnitDict::from_path(&args.namefile) {
        Ok(d) => d,
        Err(e) => {
            result.add_error(e.to_string());
            return print_validation_result(&result, args.strict);
        }
    };

    if dict.is_empty() {
        result.add_warning("名称文件没有任何记录");
    }

    let base_dir = args.namefile.parent().unwrap_or_else(|| Path::new("."));

    for entry in dict.iter() {
        // 保留单元号偏离检查
        if let Some(expected) = reserved_unit(&entry.ftype) {
            if expected != entry.unit {
                result.add_warning(format!(
                    "{} 使用单元号 {}, 约定保留单元号为 {}",
                    entry.ftype, entry.unit, expected
                ));
            }
        }

        // 引用文件存在性检查 (输出类文件缺失属正常)
        let referenced = base_dir.join(&entry.filename);
        if !referenced.exists() {
            result.add_warning(format!("引用的文件不存在: {}", referenced.display()));
        }
    }

    println!("  ✓ 名称文件格式有效 ({} 条记录)", dict.len());

    print_validation_result(&result, args.strict)
}

fn print_validation_result(result: &ValidationResult, strict: bool) -> Result<()> {
    println!("\n=== 验证结果 ===");

    if !result.errors.is_empty() {
        println!("\n错误 ({}):", result.errors.len());
        for err in &result.errors {
            error!("  ✗ {}", err);
            println!("  ✗ {}", err);
        }
    }

    if !result.warnings.is_empty() {
        println!("\n警告 ({}):", result.warnings.len());
        for warning in &result.warnings {
            warn!("  ⚠ {}", warning);
            println!("  ⚠ {}", warning);
        }
    }

    let success = if strict {
        result.is_ok_strict()
    } else {
        result.is_ok()
    };

    if success {
        println!("\n✓ 验证通过");
        Ok(())
    } else {
        println!("\n✗ 验证失败");
        bail!(
            "验证失败：发现 {} 个错误，{} 个警告",
            result.errors.len(),
            result.warnings.len()
        )
    }
}
