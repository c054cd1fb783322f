// apps/gw_cli/src/commands/info.rs

//! 名称文件摘要命令
//!
//! 解析名称文件并打印文件集索引, 支持 JSON 输出。

use anyhow::{Context, Result};
use clap::Args;
use gw_model::{reserved_unit, ExtUnitDict};
use std::path::PathBuf;

/// 摘要参数
#[derive(Args)]
pub struct InfoArgs {
    /// 名称文件路径
    pub namefile: PathBuf,

    /// 以 JSON 格式输出
    #[arg(long)]
    pub json: bool,
}

/// 执行摘要命令
pub fn execute(args: InfoArgs) -> Result<()> {
    let dict = ExtUnitDict::from_path(&args.namefile)
        .with_context(|| format!("解析名称文件失败: {}", args.namefile.display()))?;

    if args.json {
        let entries: Vec<_> = dict.iter().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("名称文件: {}", args.namefile.display());
    println!("记录数: {}", dict.len());
    println!();
    println!("{:<14} {:>6}  {}", "类型", "单元号", "文件名");

    for entry in dict.iter() {
        let marker = match reserved_unit(&entry.ftype) {
            Some(u) if u == entry.unit => " (保留单元号)",
            _ => "",
        };
        let binary = if entry.binary { " [二进制]" } else { "" };
        println!(
            "{:<14} {:>6}  {}{}{}",
            entry.ftype, entry.unit, entry.filename, binary, marker
        );
    }

    Ok(())
}
