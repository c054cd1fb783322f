// crates/gw_model/src/namefile.rs

//! 名称文件读写
//!
//! 名称文件是模型的主索引, 每行把一个软件包类型绑定到单元号和文件名:
//!
//! ```text
//! # Name file for MODFLOW-2005, generated by gwflow.
//! LIST 2 model.list
//! DIS 11 model.dis
//! SWR 36 model.swr
//! DATA(BINARY) -37 heads.bin
//! ```
//!
//! 以 `#` 开头的行为注释, 空行被跳过。负单元号表示二进制文件,
//! 存储时折算为绝对值并记录二进制标志。
//!
//! # 示例
//!
//! ```ignore
//! use gw_model::namefile::ExtUnitDict;
//!
//! let dict = ExtUnitDict::from_path("model.nam")?;
//! if let Some((unit, fname)) = dict.attr_for("SWR") {
//!     println!("SWR -> unit {unit}, file {fname}");
//! }
//! ```

use gw_foundation::{GwError, GwResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::units::validate_unit;

/// 名称文件的一行记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamefileEntry {
    /// 软件包类型标签 (统一为大写)
    pub ftype: String,
    /// 单元号 (绝对值)
    pub unit: u32,
    /// 文件名
    pub filename: String,
    /// 是否为二进制文件 (源文件中单元号为负)
    pub binary: bool,
    /// 附加选项 (如 REPLACE, OLD)
    pub options: Vec<String>,
}

impl NamefileEntry {
    /// 创建文本文件记录
    pub fn new(ftype: impl Into<String>, unit: u32, filename: impl Into<String>) -> Self {
        Self {
            ftype: ftype.into().to_uppercase(),
            unit,
            filename: filename.into(),
            binary: false,
            options: Vec::new(),
        }
    }

    /// 格式化为名称文件行
    pub fn to_line(&self) -> String {
        let unit = if self.binary {
            format!("-{}", self.unit)
        } else {
            self.unit.to_string()
        };
        let mut line = format!("{} {} {}", self.ftype, unit, self.filename);
        for opt in &self.options {
            line.push(' ');
            line.push_str(opt);
        }
        line
    }
}

/// 外部单元号字典
///
/// 名称文件解析结果: 单元号 -> 记录的映射, 支持按软件包类型标签查询。
#[derive(Debug, Clone, Default)]
pub struct ExtUnitDict {
    /// 单元号 -> 记录 (升序)
    entries: BTreeMap<u32, NamefileEntry>,
}

impl ExtUnitDict {
    /// 创建空字典
    pub fn new() -> Self {
        Self::default()
    }

    /// 从名称文件解析
    pub fn from_path<P: AsRef<Path>>(path: P) -> GwResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GwError::io_with_source(format!("无法打开名称文件 {}", path.display()), e)
        })?;
        Self::from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// 从 reader 解析
    ///
    /// `source` 仅用于错误信息中的文件定位。
    pub fn from_reader<R: BufRead>(reader: R, source: &str) -> GwResult<Self> {
        let mut entries: BTreeMap<u32, NamefileEntry> = BTreeMap::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| {
                GwError::io_with_source(format!("读取 {source} 第{line_no}行失败"), e)
            })?;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            if parts.len() < 3 {
                return Err(GwError::parse(
                    source,
                    line_no,
                    format!("字段不足: 期望 FTYPE UNIT FILENAME, 实际 {} 个字段", parts.len()),
                ));
            }

            let raw_unit: i64 = parts[1].parse().map_err(|_| {
                GwError::parse(source, line_no, format!("单元号无法解析: {}", parts[1]))
            })?;
            let binary = raw_unit < 0;
            let unit = u32::try_from(raw_unit.unsigned_abs()).map_err(|_| {
                GwError::parse(source, line_no, format!("单元号超出范围: {raw_unit}"))
            })?;
            validate_unit(unit)
                .map_err(|e| GwError::parse(source, line_no, e.to_string()))?;

            let entry = NamefileEntry {
                ftype: parts[0].to_uppercase(),
                unit,
                filename: parts[2].to_string(),
                binary,
                options: parts[3..].iter().map(|s| s.to_string()).collect(),
            };

            if let Some(first) = entries.get(&unit) {
                return Err(GwError::unit_conflict(unit, first.ftype.clone(), entry.ftype));
            }
            entries.insert(unit, entry);
        }

        Ok(Self { entries })
    }

    /// 按软件包类型标签查询单元号和文件名
    ///
    /// 返回首个匹配记录 (单元号升序)。标签比较不区分大小写。
    pub fn attr_for(&self, ftype: &str) -> Option<(u32, &str)> {
        let upper = ftype.to_uppercase();
        self.entries
            .values()
            .find(|e| e.ftype == upper)
            .map(|e| (e.unit, e.filename.as_str()))
    }

    /// 按单元号查询记录
    pub fn get(&self, unit: u32) -> Option<&NamefileEntry> {
        self.entries.get(&unit)
    }

    /// 插入记录, 单元号冲突时返回错误
    pub fn insert(&mut self, entry: NamefileEntry) -> GwResult<()> {
        if let Some(first) = self.entries.get(&entry.unit) {
            return Err(GwError::unit_conflict(
                entry.unit,
                first.ftype.clone(),
                entry.ftype,
            ));
        }
        self.entries.insert(entry.unit, entry);
        Ok(())
    }

    /// 记录数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 遍历记录 (单元号升序)
    pub fn iter(&self) -> impl Iterator<Item = &NamefileEntry> {
        self.entries.values()
    }

    /// 写入名称文件
    pub fn write<P: AsRef<Path>>(&self, path: P, heading: &str) -> GwResult<()> {
        let file = File::create(path.as_ref()).map_err(|e| {
            GwError::io_with_source(
                format!("无法创建名称文件 {}", path.as_ref().display()),
                e,
            )
        })?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer, heading)
    }

    /// 写入到 writer
    pub fn write_to<W: Write>(&self, writer: &mut W, heading: &str) -> GwResult<()> {
        writeln!(writer, "{heading}").map_err(|e| GwError::io(e.to_string()))?;
        for entry in self.entries.values() {
            writeln!(writer, "{}", entry.to_line()).map_err(|e| GwError::io(e.to_string()))?;
        }
        Ok(())
    }
}
