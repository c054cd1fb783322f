// crates/gw_model/src/package.rs

//! 软件包抽象
//!
//! 每个过程软件包 (process module) 对应模型输入文件集中的一个文件,
//! 由固定类型标签、单元号和文件名在名称文件中登记。
//!
//! - [`Package`]: 软件包统一接口
//! - [`PackageMeta`]: 公共簿记字段与默认值填充

use gw_foundation::GwResult;
use std::path::Path;

use crate::namefile::NamefileEntry;

/// 软件包统一接口
///
/// 模型通过该 trait 管理软件包集合并生成名称文件。
pub trait Package {
    /// 固定类型标签 (如 "SWR", "DIS")
    fn ftype(&self) -> &str;

    /// 文件单元号
    fn unit_number(&self) -> u32;

    /// 文件名
    fn file_name(&self) -> &str;

    /// 文件头注释
    fn heading(&self) -> &str;

    /// 写入软件包文件到指定目录
    fn write_file(&self, dir: &Path) -> GwResult<()>;

    /// 生成名称文件记录
    fn namefile_entry(&self) -> NamefileEntry {
        NamefileEntry::new(self.ftype(), self.unit_number(), self.file_name())
    }
}

/// 软件包公共簿记字段
///
/// 类型标签、扩展名、单元号、文件名、文件头注释和文档链接。
/// 未指定的字段按模型约定填充默认值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMeta {
    /// 固定类型标签
    pub ftype: String,
    /// 文件扩展名
    pub extension: String,
    /// 文件单元号
    pub unit_number: u32,
    /// 文件名
    pub filename: String,
    /// 文件头注释
    pub heading: String,
    /// 在线文档链接
    pub url: String,
}

impl PackageMeta {
    /// 构造公共字段并填充默认值
    ///
    /// - `unit_number` 为 None 时使用 `default_unit`
    /// - `filename` 为 None 时使用 `{model_name}.{extension}`
    /// - 文件头注释由类型标签和模型版本显示名生成
    pub fn resolve(
        ftype: &str,
        extension: &str,
        default_unit: u32,
        model_name: &str,
        version_title: &str,
        unit_number: Option<u32>,
        filename: Option<String>,
    ) -> Self {
        let unit_number = unit_number.unwrap_or(default_unit);
        let filename = filename.unwrap_or_else(|| format!("{model_name}.{extension}"));
        let heading = format!("# {ftype} package for {version_title}, generated by gwflow.");

        Self {
            ftype: ftype.to_uppercase(),
            extension: extension.to_string(),
            unit_number,
            filename,
            heading,
            url: String::new(),
        }
    }

    /// 设置文档链接
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let meta = PackageMeta::resolve("SWR", "swr", 36, "basin", "MODFLOW-2005", None, None);
        assert_eq!(meta.ftype, "SWR");
        assert_eq!(meta.unit_number, 36);
        assert_eq!(meta.filename, "basin.swr");
        assert!(meta.heading.contains("SWR package"));
        assert!(meta.heading.contains("MODFLOW-2005"));
    }

    #[test]
    fn test_resolve_explicit() {
        let meta = PackageMeta::resolve(
            "SWR",
            "swr",
            36,
            "basin",
            "MODFLOW-NWT",
            Some(88),
            Some("custom.swr".to_string()),
        );
        assert_eq!(meta.unit_number, 88);
        assert_eq!(meta.filename, "custom.swr");
    }

    #[test]
    fn test_with_url() {
        let meta = PackageMeta::resolve("SWR", "swr", 36, "m", "MODFLOW-2005", None, None)
            .with_url("swr1.htm");
        assert_eq!(meta.url, "swr1.htm");
    }
}
