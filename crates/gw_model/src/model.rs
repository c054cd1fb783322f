// crates/gw_model/src/model.rs

//! 模型对象
//!
//! [`Model`] 持有软件包集合并维护类型标签索引, 负责:
//!
//! - 软件包注册/替换/移除 (同一类型标签只保留一个)
//! - 单元号一致性检查
//! - 名称文件生成

use gw_foundation::{GwError, GwResult};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::namefile::NamefileEntry;
use crate::package::Package;
use crate::units::UnitPool;
use crate::version::MfVersion;

/// 模型监听文件 (listing file) 的默认单元号
pub const DEFAULT_LIST_UNIT: u32 = 2;

/// 模型摘要 (可序列化, 用于报告输出)
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    /// 模型名称
    pub name: String,
    /// 模型版本标签
    pub version: String,
    /// 监听文件单元号
    pub listing_unit: u32,
    /// 名称文件记录 (含监听文件)
    pub entries: Vec<NamefileEntry>,
}

/// 地下水模型对象
///
/// 软件包注册中心: 每个软件包按固定类型标签索引, 重复注册同一
/// 标签时替换旧包并发出警告。
pub struct Model {
    /// 模型名称 (默认文件名的词干)
    name: String,
    /// 模型版本
    version: MfVersion,
    /// 监听文件单元号
    listing_unit: u32,
    /// 已注册的软件包
    packages: Vec<Box<dyn Package>>,
    /// 类型标签到索引的映射
    ftype_index: HashMap<String, usize>,
}

impl Model {
    /// 创建模型
    pub fn new(name: impl Into<String>, version: MfVersion) -> Self {
        Self {
            name: name.into(),
            version,
            listing_unit: DEFAULT_LIST_UNIT,
            packages: Vec::new(),
            ftype_index: HashMap::new(),
        }
    }

    /// 模型名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 模型版本
    pub fn version(&self) -> MfVersion {
        self.version
    }

    /// 监听文件单元号
    pub fn listing_unit(&self) -> u32 {
        self.listing_unit
    }

    /// 设置监听文件单元号
    pub fn set_listing_unit(&mut self, unit: u32) {
        self.listing_unit = unit;
    }

    /// 注册软件包
    ///
    /// 同一类型标签重复注册时替换旧包并发出警告。
    pub fn add_package(&mut self, package: Box<dyn Package>) {
        let ftype = package.ftype().to_uppercase();
        if let Some(&idx) = self.ftype_index.get(&ftype) {
            tracing::warn!("软件包 {} 已存在, 替换旧包", ftype);
            self.packages[idx] = package;
            return;
        }
        tracing::debug!("注册软件包 {} (单元号 {})", ftype, package.unit_number());
        let idx = self.packages.len();
        self.packages.push(package);
        self.ftype_index.insert(ftype, idx);
    }

    /// 按类型标签获取软件包
    pub fn get_package(&self, ftype: &str) -> Option<&dyn Package> {
        self.ftype_index
            .get(&ftype.to_uppercase())
            .and_then(|&idx| self.packages.get(idx))
            .map(|p| p.as_ref())
    }

    /// 移除软件包
    pub fn remove_package(&mut self, ftype: &str) -> bool {
        if let Some(idx) = self.ftype_index.remove(&ftype.to_uppercase()) {
            self.packages.swap_remove(idx);
            // 重建索引
            self.ftype_index.clear();
            for (i, p) in self.packages.iter().enumerate() {
                self.ftype_index.insert(p.ftype().to_uppercase(), i);
            }
            return true;
        }
        false
    }

    /// 所有已注册的类型标签
    pub fn package_ftypes(&self) -> Vec<&str> {
        self.packages.iter().map(|p| p.ftype()).collect()
    }

    /// 软件包数量
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// 构建单元号占用池
    ///
    /// 包含监听文件和全部软件包, 发现冲突时返回错误。
    pub fn unit_pool(&self) -> GwResult<UnitPool> {
        let mut pool = UnitPool::new();
        pool.reserve(self.listing_unit, "LIST")?;
        for p in &self.packages {
            pool.reserve(p.unit_number(), p.ftype().to_uppercase())?;
        }
        Ok(pool)
    }

    /// 名称文件头注释
    pub fn namefile_heading(&self) -> String {
        format!(
            "# Name file for {}, generated by gwflow.",
            self.version.title()
        )
    }

    /// 名称文件记录集 (含监听文件, 单元号校验后)
    fn namefile_entries(&self) -> GwResult<Vec<NamefileEntry>> {
        // 先检查单元号一致性
        self.unit_pool()?;

        let mut entries = Vec::with_capacity(self.packages.len() + 1);
        entries.push(NamefileEntry::new(
            "LIST",
            self.listing_unit,
            format!("{}.list", self.name),
        ));
        for p in &self.packages {
            entries.push(p.namefile_entry());
        }
        Ok(entries)
    }

    /// 写入名称文件
    pub fn write_name_file<P: AsRef<Path>>(&self, path: P) -> GwResult<()> {
        let file = File::create(path.as_ref()).map_err(|e| {
            GwError::io_with_source(
                format!("无法创建名称文件 {}", path.as_ref().display()),
                e,
            )
        })?;
        let mut writer = BufWriter::new(file);
        self.write_name_file_to(&mut writer)?;
        tracing::info!(
            "名称文件已写入: {} ({} 条记录)",
            path.as_ref().display(),
            self.package_count() + 1
        );
        Ok(())
    }

    /// 写入名称文件到 writer
    pub fn write_name_file_to<W: Write>(&self, writer: &mut W) -> GwResult<()> {
        writeln!(writer, "{}", self.namefile_heading())
            .map_err(|e| GwError::io(e.to_string()))?;
        for entry in self.namefile_entries()? {
            writeln!(writer, "{}", entry.to_line()).map_err(|e| GwError::io(e.to_string()))?;
        }
        Ok(())
    }

    /// 生成模型摘要
    pub fn summary(&self) -> GwResult<ModelSummary> {
        Ok(ModelSummary {
            name: self.name.clone(),
            version: self.version.name().to_string(),
            listing_unit: self.listing_unit,
            entries: self.namefile_entries()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::PackageMeta;

    /// 最小测试软件包
    struct StubPackage {
        meta: PackageMeta,
    }

    impl StubPackage {
        fn new(ftype: &str, unit: u32, filename: &str) -> Self {
            Self {
                meta: PackageMeta::resolve(
                    ftype,
                    "dat",
                    unit,
                    "test",
                    "MODFLOW-2005",
                    Some(unit),
                    Some(filename.to_string()),
                ),
            }
        }
    }

    impl Package for StubPackage {
        fn ftype(&self) -> &str {
            &self.meta.ftype
        }
        fn unit_number(&self) -> u32 {
            self.meta.unit_number
        }
        fn file_name(&self) -> &str {
            &self.meta.filename
        }
        fn heading(&self) -> &str {
            &self.meta.heading
        }
        fn write_file(&self, _dir: &Path) -> GwResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut model = Model::new("test", MfVersion::Mf2005);
        model.add_package(Box::new(StubPackage::new("DIS", 11, "test.dis")));

        assert_eq!(model.package_count(), 1);
        let dis = model.get_package("dis").unwrap();
        assert_eq!(dis.unit_number(), 11);
    }

    #[test]
    fn test_replace_same_ftype() {
        let mut model = Model::new("test", MfVersion::Mf2005);
        model.add_package(Box::new(StubPackage::new("DIS", 11, "a.dis")));
        model.add_package(Box::new(StubPackage::new("DIS", 12, "b.dis")));

        assert_eq!(model.package_count(), 1);
        assert_eq!(model.get_package("DIS").unwrap().unit_number(), 12);
    }

    #[test]
    fn test_remove_package() {
        let mut model = Model::new("test", MfVersion::Mf2005);
        model.add_package(Box::new(StubPackage::new("DIS", 11, "test.dis")));
        model.add_package(Box::new(StubPackage::new("WEL", 20, "test.wel")));

        assert!(model.remove_package("DIS"));
        assert!(!model.remove_package("DIS"));
        assert_eq!(model.package_count(), 1);
        assert!(model.get_package("WEL").is_some());
    }

    #[test]
    fn test_unit_pool_conflict() {
        let mut model = Model::new("test", MfVersion::Mf2005);
        model.add_package(Box::new(StubPackage::new("DIS", 11, "test.dis")));
        model.add_package(Box::new(StubPackage::new("WEL", 11, "test.wel")));

        let err = model.unit_pool().unwrap_err();
        assert!(matches!(err, GwError::UnitConflict { unit: 11, .. }));
    }

    #[test]
    fn test_write_name_file_to() {
        let mut model = Model::new("basin", MfVersion::Mfnwt);
        model.add_package(Box::new(StubPackage::new("DIS", 11, "basin.dis")));

        let mut buffer = Vec::new();
        model.write_name_file_to(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Name file for MODFLOW-NWT"));
        assert!(text.contains("LIST 2 basin.list"));
        assert!(text.contains("DIS 11 basin.dis"));
    }

    #[test]
    fn test_summary() {
        let mut model = Model::new("basin", MfVersion::Mf2005);
        model.add_package(Box::new(StubPackage::new("DIS", 11, "basin.dis")));

        let summary = model.summary().unwrap();
        assert_eq!(summary.name, "basin");
        assert_eq!(summary.version, "mf2005");
        // LIST + DIS
        assert_eq!(summary.entries.len(), 2);
    }

    #[test]
    fn test_summary_serializes() {
        let mut model = Model::new("basin", MfVersion::Mf2005);
        model.add_package(Box::new(StubPackage::new("DIS", 11, "basin.dis")));

        let json = serde_json::to_string(&model.summary().unwrap()).unwrap();
        assert!(json.contains("\"name\":\"basin\""));
        assert!(json.contains("\"version\":\"mf2005\""));
        assert!(json.contains("\"ftype\":\"DIS\""));
    }
}
