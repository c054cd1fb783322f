// crates/gw_model/src/packages/swr1.rs

//! SWR1 地表水汇流软件包
//!
//! 占位软件包: 仅在名称文件中登记类型标签 `SWR` 和单元号,
//! 使组合后的模型文件集保持内部一致。序列化/反序列化逻辑
//! 尚未实现, [`Swr1Package::write_file`] 与 [`Swr1Package::load_from_path`]
//! 为仅发警告的桩方法。
//!
//! SWR1 过程与 MODFLOW-2000 和 MODFLOW-USG 不兼容, 构造时校验。
//!
//! # 示例
//!
//! ```
//! use gw_model::{Model, MfVersion};
//! use gw_model::packages::{Swr1Options, Swr1Package};
//!
//! let mut model = Model::new("basin", MfVersion::Mf2005);
//! Swr1Package::attach(&mut model, Swr1Options::default()).unwrap();
//! assert!(model.get_package("SWR").is_some());
//! ```

use gw_foundation::{GwError, GwResult};
use std::fs::File;
use std::io::BufRead;
use std::path::Path;

use crate::model::Model;
use crate::namefile::ExtUnitDict;
use crate::package::{Package, PackageMeta};
use crate::version::MfVersion;

/// SWR1 软件包构造选项
#[derive(Debug, Clone)]
pub struct Swr1Options {
    /// 文件扩展名
    pub extension: String,
    /// 单元号, 未指定时使用默认保留单元号 36
    pub unit_number: Option<u32>,
    /// 文件名, 未指定时由模型名和扩展名生成
    pub filename: Option<String>,
}

impl Default for Swr1Options {
    fn default() -> Self {
        Self {
            extension: "swr".to_string(),
            unit_number: None,
            filename: None,
        }
    }
}

/// SWR1 地表水汇流软件包
#[derive(Debug, Clone)]
pub struct Swr1Package {
    /// 公共簿记字段
    meta: PackageMeta,
}

impl Swr1Package {
    /// 固定类型标签
    pub const FTYPE: &'static str = "SWR";

    /// 默认保留单元号
    pub const DEFAULT_UNIT: u32 = 36;

    /// 在线文档页面
    pub const DOC_URL: &'static str = "swr1.htm";

    /// 构造 SWR1 软件包
    ///
    /// 模型版本为 MODFLOW-2000 或 MODFLOW-USG 时返回
    /// [`GwError::UnsupportedVersion`]。
    pub fn new(model: &Model, options: Swr1Options) -> GwResult<Self> {
        let version = model.version();
        if version == MfVersion::Mf2k || version == MfVersion::Mfusg {
            return Err(GwError::unsupported_version(Self::FTYPE, version.name()));
        }

        let meta = PackageMeta::resolve(
            Self::FTYPE,
            &options.extension,
            Self::DEFAULT_UNIT,
            model.name(),
            version.title(),
            options.unit_number,
            options.filename,
        )
        .with_url(Self::DOC_URL);

        Ok(Self { meta })
    }

    /// 构造并立即注册到模型
    pub fn attach(model: &mut Model, options: Swr1Options) -> GwResult<()> {
        let package = Self::new(model, options)?;
        model.add_package(Box::new(package));
        Ok(())
    }

    /// 公共簿记字段
    pub fn meta(&self) -> &PackageMeta {
        &self.meta
    }

    /// 从文件加载 (桩方法)
    ///
    /// 打开文件确认可读后立即关闭, 不解析任何内容, 返回按
    /// 外部单元号字典(若提供)或默认值构造的软件包。
    pub fn load_from_path<P: AsRef<Path>>(
        path: P,
        model: &Model,
        ext_unit_dict: Option<&ExtUnitDict>,
    ) -> GwResult<Self> {
        let path = path.as_ref();
        tracing::debug!("加载 SWR1 过程文件: {}", path.display());

        let file = File::open(path).map_err(|e| {
            GwError::io_with_source(format!("无法打开 SWR1 文件 {}", path.display()), e)
        })?;
        drop(file);

        Self::load_default(model, ext_unit_dict)
    }

    /// 从 reader 加载 (桩方法)
    ///
    /// 不读取任何内容, 行为与 [`Self::load_from_path`] 一致。
    pub fn load_from_reader<R: BufRead>(
        _reader: R,
        model: &Model,
        ext_unit_dict: Option<&ExtUnitDict>,
    ) -> GwResult<Self> {
        Self::load_default(model, ext_unit_dict)
    }

    /// 构造默认软件包, 单元号和文件名优先取自外部单元号字典
    fn load_default(model: &Model, ext_unit_dict: Option<&ExtUnitDict>) -> GwResult<Self> {
        tracing::warn!("SWR1 load 方法尚未完成, 返回默认 SWR1 对象");

        let mut options = Swr1Options::default();
        if let Some(dict) = ext_unit_dict {
            if let Some((unit, filename)) = dict.attr_for(Self::FTYPE) {
                options.unit_number = Some(unit);
                options.filename = Some(filename.to_string());
            }
        }

        Self::new(model, options)
    }
}

impl Package for Swr1Package {
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

    /// 写入软件包文件 (桩方法)
    ///
    /// 尚未实现, 仅发出警告, 不产生任何文件。
    fn write_file(&self, _dir: &Path) -> GwResult<()> {
        tracing::warn!("SWR1 write 方法尚未实现, 跳过 {}", self.meta.filename);
        Ok(())
    }
}
