// crates/gw_model/src/lib.rs

//! GwFlow Model Layer
//!
//! 地下水模型输入文件集的组合与校验。
//!
//! # 模块概览
//!
//! - [`version`]: MODFLOW 模型版本
//! - [`units`]: 文件单元号管理
//! - [`namefile`]: 名称文件读写与外部单元号字典
//! - [`package`]: 软件包抽象与公共簿记字段
//! - [`model`]: 模型对象与软件包注册中心
//! - [`packages`]: 过程软件包 (SWR1)
//!
//! # 示例
//!
//! ```
//! use gw_model::{Model, MfVersion};
//! use gw_model::packages::{Swr1Options, Swr1Package};
//!
//! let mut model = Model::new("basin", MfVersion::Mf2005);
//! Swr1Package::attach(&mut model, Swr1Options::default()).unwrap();
//!
//! let mut buffer = Vec::new();
//! model.write_name_file_to(&mut buffer).unwrap();
//! let text = String::from_utf8(buffer).unwrap();
//! assert!(text.contains("SWR 36 basin.swr"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod model;
pub mod namefile;
pub mod package;
pub mod packages;
pub mod units;
pub mod version;

// 重导出核心类型
pub use model::{Model, ModelSummary, DEFAULT_LIST_UNIT};
pub use namefile::{ExtUnitDict, NamefileEntry};
pub use package::{Package, PackageMeta};
pub use units::{reserved_unit, UnitPool};
pub use version::MfVersion;
