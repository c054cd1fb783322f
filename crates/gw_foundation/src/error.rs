// crates/gw_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `GwError` 枚举和 `GwResult` 类型别名，用于整个项目的错误处理。
//!
//! # 设计原则
//!
//! 1. **层次化**: 基础层只定义核心错误，模型相关错误在 gw_model 中扩展
//! 2. **易用性**: 提供便捷的构造方法
//! 3. **可追溯**: 支持错误链
//!
//! # 示例
//!
//! ```
//! use gw_foundation::error::{GwError, GwResult};
//!
//! fn read_namefile() -> GwResult<()> {
//!     Err(GwError::parse("model.nam", 3, "单元号无法解析"))
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// 统一结果类型
pub type GwResult<T> = Result<T, GwError>;

/// GwFlow 错误类型
///
/// 核心错误类型，用于整个项目。各软件包自身的错误应在 `gw_model` 中扩展。
#[derive(Error, Debug)]
pub enum GwError {
    /// IO 错误
    #[error("IO错误: {message}")]
    Io {
        /// 描述性错误信息
        message: String,
        #[source]
        /// 可选的底层 IO 错误
        source: Option<std::io::Error>,
    },

    /// 文件不存在
    #[error("文件不存在: {path}")]
    FileNotFound {
        /// 未找到的路径
        path: PathBuf,
    },

    /// 文件解析错误
    #[error("文件解析错误: {file} 第{line}行: {message}")]
    ParseError {
        /// 文件路径
        file: PathBuf,
        /// 行号
        line: usize,
        /// 错误信息
        message: String,
    },

    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },

    /// 软件包与模型版本不兼容
    #[error("软件包 {package} 不能用于模型版本 {version}")]
    UnsupportedVersion {
        /// 软件包类型标签
        package: String,
        /// 模型版本标签
        version: String,
    },

    /// 文件单元号冲突
    #[error("单元号冲突: {unit} 已被 {first} 占用, {second} 重复申请")]
    UnitConflict {
        /// 冲突的单元号
        unit: u32,
        /// 首个占用者
        first: String,
        /// 重复申请者
        second: String,
    },

    /// 无效的文件单元号
    #[error("无效的单元号: {unit} - {reason}")]
    InvalidUnit {
        /// 单元号
        unit: u32,
        /// 无效原因
        reason: String,
    },

    /// 配置错误
    #[error("配置错误: {message}")]
    Config {
        /// 具体错误信息
        message: String,
    },

    /// 功能未实现
    #[error("功能未实现: {feature}")]
    NotImplemented {
        /// 未实现的功能描述
        feature: String,
    },

    /// 资源未找到
    #[error("资源未找到: {resource}")]
    NotFound {
        /// 资源名称
        resource: String,
    },
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl GwError {
    /// 从IO错误创建
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// 从IO错误创建（带源）
    pub fn io_with_source(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(source),
        }
    }

    /// 文件不存在
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// 解析错误
    pub fn parse(file: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// 无效输入
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// 版本不兼容
    pub fn unsupported_version(package: impl Into<String>, version: impl Into<String>) -> Self {
        Self::UnsupportedVersion {
            package: package.into(),
            version: version.into(),
        }
    }

    /// 单元号冲突
    pub fn unit_conflict(unit: u32, first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::UnitConflict {
            unit,
            first: first.into(),
            second: second.into(),
        }
    }

    /// 无效单元号
    pub fn invalid_unit(unit: u32, reason: impl Into<String>) -> Self {
        Self::InvalidUnit {
            unit,
            reason: reason.into(),
        }
    }

    /// 配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// 功能未实现
    pub fn not_implemented(feature: impl Into<String>) -> Self {
        Self::NotImplemented {
            feature: feature.into(),
        }
    }

    /// 资源未找到
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}

// ========================================================================
// 标准库错误转换
// ========================================================================

impl From<std::io::Error> for GwError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

// ========================================================================
// 测试
// ========================================================================
