// crates/gw_foundation/src/lib.rs

//! GwFlow Foundation Layer
//!
//! 基础层，提供整个项目的基础抽象。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型
//!
//! # 设计原则
//!
//! 1. **最小依赖**: 仅依赖 thiserror
//! 2. **层次化**: 上层（gw_model, gw_cli）在此基础上扩展
//!
//! # 示例
//!
//! ```
//! use gw_foundation::error::{GwError, GwResult};
//!
//! fn check_unit(unit: u32) -> GwResult<()> {
//!     if unit == 0 {
//!         return Err(GwError::invalid_unit(unit, "单元号必须为正"));
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

// 重导出常用类型
pub use error::{GwError, GwResult};

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::error::{GwError, GwResult};
}
