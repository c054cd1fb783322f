// crates/gw_model/src/packages/mod.rs

//! 过程软件包集合
//!
//! 每个子模块对应一个可选的过程软件包。

pub mod swr1;

pub use swr1::{Swr1Options, Swr1Package};
