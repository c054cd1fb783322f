// apps/gw_cli/src/commands/mod.rs

//! CLI 子命令

pub mod info;
pub mod validate;
