// crates/gw_model/src/units.rs

//! 文件单元号管理
//!
//! 传统 MODFLOW 输入格式通过整数单元号把逻辑文件绑定到编号 I/O 通道。
//! 本模块提供:
//!
//! - 各软件包类型的默认保留单元号表
//! - [`UnitPool`]: 单元号占用跟踪与分配
//!
//! 单元号 0 非法, 5/6 被 MODFLOW 保留用于终端输入输出。

use gw_foundation::{GwError, GwResult};
use std::collections::BTreeMap;

/// 外部文件分配的起始单元号
pub const EXTERNAL_UNIT_START: u32 = 1001;

/// MODFLOW 保留的终端 I/O 单元号
const TERMINAL_UNITS: [u32; 2] = [5, 6];

/// 默认保留单元号表
///
/// 每个软件包类型标签对应一个约定俗成的单元号。
const RESERVED_UNITS: &[(&str, u32)] = &[
    ("LIST", 2),
    ("DIS", 11),
    ("BAS6", 13),
    ("OC", 14),
    ("LPF", 15),
    ("RIV", 18),
    ("RCH", 19),
    ("WEL", 20),
    ("DRN", 21),
    ("GHB", 23),
    ("EVT", 25),
    ("CHD", 24),
    ("PCG", 27),
    ("HOB", 29),
    ("SWR", 36),
];

/// 查询软件包类型的默认保留单元号
pub fn reserved_unit(ftype: &str) -> Option<u32> {
    let upper = ftype.to_uppercase();
    RESERVED_UNITS
        .iter()
        .find(|(tag, _)| *tag == upper)
        .map(|(_, unit)| *unit)
}

/// 校验单元号是否可用于绑定文件
pub fn validate_unit(unit: u32) -> GwResult<()> {
    if unit == 0 {
        return Err(GwError::invalid_unit(unit, "单元号必须为正"));
    }
    if TERMINAL_UNITS.contains(&unit) {
        return Err(GwError::invalid_unit(unit, "被保留用于终端 I/O"));
    }
    Ok(())
}

/// 单元号占用池
///
/// 跟踪已绑定的单元号及占用者, 防止同一模型的文件集出现冲突。
#[derive(Debug, Clone, Default)]
pub struct UnitPool {
    /// 单元号 -> 占用者标签
    used: BTreeMap<u32, String>,
}

impl UnitPool {
    /// 创建空池
    pub fn new() -> Self {
        Self::default()
    }

    /// 占用一个单元号
    ///
    /// 单元号非法或已被占用时返回错误。
    pub fn reserve(&mut self, unit: u32, owner: impl Into<String>) -> GwResult<()> {
        validate_unit(unit)?;
        let owner = owner.into();
        if let Some(first) = self.used.get(&unit) {
            return Err(GwError::unit_conflict(unit, first.clone(), owner));
        }
        self.used.insert(unit, owner);
        Ok(())
    }

    /// 释放一个单元号
    pub fn release(&mut self, unit: u32) -> Option<String> {
        self.used.remove(&unit)
    }

    /// 单元号是否已被占用
    pub fn is_used(&self, unit: u32) -> bool {
        self.used.contains_key(&unit)
    }

    /// 占用者标签
    pub fn owner(&self, unit: u32) -> Option<&str> {
        self.used.get(&unit).map(String::as_str)
    }

    /// 已占用的数量
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// 分配下一个可用的外部单元号
    ///
    /// 从 [`EXTERNAL_UNIT_START`] 起查找首个未占用的合法单元号。
    pub fn next_free(&self) -> u32 {
        let mut unit = EXTERNAL_UNIT_START;
        while self.used.contains_key(&unit) || TERMINAL_UNITS.contains(&unit) {
            unit += 1;
        }
        unit
    }

    /// 遍历占用表 (单元号升序)
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.used.iter().map(|(u, o)| (*u, o.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_units() {
        assert_eq!(reserved_unit("SWR"), Some(36));
        assert_eq!(reserved_unit("swr"), Some(36));
        assert_eq!(reserved_unit("LIST"), Some(2));
        assert_eq!(reserved_unit("XYZ"), None);
    }

    #[test]
    fn test_validate_unit() {
        assert!(validate_unit(0).is_err());
        assert!(validate_unit(5).is_err());
        assert!(validate_unit(6).is_err());
        assert!(validate_unit(36).is_ok());
    }

    #[test]
    fn test_reserve_and_conflict() {
        let mut pool = UnitPool::new();
        pool.reserve(36, "SWR").unwrap();
        assert!(pool.is_used(36));
        assert_eq!(pool.owner(36), Some("SWR"));

        let err = pool.reserve(36, "WEL").unwrap_err();
        assert!(matches!(err, GwError::UnitConflict { unit: 36, .. }));
    }

    #[test]
    fn test_reserve_invalid() {
        let mut pool = UnitPool::new();
        assert!(pool.reserve(0, "DIS").is_err());
        assert!(pool.reserve(6, "DIS").is_err());
    }

    #[test]
    fn test_release() {
        let mut pool = UnitPool::new();
        pool.reserve(36, "SWR").unwrap();
        assert_eq!(pool.release(36), Some("SWR".to_string()));
        assert!(!pool.is_used(36));
        pool.reserve(36, "SWR").unwrap();
    }

    #[test]
    fn test_next_free_skips_used() {
        let mut pool = UnitPool::new();
        assert_eq!(pool.next_free(), EXTERNAL_UNIT_START);
        pool.reserve(EXTERNAL_UNIT_START, "a").unwrap();
        pool.reserve(EXTERNAL_UNIT_START + 1, "b").unwrap();
        assert_eq!(pool.next_free(), EXTERNAL_UNIT_START + 2);
    }
}
