// crates/gw_model/src/version.rs

//! MODFLOW 模型版本
//!
//! 名称文件体系支持四个传统 MODFLOW 变体。版本标签用于
//! 兼容性检查和生成文件头注释。

use gw_foundation::{GwError, GwResult};
use serde::{Deserialize, Serialize};

/// MODFLOW 模型版本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MfVersion {
    /// MODFLOW-2000
    Mf2k,
    /// MODFLOW-2005
    #[default]
    Mf2005,
    /// MODFLOW-NWT
    Mfnwt,
    /// MODFLOW-USG
    Mfusg,
}

impl MfVersion {
    /// 所有支持的版本
    pub const ALL: [MfVersion; 4] = [
        MfVersion::Mf2k,
        MfVersion::Mf2005,
        MfVersion::Mfnwt,
        MfVersion::Mfusg,
    ];

    /// 短标签 (配置文件中使用)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mf2k => "mf2k",
            Self::Mf2005 => "mf2005",
            Self::Mfnwt => "mfnwt",
            Self::Mfusg => "mfusg",
        }
    }

    /// 显示名称 (文件头注释中使用)
    pub fn title(&self) -> &'static str {
        match self {
            Self::Mf2k => "MODFLOW-2000",
            Self::Mf2005 => "MODFLOW-2005",
            Self::Mfnwt => "MODFLOW-NWT",
            Self::Mfusg => "MODFLOW-USG",
        }
    }

    /// 从短标签解析
    pub fn parse(tag: &str) -> GwResult<Self> {
        match tag.to_lowercase().as_str() {
            "mf2k" => Ok(Self::Mf2k),
            "mf2005" => Ok(Self::Mf2005),
            "mfnwt" => Ok(Self::Mfnwt),
            "mfusg" => Ok(Self::Mfusg),
            other => Err(GwError::invalid_input(format!(
                "未知的模型版本: {other} (支持: mf2k, mf2005, mfnwt, mfusg)"
            ))),
        }
    }
}

impl std::fmt::Display for MfVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for MfVersion {
    type Err = GwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for v in MfVersion::ALL {
            assert_eq!(MfVersion::parse(v.name()).unwrap(), v);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(MfVersion::parse("MF2005").unwrap(), MfVersion::Mf2005);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(MfVersion::parse("mf6").is_err());
    }

    #[test]
    fn test_titles() {
        assert_eq!(MfVersion::Mf2005.title(), "MODFLOW-2005");
        assert_eq!(MfVersion::Mfusg.title(), "MODFLOW-USG");
    }

    #[test]
    fn test_default() {
        assert_eq!(MfVersion::default(), MfVersion::Mf2005);
    }
}
