use crate::error::{Result, SortError};
use crate::strategy::StrategyKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_repeat() -> usize {
    1
}

/// Demo run settings, usually read from a small TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortConfig {
    #[serde(default)]
    pub strategy: StrategyKind,
    #[serde(default)]
    pub values: Vec<i32>,
    #[serde(default = "default_repeat")]
    pub repeat: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            values: Vec::new(),
            repeat: default_repeat(),
        }
    }
}

impl SortConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SortConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| SortError::io(path, err))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.repeat == 0 {
            return Err(SortError::invalid_value("repeat = 0", "must sort at least once"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_apply_to_empty_document() {
        let config = SortConfig::from_toml_str("").unwrap();
        assert_eq!(config, SortConfig::default());
        assert_eq!(config.strategy, StrategyKind::Quick);
        assert_eq!(config.repeat, 1);
    }

    #[test]
    fn test_full_document() {
        let config = SortConfig::from_toml_str(
            r#"
            strategy = "bubble"
            values = [5, 1, 4, 2, 8]
            repeat = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.strategy, StrategyKind::Bubble);
        assert_eq!(config.values, vec![5, 1, 4, 2, 8]);
        assert_eq!(config.repeat, 3);
    }

    #[test]
    fn test_rejects_unknown_strategy_and_fields() {
        let err = SortConfig::from_toml_str(r#"strategy = "heap""#).unwrap_err();
        assert!(matches!(err, SortError::ConfigParse { .. }));

        let err = SortConfig::from_toml_str("speed = 11").unwrap_err();
        assert!(matches!(err, SortError::ConfigParse { .. }));
    }

    #[test]
    fn test_rejects_zero_repeat() {
        let err = SortConfig::from_toml_str("repeat = 0").unwrap_err();
        assert!(matches!(err, SortError::InvalidValue { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "strategy = \"quick\"\nvalues = [3, -1, 2]").unwrap();

        let config = SortConfig::from_file(file.path()).unwrap();
        assert_eq!(config.values, vec![3, -1, 2]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SortConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, SortError::Io { .. }));
    }
}
