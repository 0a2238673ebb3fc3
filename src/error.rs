use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("No sort strategy is bound to the runner")]
    StrategyUnset,

    #[error("Unknown sort strategy '{name}' (expected one of: bubble, quick)")]
    UnknownStrategy { name: String },

    #[error("Invalid value '{token}': {reason}")]
    InvalidValue { token: String, reason: String },

    #[error("Failed to parse config: {message}")]
    ConfigParse { message: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl SortError {
    pub fn unknown_strategy(name: impl Into<String>) -> Self {
        Self::UnknownStrategy { name: name.into() }
    }

    pub fn invalid_value(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: &Path, err: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SortError {
    fn from(err: toml::de::Error) -> Self {
        SortError::ConfigParse {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = SortError::unknown_strategy("merge");
        assert_eq!(
            err.to_string(),
            "Unknown sort strategy 'merge' (expected one of: bubble, quick)"
        );

        let err = SortError::invalid_value("x1", "not an integer");
        assert_eq!(err.to_string(), "Invalid value 'x1': not an integer");
    }

    #[test]
    fn test_toml_error_converts_to_config_parse() {
        let err: SortError = toml::from_str::<toml::Value>("strategy = ")
            .unwrap_err()
            .into();
        assert!(matches!(err, SortError::ConfigParse { .. }));
    }
}
