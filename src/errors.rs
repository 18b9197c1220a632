use std::result::Result as StdResult;

use fintrack_config::ConfigError;
use fintrack_core::CoreError;
use thiserror::Error;

/// Unified error type for the engine, storage and configuration layers.
#[derive(Error, Debug)]
pub enum FintrackError {
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, FintrackError>;

/// User-facing error for the report binary.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FintrackError),
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Process exit code: `2` for bad invocations, `1` for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Core(FintrackError::InvalidInput(_)) => 2,
            CliError::Core(_) => 1,
        }
    }
}

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        FintrackError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        FintrackError::Storage(err.to_string())
    }
}

impl From<CoreError> for FintrackError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DataIntegrity(message) => FintrackError::DataIntegrity(message),
            CoreError::Validation(message) => FintrackError::InvalidInput(message),
            CoreError::Domain(inner) => FintrackError::InvalidInput(inner.to_string()),
            CoreError::Window(inner) => FintrackError::InvalidInput(inner.to_string()),
            CoreError::Storage(message) | CoreError::Serde(message) => {
                FintrackError::Storage(message)
            }
            CoreError::Io(err) => FintrackError::Storage(err.to_string()),
        }
    }
}

impl From<ConfigError> for FintrackError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => FintrackError::Storage(io.to_string()),
            ConfigError::Serde(message) | ConfigError::Invalid(message) => {
                FintrackError::Config(message)
            }
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(FintrackError::from(err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(FintrackError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_keep_their_category() {
        let integrity: FintrackError = CoreError::DataIntegrity("nan".into()).into();
        assert!(matches!(integrity, FintrackError::DataIntegrity(_)));

        let range: FintrackError = CoreError::Validation("bad range".into()).into();
        assert!(matches!(range, FintrackError::InvalidInput(_)));

        let missing: FintrackError =
            CoreError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")).into();
        assert!(matches!(missing, FintrackError::Storage(_)));
    }

    #[test]
    fn usage_and_input_errors_exit_with_two() {
        assert_eq!(CliError::Usage("help".into()).exit_code(), 2);
        assert_eq!(
            CliError::from(CoreError::Validation("2w".into())).exit_code(),
            2
        );
        assert_eq!(
            CliError::from(ConfigError::Serde("broken".into())).exit_code(),
            1
        );
    }
}
