//! Validation of driver-supplied configuration.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no vector sizes supplied")]
    NoSizes,
    #[error("invalid vector size {0:?}, expected a positive integer")]
    InvalidLen(String),
}

impl ConfigError {
    /// Driver process exit code. Missing arguments and an invalid size are
    /// distinct conditions.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::NoSizes => 1,
            ConfigError::InvalidLen(_) => 2,
        }
    }
}

/// Parses one vector size argument. Anything that is not a positive integer
/// is a configuration error, there is no recovery.
pub fn parse_len(arg: &str) -> Result<usize, ConfigError> {
    match arg.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n as usize),
        _ => Err(ConfigError::InvalidLen(arg.to_owned())),
    }
}
