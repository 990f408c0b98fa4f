//! Error definitions.
use std::error::Error;
use std::{fmt, result};

/// A specialized Result type for this library.
pub type Result<T, E = FindNeardupError> = result::Result<T, E>;

/// Errors in find-neardup.
#[derive(Debug)]
pub enum FindNeardupError {
    /// Contains [`ConfigError`].
    Config(ConfigError),
    /// Contains [`InputError`].
    Input(InputError),
}

impl fmt::Display for FindNeardupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Config(e) => e.fmt(f),
            Self::Input(e) => e.fmt(f),
        }
    }
}

impl Error for FindNeardupError {}

impl FindNeardupError {
    pub(crate) const fn config(msg: &'static str) -> Self {
        Self::Config(ConfigError { msg })
    }

    pub(crate) const fn input(msg: &'static str) -> Self {
        Self::Input(InputError { msg })
    }
}

/// Error used when a configuration parameter is invalid.
#[derive(Debug)]
pub struct ConfigError {
    msg: &'static str,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ConfigError: {}", self.msg)
    }
}

/// Error used when the input argument is invalid.
#[derive(Debug)]
pub struct InputError {
    msg: &'static str,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InputError: {}", self.msg)
    }
}
