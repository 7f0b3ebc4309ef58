//! Typed view of the `ENVIRONMENT` variable a lambda is deployed with

use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Name of the variable the deployment environment is read from
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// The environment a lambda is currently running in
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production account
    Production,
    /// Dev account
    Develop,
    /// Running on a developer machine
    Local,
}

/// An error which can occur when reading the [Environment]
#[derive(Debug, Error)]
pub enum EnvErr {
    /// the variable was not present or not unicode
    #[error("could not read ENVIRONMENT: {0}")]
    Missing(#[from] std::env::VarError),
    /// the variable was present but held an unknown value
    #[error(transparent)]
    InvalidValue(#[from] UnknownValue),
}

impl Environment {
    /// Attempt to read the [Environment] from the process environment
    #[tracing::instrument(err, level = tracing::Level::TRACE)]
    pub fn new_from_env() -> Result<Self, EnvErr> {
        let raw = std::env::var(ENVIRONMENT_VAR)?;
        Ok(Self::from_str(&raw)?)
    }

    /// Read the [Environment], falling back to [Environment::Production] when it is missing or invalid
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

/// A value which cannot be converted into an [Environment]
#[derive(Debug, Error, PartialEq, Eq)]
#[error("could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownValue(s.to_string())),
        }
    }
}
