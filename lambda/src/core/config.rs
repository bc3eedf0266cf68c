use std::env;

use crate::errors::StoreError;

pub const MONGODB_URI_VAR: &str = "MONGODB_URI";
pub const MONGODB_DB_VAR: &str = "MONGODB_DB";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongodb_uri: String,
    /// Overrides the database named in the URI.
    pub database: Option<String>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `StoreError::Configuration` if `MONGODB_URI` is unset or blank.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Configuration` if `MONGODB_URI` is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            mongodb_uri: non_blank(MONGODB_URI_VAR).ok_or_else(|| {
                StoreError::Configuration(format!("{MONGODB_URI_VAR} is not defined"))
            })?,
            database: non_blank(MONGODB_DB_VAR),
        })
    }
}
