use std::path::Path;

use serde::Deserialize;

use crate::domain::{error::CryptifyError, models::field_path::FieldPath};

pub const DEFAULT_FACTOR: u32 = 10;

pub const PATHS_VAR: &str = "CRYPTIFY_PATHS";
pub const FACTOR_VAR: &str = "CRYPTIFY_FACTOR";
pub const DISABLE_COMPARATOR_VAR: &str = "CRYPTIFY_DISABLE_COMPARATOR";

/// Options hash accepted at registration time, as written by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptifyOptions {
    pub paths: Option<Vec<String>>,
    pub factor: Option<u32>,
    pub disable_comparator: Option<bool>,
}

impl CryptifyOptions {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: Some(paths.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn with_factor(mut self, factor: u32) -> Self {
        self.factor = Some(factor);
        self
    }

    pub fn with_disable_comparator(mut self, disable: bool) -> Self {
        self.disable_comparator = Some(disable);
        self
    }

    /// Read options from the process environment, loading `.env` first when present.
    ///
    /// `CRYPTIFY_PATHS` is a comma separated list of dotted paths.
    pub fn from_env() -> Result<Self, CryptifyError> {
        load_dotenv(dotenvy::dotenv())?;
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit env file location.
    pub fn from_env_path<P: AsRef<Path>>(path: P) -> Result<Self, CryptifyError> {
        load_dotenv(dotenvy::from_path(path.as_ref()))?;
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CryptifyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let paths = lookup(PATHS_VAR).map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|path| !path.is_empty())
                .map(str::to_string)
                .collect()
        });

        let factor = lookup(FACTOR_VAR)
            .map(|raw| {
                raw.trim().parse::<u32>().map_err(|e| {
                    CryptifyError::InvalidOption(format!("{FACTOR_VAR}={raw}: {e}"))
                })
            })
            .transpose()?;

        let disable_comparator = lookup(DISABLE_COMPARATOR_VAR)
            .map(|raw| {
                raw.trim().parse::<bool>().map_err(|e| {
                    CryptifyError::InvalidOption(format!("{DISABLE_COMPARATOR_VAR}={raw}: {e}"))
                })
            })
            .transpose()?;

        Ok(Self {
            paths,
            factor,
            disable_comparator,
        })
    }

    /// Validate the options and parse every path.
    pub fn configure(&self) -> Result<CryptifyConfig, CryptifyError> {
        let paths = match &self.paths {
            Some(paths) if !paths.is_empty() => paths,
            _ => return Err(CryptifyError::Configuration),
        };

        Ok(CryptifyConfig {
            paths: paths.iter().map(|path| FieldPath::parse(path)).collect(),
            // zero falls back to the default like an unset factor
            cost: self.factor.filter(|f| *f > 0).unwrap_or(DEFAULT_FACTOR),
            enable_comparator: self.disable_comparator != Some(true),
        })
    }
}

/// A missing env file is fine; anything else the loader reports is not.
fn load_dotenv<T>(result: Result<T, dotenvy::Error>) -> Result<(), CryptifyError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(CryptifyError::InvalidOption(format!("env file: {e}"))),
    }
}

/// Validated configuration, built once per schema registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptifyConfig {
    paths: Vec<FieldPath>,
    cost: u32,
    enable_comparator: bool,
}

impl CryptifyConfig {
    pub fn paths(&self) -> &[FieldPath] {
        &self.paths
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn enable_comparator(&self) -> bool {
        self.enable_comparator
    }
}
