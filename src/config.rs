use std::str::FromStr;

use crate::error::{ApiError, Result};

pub const DEFAULT_NAMESPACE: &str = "global";
pub const DEFAULT_DATABASE: &str = "main";

/// Where table listings and table data come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogKind {
    #[default]
    Mock,
    Live,
}

impl FromStr for CatalogKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(CatalogKind::Mock),
            "live" => Ok(CatalogKind::Live),
            other => Err(ApiError::InvalidConfig {
                key: "DATA_CATALOG".to_string(),
                msg: format!("expected `mock` or `live`, got `{other}`"),
            }),
        }
    }
}

#[derive(Clone)]
pub struct Credentials {
    pub user: String,
    pub pass: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("pass", &"***")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub cred: Credentials,
    pub catalog: CatalogKind,
}

impl Config {
    /// Reads the configuration from the process environment, after loading
    /// a `.env` file when one is present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ApiError::MissingConfig(key.to_string()))
        };

        let url = required("DB_URL")?;
        let user = required("DB_USER")?;
        let pass = required("DB_PASS")?;

        let namespace = lookup("DB_NS").unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        let database = lookup("DB_DB").unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let catalog = match lookup("DATA_CATALOG") {
            Some(value) => value.parse()?,
            None => CatalogKind::default(),
        };

        Ok(Self {
            url,
            namespace,
            database,
            cred: Credentials { user, pass },
            catalog,
        })
    }
}
