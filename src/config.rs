use crate::{
    config::date_locale::DateLocaleConfig,
    error::{BadEnvVarSnafu, DirectoryError, DirectoryResult, ParseTimeoutSnafu},
};
use dotenvy::var;
use reqwest::Url;
use snafu::ResultExt;
use std::{sync::Arc, time::Duration};

pub mod date_locale;

pub const DEFAULT_API_URL: &str = "https://student-crud-37cq.onrender.com/api/v2";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    api_config: Arc<ApiConfig>,
    date_locale_config: Arc<DateLocaleConfig>,
    server_ip: String,
}

/// Reads an optional env var, treating "not present" as `None` and any other failure as an error.
fn optional_env_var(name: &'static str) -> DirectoryResult<Option<String>> {
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(e) => Err(e).context(BadEnvVarSnafu { name }),
    }
}

impl RuntimeConfiguration {
    pub fn new() -> DirectoryResult<Self> {
        let locale = optional_env_var("DIRECTORY_LOCALE")?.unwrap_or_else(|| "en-US".to_string());
        let calendar =
            optional_env_var("DIRECTORY_CALENDAR")?.unwrap_or_else(|| "gregorian".to_string());

        Ok(Self::from_parts(
            ApiConfig::new()?,
            DateLocaleConfig::new(locale, calendar)?,
            optional_env_var("DIRECTORY_SERVER_IP")?
                .unwrap_or_else(|| DEFAULT_SERVER_IP.to_string()),
        ))
    }

    pub fn from_parts(
        api_config: ApiConfig,
        date_locale_config: DateLocaleConfig,
        server_ip: String,
    ) -> Self {
        Self {
            api_config: Arc::new(api_config),
            date_locale_config: Arc::new(date_locale_config),
            server_ip,
        }
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }

    pub fn date_locale_config(&self) -> Arc<DateLocaleConfig> {
        self.date_locale_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
    timeout: Duration,
}

impl ApiConfig {
    pub fn new() -> DirectoryResult<Self> {
        let name = "STUDENTS_API_TIMEOUT_SECS";
        let timeout = match optional_env_var(name)? {
            Some(secs) => secs.trim().parse().context(ParseTimeoutSnafu { name })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let base_url =
            optional_env_var("STUDENTS_API_URL")?.unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self::from_parts(&base_url, Duration::from_secs(timeout))
    }

    pub fn from_parts(base_url: &str, timeout: Duration) -> DirectoryResult<Self> {
        let base_url = Url::parse(base_url.trim()).map_err(|e| DirectoryError::InvalidApiUrl {
            provided: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DirectoryError::InvalidApiUrl {
                provided: base_url.to_string(),
                reason: "not a base url".to_string(),
            });
        }

        Ok(Self { base_url, timeout })
    }

    /// `{base}/students`
    pub fn students_url(&self) -> String {
        format!("{}/students", self.base_url.as_str().trim_end_matches('/'))
    }

    /// `{base}/students/{roll_no}`
    pub fn student_url(&self, roll_no: impl std::fmt::Display) -> String {
        format!("{}/{roll_no}", self.students_url())
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
