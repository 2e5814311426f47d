use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use url::Url;

use crate::error::HacError;

pub const DEFAULT_BASE_URL: &str = "https://hac.friscoisd.org/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36";

/// Everything the service needs to know about the portal and itself.
///
/// Built once at startup and shared read-only; the session establisher
/// takes its base URL and header values from here.
#[derive(Debug, Clone)]
pub struct HacConfig {
    pub base_url: Url,
    /// Value of the `Database` field on the logon form.
    pub database: String,
    pub user_agent: String,
    /// Pick a random browser user agent per session instead of `user_agent`.
    pub random_user_agent: bool,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub listen_addr: SocketAddr,
    pub log_level: LevelFilter,
}

impl Default for HacConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            database: "10".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            random_user_agent: false,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            log_level: LevelFilter::Info,
        }
    }
}

impl HacConfig {
    pub fn new(base_url: &str) -> Result<Self, HacError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Default::default()
        })
    }

    /// Reads `HAC_*` variables from the process environment.
    pub fn from_env() -> Result<Self, HacError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, HacError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("HAC_BASE_URL") {
            config.base_url = normalize_base_url(&url)?;
        }
        if let Some(database) = lookup("HAC_DATABASE") {
            config.database = database;
        }
        if let Some(user_agent) = lookup("HAC_USER_AGENT") {
            config.user_agent = user_agent;
        }
        if let Some(flag) = lookup("HAC_RANDOM_USER_AGENT") {
            config.random_user_agent = parse_value("HAC_RANDOM_USER_AGENT", &flag)?;
        }
        if let Some(secs) = lookup("HAC_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse_value("HAC_TIMEOUT_SECS", &secs)?);
        }
        if let Some(secs) = lookup("HAC_CONNECT_TIMEOUT_SECS") {
            config.connect_timeout =
                Duration::from_secs(parse_value("HAC_CONNECT_TIMEOUT_SECS", &secs)?);
        }
        if let Some(addr) = lookup("HAC_LISTEN_ADDR") {
            config.listen_addr = parse_value("HAC_LISTEN_ADDR", &addr)?;
        }
        if let Some(level) = lookup("HAC_LOG_LEVEL") {
            config.log_level = parse_value("HAC_LOG_LEVEL", &level)?;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, HacError> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_random_user_agent(mut self, random: bool) -> Self {
        self.random_user_agent = random;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_listen_addr(mut self, addr: SocketAddr) -> Self {
        self.listen_addr = addr;
        self
    }

    /// Absolute URL of a portal page, e.g. `HomeAccess/Content/Student/Classes.aspx`.
    pub fn page_url(&self, path: &str) -> Result<Url, HacError> {
        Ok(self.base_url.join(path)?)
    }

    /// `scheme://host[:port]` of the portal, sent as the `Origin` header.
    pub fn origin(&self) -> String {
        self.base_url.origin().ascii_serialization()
    }
}

// Relative joins drop the last path segment unless the base ends with '/'.
fn normalize_base_url(raw: &str) -> Result<Url, HacError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|err| HacError::config(&format!("invalid HAC_BASE_URL `{raw}`: {err}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, HacError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|err| HacError::config(&format!("invalid {key} `{raw}`: {err}")))
}
