use std::path::PathBuf;
use std::time::Duration;

use crate::error::DurationError;

use super::duration::parse_duration;

pub const DEFAULT_URL: &str = "http://localhost";
pub const DEFAULT_COUNT: usize = 10;
pub const DEFAULT_CONCURRENCY: usize = 1;
pub const DEFAULT_TIMEOUT: &str = "10s";
pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_USER_AGENT: &str = "barrage";

/// One HTTP endpoint under test.
///
/// `headers`, `cookies` and `basic_auth` are kept in their raw delimited
/// form (`"Accept: text/html, X-Id: 7"`, `"a=b; c=d"`, `"user:pass"`) and
/// only parsed when requests are built. An empty `timeout` means the client
/// has no deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub url: String,
    /// Treat `url` as a regular expression and generate one URL per request.
    pub regex_url: bool,
    pub count: usize,
    pub concurrency: usize,
    pub timeout: String,
    pub method: String,
    pub body: String,
    /// Read the body from this file instead of `body`.
    pub body_filename: Option<PathBuf>,
    pub headers: String,
    pub cookies: String,
    pub user_agent: String,
    pub basic_auth: String,
    pub compress: bool,
    pub keep_alive: bool,
    pub follow_redirects: bool,
    pub no_http2: bool,
    pub enforce_ssl: bool,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_owned(),
            regex_url: false,
            count: DEFAULT_COUNT,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT.to_owned(),
            method: DEFAULT_METHOD.to_owned(),
            body: String::new(),
            body_filename: None,
            headers: String::new(),
            cookies: String::new(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            basic_auth: String::new(),
            compress: false,
            keep_alive: false,
            follow_redirects: true,
            no_http2: false,
            enforce_ssl: false,
        }
    }
}

impl Target {
    /// Creates a target for `url` with every other field at its default.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Parses the configured timeout, `None` when no timeout is set.
    ///
    /// # Errors
    ///
    /// Returns an error when the timeout string is not a valid duration.
    pub fn timeout_duration(&self) -> Result<Option<Duration>, DurationError> {
        if self.timeout.is_empty() {
            return Ok(None);
        }
        parse_duration(&self.timeout).map(Some)
    }
}

/// Targets plus the run-wide output switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub targets: Vec<Target>,
    /// Print the full request and response for every request.
    pub verbose: bool,
    /// Suppress per-request progress lines.
    pub quiet: bool,
}

impl RunConfig {
    #[must_use]
    pub const fn new(targets: Vec<Target>) -> Self {
        Self {
            targets,
            verbose: false,
            quiet: false,
        }
    }
}
