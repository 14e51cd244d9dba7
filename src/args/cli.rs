use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::stress::{
    DEFAULT_CONCURRENCY, DEFAULT_COUNT, DEFAULT_METHOD, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fixed-volume HTTP stress tester: send N requests per target, K at a time, and report how they went."
)]
pub struct StressArgs {
    /// Target URLs; replace the targets of a config file when given
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Number of requests to send per target
    #[arg(long = "num", short = 'n', default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Number of requests in flight at once per target
    #[arg(long = "concurrent", short = 'c', default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-request timeout (e.g. 500ms, 10s, 1m30s); empty for none
    #[arg(long, short = 't', default_value = DEFAULT_TIMEOUT)]
    pub timeout: String,

    /// HTTP method to use
    #[arg(long = "request-method", short = 'X', default_value = DEFAULT_METHOD)]
    pub method: String,

    /// Request body
    #[arg(long, default_value = "")]
    pub body: String,

    /// Read the request body from a file
    #[arg(long = "body-file", conflicts_with = "body")]
    pub body_file: Option<PathBuf>,

    /// HTTP headers as 'Key: Value' pairs separated by commas
    #[arg(long, short = 'H', default_value = "")]
    pub headers: String,

    /// Cookies as 'name=value' pairs separated by semicolons
    #[arg(long, default_value = "")]
    pub cookies: String,

    /// User-Agent header value
    #[arg(long = "user-agent", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Basic auth credentials as 'user:password'
    #[arg(long = "basic-auth", default_value = "")]
    pub basic_auth: String,

    /// Treat each URL as a regular expression and generate one URL per request
    #[arg(long, short = 'r')]
    pub regex: bool,

    /// Accept gzip, brotli and deflate encoded responses
    #[arg(long, short = 'C')]
    pub compress: bool,

    /// Reuse connections between requests
    #[arg(long, short = 'k')]
    pub keepalive: bool,

    /// Do not follow redirects
    #[arg(long = "no-follow", action = ArgAction::SetFalse)]
    pub follow_redirects: bool,

    /// Restrict connections to HTTP/1.1
    #[arg(long = "no-http2")]
    pub no_http2: bool,

    /// Reject invalid TLS certificates and host names
    #[arg(long = "enforce-ssl", short = 'S')]
    pub enforce_ssl: bool,

    /// Print the full request and response for every request
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Suppress per-request output and summaries
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Path to a TOML or JSON config file (defaults to ./barrage.toml or ./barrage.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write summaries and raw request stats to a JSON file
    #[arg(long = "output-json")]
    pub output_json: Option<PathBuf>,
}
