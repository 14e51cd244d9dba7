use std::path::PathBuf;

use serde::Deserialize;

/// Per-target settings a config file may leave unset.
///
/// Used both for the file's global section and for each entry of
/// `targets`; unset fields fall through to the next layer.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetSettings {
    #[serde(alias = "num")]
    pub count: Option<usize>,
    #[serde(alias = "concurrent")]
    pub concurrency: Option<usize>,
    pub timeout: Option<String>,
    #[serde(alias = "request_method")]
    pub method: Option<String>,
    pub body: Option<String>,
    pub body_file: Option<PathBuf>,
    pub headers: Option<String>,
    pub cookies: Option<String>,
    pub user_agent: Option<String>,
    pub basic_auth: Option<String>,
    pub regex: Option<bool>,
    pub compress: Option<bool>,
    pub keepalive: Option<bool>,
    pub follow_redirects: Option<bool>,
    pub no_http2: Option<bool>,
    pub enforce_ssl: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetConfig {
    pub url: Option<String>,
    #[serde(flatten)]
    pub settings: TargetSettings,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub verbose: Option<bool>,
    pub quiet: Option<bool>,
    #[serde(flatten)]
    pub defaults: TargetSettings,
    pub targets: Option<Vec<TargetConfig>>,
}
