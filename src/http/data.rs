use rand::Rng;
use rand::distributions::Distribution;
use rand_regex::Regex as RandRegex;
use reqwest::Url;

use crate::error::BuildError;

/// Bound on how many times `*`, `+` and `{n,}` repeat in generated URLs.
pub(crate) const REGEX_MAX_REPEAT: u32 = 10;

/// Where each request's URL comes from.
#[derive(Debug)]
pub(crate) enum UrlSource {
    Static(Url),
    Regex { pattern: String, regex: RandRegex },
}

impl UrlSource {
    pub(crate) fn from_pattern(pattern: String) -> Result<Self, BuildError> {
        match RandRegex::compile(&pattern, REGEX_MAX_REPEAT) {
            Ok(regex) => Ok(UrlSource::Regex { pattern, regex }),
            Err(err) => Err(BuildError::InvalidRegex {
                pattern,
                source: err,
            }),
        }
    }

    pub(crate) fn from_literal(url: &str) -> Result<Self, BuildError> {
        parse_url(url).map(UrlSource::Static)
    }

    pub(crate) fn next_url<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Url, BuildError> {
        match self {
            UrlSource::Static(url) => Ok(url.clone()),
            UrlSource::Regex { regex, .. } => {
                let generated: String = regex.sample(rng);
                parse_url(&generated)
            }
        }
    }

    pub(crate) fn describe(&self) -> &str {
        match self {
            UrlSource::Static(url) => url.as_str(),
            UrlSource::Regex { pattern, .. } => pattern,
        }
    }
}

pub(crate) fn parse_url(raw: &str) -> Result<Url, BuildError> {
    let url = Url::parse(raw).map_err(|err| BuildError::InvalidUrl {
        url: raw.to_owned(),
        source: err,
    })?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(BuildError::EmptyHost {
            url: raw.to_owned(),
        });
    }
    Ok(url)
}
