use rand::Rng;
use rand::thread_rng;
use reqwest::header::{COOKIE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Body, Method, Request};

use crate::error::BuildError;
use crate::stress::Target;

use super::builders_auth::basic_auth_value;
use super::data::UrlSource;
use super::keyval::parse_key_values;

/// Shortest URL that can still hold a scheme and a host.
const MIN_URL_LEN: usize = 8;
const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Everything about a target's requests that does not change between them.
///
/// Preparing once per target reads the body file, compiles the URL regex
/// and parses header, cookie and auth strings a single time; each call to
/// [`RequestPlan::materialize`] then only generates a URL and clones the
/// prepared parts.
#[derive(Debug)]
pub struct RequestPlan {
    method: Method,
    url: UrlSource,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl RequestPlan {
    /// Resolves a target into a reusable request plan.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is missing, too short, not a valid URL
    /// or regex, when the body file cannot be read, when the method is not a
    /// valid token, or when headers, cookies or basic auth are malformed.
    pub fn prepare(target: &Target) -> Result<Self, BuildError> {
        let url = resolve_url_source(target)?;
        let body = resolve_body(target)?;
        let method = resolve_method(&target.method)?;
        let headers = build_headers(target)?;
        Ok(Self {
            method,
            url,
            headers,
            body,
        })
    }

    /// Builds one concrete request.
    ///
    /// # Errors
    ///
    /// Returns an error when a regex-generated URL does not parse or has no
    /// host.
    pub fn materialize<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Request, BuildError> {
        let url = self.url.next_url(rng)?;
        let mut request = Request::new(self.method.clone(), url);
        request.headers_mut().clone_from(&self.headers);
        if let Some(body) = self.body.as_ref() {
            *request.body_mut() = Some(Body::from(body.clone()));
        }
        Ok(request)
    }

    /// The URL or URL pattern requests are built from.
    #[must_use]
    pub fn url_label(&self) -> &str {
        self.url.describe()
    }
}

/// Builds a single request for `target`.
///
/// # Errors
///
/// Returns an error under the same conditions as [`RequestPlan::prepare`]
/// and [`RequestPlan::materialize`].
pub fn build_request(target: &Target) -> Result<Request, BuildError> {
    let plan = RequestPlan::prepare(target)?;
    let mut rng = thread_rng();
    plan.materialize(&mut rng)
}

fn resolve_url_source(target: &Target) -> Result<UrlSource, BuildError> {
    if target.url.is_empty() {
        return Err(BuildError::EmptyUrl);
    }
    if target.url.len() < MIN_URL_LEN {
        return Err(BuildError::UrlTooShort {
            url: target.url.clone(),
        });
    }
    let url = if target.url.starts_with(HTTP_PREFIX) || target.url.starts_with(HTTPS_PREFIX) {
        target.url.clone()
    } else {
        format!("{}{}", HTTP_PREFIX, target.url)
    };

    if target.regex_url {
        UrlSource::from_pattern(url)
    } else {
        UrlSource::from_literal(&url)
    }
}

fn resolve_body(target: &Target) -> Result<Option<Vec<u8>>, BuildError> {
    if let Some(path) = target.body_filename.as_ref() {
        let contents = std::fs::read(path).map_err(|err| BuildError::ReadBody {
            path: path.clone(),
            source: err,
        })?;
        return Ok(Some(contents));
    }
    if target.body.is_empty() {
        return Ok(None);
    }
    Ok(Some(target.body.as_bytes().to_vec()))
}

fn resolve_method(method: &str) -> Result<Method, BuildError> {
    if method.is_empty() {
        return Ok(Method::GET);
    }
    Method::from_bytes(method.as_bytes()).map_err(|err| BuildError::InvalidMethod {
        method: method.to_owned(),
        source: err,
    })
}

fn build_headers(target: &Target) -> Result<HeaderMap, BuildError> {
    let mut headers = HeaderMap::new();

    if !target.headers.is_empty() {
        let pairs = parse_key_values(&target.headers, ",", ":")
            .map_err(|err| BuildError::Headers { source: err })?;
        for (key, value) in &pairs {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|err| {
                BuildError::InvalidHeaderName {
                    name: key.clone(),
                    source: err,
                }
            })?;
            headers.append(name, header_value(key, value)?);
        }
    }

    // insert drops every User-Agent appended from `headers` above.
    headers.insert(
        USER_AGENT,
        header_value(USER_AGENT.as_str(), &target.user_agent)?,
    );

    if !target.cookies.is_empty() {
        let pairs = parse_key_values(&target.cookies, ";", "=")
            .map_err(|err| BuildError::Cookies { source: err })?;
        let cookie = pairs
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");
        headers.insert(COOKIE, header_value(COOKIE.as_str(), &cookie)?);
    }

    if !target.basic_auth.is_empty() {
        let pairs = parse_key_values(&target.basic_auth, ",", ":")
            .map_err(|err| BuildError::BasicAuth { source: err })?;
        if let Some((username, password)) = pairs.first() {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                basic_auth_value(username, password)?,
            );
        }
    }

    Ok(headers)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, BuildError> {
    HeaderValue::from_str(value).map_err(|err| BuildError::InvalidHeaderValue {
        name: name.to_owned(),
        source: err,
    })
}
