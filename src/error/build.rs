use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("delimiters can't be equal ('{delimiter}')")]
    EqualDelimiters { delimiter: String },
    #[error("nothing to parse")]
    EmptyInput,
    #[error("failed to parse '{pair}' into two parts")]
    MissingDelimiter { pair: String },
    #[error("key or value is empty in '{pair}'")]
    EmptyPart { pair: String },
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("empty URL")]
    EmptyUrl,
    #[error("URL too short: '{url}'")]
    UrlTooShort { url: String },
    #[error("failed to parse regex '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: rand_regex::Error,
    },
    #[error("failed to parse URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("empty hostname in '{url}'")]
    EmptyHost { url: String },
    #[error("failed to read contents of file '{path}': {source}")]
    ReadBody {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid method '{method}': {source}")]
    InvalidMethod {
        method: String,
        #[source]
        source: http::method::InvalidMethod,
    },
    #[error("could not parse headers: {source}")]
    Headers {
        #[source]
        source: ParseError,
    },
    #[error("invalid header name '{name}': {source}")]
    InvalidHeaderName {
        name: String,
        #[source]
        source: http::header::InvalidHeaderName,
    },
    #[error("invalid value for header '{name}': {source}")]
    InvalidHeaderValue {
        name: String,
        #[source]
        source: http::header::InvalidHeaderValue,
    },
    #[error("could not parse cookies: {source}")]
    Cookies {
        #[source]
        source: ParseError,
    },
    #[error("could not parse basic auth: {source}")]
    BasicAuth {
        #[source]
        source: ParseError,
    },
}
