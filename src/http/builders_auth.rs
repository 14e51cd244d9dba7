use base64::Engine as _;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::error::BuildError;

pub(super) fn basic_auth_value(username: &str, password: &str) -> Result<HeaderValue, BuildError> {
    let token = format!("{}:{}", username, password);
    let encoded = base64::engine::general_purpose::STANDARD.encode(token.as_bytes());
    let mut value = HeaderValue::from_str(&format!("Basic {}", encoded)).map_err(|err| {
        BuildError::InvalidHeaderValue {
            name: AUTHORIZATION.as_str().to_owned(),
            source: err,
        }
    })?;
    value.set_sensitive(true);
    Ok(value)
}
