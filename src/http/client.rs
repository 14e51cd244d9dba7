use std::time::Duration;

use reqwest::{Client, redirect};
use tracing::{error, warn};

use crate::error::{AppError, AppResult, HttpError};
use crate::stress::Target;

/// Redirect hops followed before a request fails.
const MAX_REDIRECTS: usize = 10;

/// Builds the HTTP client a target's workers share.
///
/// Transport flags map one to one onto the client: `enforce_ssl` toggles
/// certificate checks, `compress` response decoding, `keep_alive` idle
/// connection reuse, `no_http2` HTTP/1.1-only mode and `follow_redirects`
/// the redirect policy. A configured timeout bounds each whole request.
///
/// # Errors
///
/// Returns an error when the TLS backend cannot be initialised.
pub fn build_client(target: &Target) -> AppResult<Client> {
    let mut client_builder = Client::builder();

    match target.timeout_duration() {
        Ok(Some(timeout)) => client_builder = client_builder.timeout(timeout),
        Ok(None) => {}
        Err(err) => {
            warn!(
                "Ignoring invalid timeout '{}' for {}: {}",
                target.timeout, target.url, err
            );
        }
    }

    client_builder = if target.follow_redirects {
        client_builder.redirect(redirect::Policy::limited(MAX_REDIRECTS))
    } else {
        client_builder.redirect(redirect::Policy::none())
    };

    if !target.keep_alive {
        client_builder = client_builder
            .pool_max_idle_per_host(0)
            .pool_idle_timeout(Some(Duration::from_secs(0)));
    }

    client_builder = if target.compress {
        client_builder.gzip(true).brotli(true).deflate(true)
    } else {
        client_builder.no_gzip().no_brotli().no_deflate()
    };

    if target.no_http2 {
        client_builder = client_builder.http1_only();
    }

    if !target.enforce_ssl {
        client_builder = client_builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        AppError::http(HttpError::BuildClientFailed {
            url: target.url.clone(),
            source: err,
        })
    })
}
