use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::StressArgs;
use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use crate::stress::{RunConfig, Target};

use super::types::{ConfigFile, TargetSettings};

/// Builds the run configuration from CLI arguments and an optional config
/// file.
///
/// URLs given on the command line replace the file's targets. Each target
/// field is taken from the target's own config entry, then an explicitly
/// passed flag, then the file's global section, then the default.
///
/// # Errors
///
/// Returns an error when a config target has no url or when neither the
/// command line nor the config file names any target.
pub fn resolve_run_config(
    args: &StressArgs,
    matches: &ArgMatches,
    config: Option<&ConfigFile>,
) -> AppResult<RunConfig> {
    let defaults = config.map(|config| &config.defaults);
    let cli = cli_settings(args, matches);

    let targets = if args.urls.is_empty() {
        let entries = config
            .and_then(|config| config.targets.as_deref())
            .unwrap_or_default();
        let mut targets = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let Some(url) = entry.url.clone() else {
                return Err(AppError::config(ConfigError::TargetMissingUrl { index }));
            };
            targets.push(layered_target(url, &[defaults, Some(&cli), Some(&entry.settings)]));
        }
        targets
    } else {
        args.urls
            .iter()
            .map(|url| layered_target(url.clone(), &[defaults, Some(&cli)]))
            .collect()
    };

    if targets.is_empty() {
        tracing::error!("Missing URL (pass one on the command line or list targets in config).");
        return Err(AppError::validation(ValidationError::MissingUrl));
    }

    let verbose = if is_cli(matches, "verbose") {
        args.verbose
    } else {
        config.and_then(|config| config.verbose).unwrap_or(false)
    };
    let quiet = if is_cli(matches, "quiet") {
        args.quiet
    } else {
        config.and_then(|config| config.quiet).unwrap_or(false)
    };

    Ok(RunConfig {
        targets,
        verbose,
        quiet,
    })
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

/// Settings for the flags that were actually passed.
fn cli_settings(args: &StressArgs, matches: &ArgMatches) -> TargetSettings {
    let pick = |name: &str, value: &str| is_cli(matches, name).then(|| value.to_owned());
    let flag = |name: &str, value: bool| is_cli(matches, name).then_some(value);

    TargetSettings {
        count: is_cli(matches, "count").then_some(args.count),
        concurrency: is_cli(matches, "concurrency").then_some(args.concurrency),
        timeout: pick("timeout", &args.timeout),
        method: pick("method", &args.method),
        body: pick("body", &args.body),
        body_file: args.body_file.clone(),
        headers: pick("headers", &args.headers),
        cookies: pick("cookies", &args.cookies),
        user_agent: pick("user_agent", &args.user_agent),
        basic_auth: pick("basic_auth", &args.basic_auth),
        regex: flag("regex", args.regex),
        compress: flag("compress", args.compress),
        keepalive: flag("keepalive", args.keepalive),
        follow_redirects: flag("follow_redirects", args.follow_redirects),
        no_http2: flag("no_http2", args.no_http2),
        enforce_ssl: flag("enforce_ssl", args.enforce_ssl),
    }
}

/// Starts from the defaults and applies `layers` in order, later layers
/// winning.
fn layered_target(url: String, layers: &[Option<&TargetSettings>]) -> Target {
    let mut target = Target::new(url);
    for settings in layers.iter().flatten() {
        apply_settings(&mut target, settings);
    }
    target
}

fn apply_settings(target: &mut Target, settings: &TargetSettings) {
    if let Some(count) = settings.count {
        target.count = count;
    }
    if let Some(concurrency) = settings.concurrency {
        target.concurrency = concurrency;
    }
    if let Some(timeout) = settings.timeout.as_ref() {
        target.timeout.clone_from(timeout);
    }
    if let Some(method) = settings.method.as_ref() {
        target.method.clone_from(method);
    }
    if let Some(body) = settings.body.as_ref() {
        target.body.clone_from(body);
    }
    if let Some(body_file) = settings.body_file.as_ref() {
        target.body_filename = Some(body_file.clone());
    }
    if let Some(headers) = settings.headers.as_ref() {
        target.headers.clone_from(headers);
    }
    if let Some(cookies) = settings.cookies.as_ref() {
        target.cookies.clone_from(cookies);
    }
    if let Some(user_agent) = settings.user_agent.as_ref() {
        target.user_agent.clone_from(user_agent);
    }
    if let Some(basic_auth) = settings.basic_auth.as_ref() {
        target.basic_auth.clone_from(basic_auth);
    }
    if let Some(regex) = settings.regex {
        target.regex_url = regex;
    }
    if let Some(compress) = settings.compress {
        target.compress = compress;
    }
    if let Some(keepalive) = settings.keepalive {
        target.keep_alive = keepalive;
    }
    if let Some(follow_redirects) = settings.follow_redirects {
        target.follow_redirects = follow_redirects;
    }
    if let Some(no_http2) = settings.no_http2 {
        target.no_http2 = no_http2;
    }
    if let Some(enforce_ssl) = settings.enforce_ssl {
        target.enforce_ssl = enforce_ssl;
    }
}
