use std::path::PathBuf;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tempfile::tempdir;

use super::{load_config, load_config_file, resolve_run_config, types::ConfigFile};
use crate::args::StressArgs;
use crate::error::AppError;
use crate::stress::RunConfig;

fn parse_cli(argv: &[&str]) -> Result<(StressArgs, ArgMatches), String> {
    let matches = StressArgs::command()
        .try_get_matches_from(argv)
        .map_err(|err| format!("parse failed: {}", err))?;
    let args = StressArgs::from_arg_matches(&matches)
        .map_err(|err| format!("from_arg_matches failed: {}", err))?;
    Ok((args, matches))
}

fn resolve(argv: &[&str], config: Option<&ConfigFile>) -> Result<RunConfig, String> {
    let (args, matches) = parse_cli(argv)?;
    resolve_run_config(&args, &matches, config).map_err(|err| err.to_string())
}

fn write_config(name: &str, content: &str) -> Result<(tempfile::TempDir, PathBuf), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join(name);
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;
    Ok((dir, path))
}

#[test]
fn parse_toml_config_with_targets() -> Result<(), String> {
    let (_dir, path) = write_config(
        "barrage.toml",
        r#"
quiet = true
num = 20
timeout = "2s"
headers = "Accept: text/html"

[[targets]]
url = "http://localhost:3000"
concurrent = 4

[[targets]]
url = "http://localhost:3001/[a-z]{4}"
regex = true
method = "POST"
"#,
    )?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.quiet != Some(true) {
        return Err("Expected quiet".to_owned());
    }
    if config.defaults.count != Some(20) || config.defaults.timeout.as_deref() != Some("2s") {
        return Err(format!("Unexpected defaults: {:?}", config.defaults));
    }
    let targets = config.targets.unwrap_or_default();
    let [first, second] = targets.as_slice() else {
        return Err(format!("Expected two targets, got {}", targets.len()));
    };
    if first.url.as_deref() != Some("http://localhost:3000") || first.settings.concurrency != Some(4)
    {
        return Err(format!("Unexpected first target: {:?}", first));
    }
    if second.settings.regex != Some(true) || second.settings.method.as_deref() != Some("POST") {
        return Err(format!("Unexpected second target: {:?}", second));
    }
    Ok(())
}

#[test]
fn parse_json_config_with_targets() -> Result<(), String> {
    let (_dir, path) = write_config(
        "barrage.json",
        r#"{
  "verbose": true,
  "count": 3,
  "targets": [
    { "url": "http://localhost:3000", "keepalive": true, "body": "hello" }
  ]
}"#,
    )?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.verbose != Some(true) || config.defaults.count != Some(3) {
        return Err(format!("Unexpected config: {:?}", config));
    }
    let target = config
        .targets
        .as_ref()
        .and_then(|targets| targets.first())
        .ok_or_else(|| "Missing target".to_owned())?;
    if target.settings.keepalive != Some(true) || target.settings.body.as_deref() != Some("hello")
    {
        return Err(format!("Unexpected target: {:?}", target));
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let (_dir, path) = write_config("barrage.yaml", "count: 1")?;
    match load_config_file(&path) {
        Err(AppError::Config(err)) if err.to_string().contains("yaml") => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected unsupported extension error".to_owned()),
    }
}

#[test]
fn invalid_toml_is_rejected() -> Result<(), String> {
    let (_dir, path) = write_config("barrage.toml", "count = [")?;
    if load_config_file(&path).is_ok() {
        return Err("Expected parse error".to_owned());
    }
    Ok(())
}

#[test]
fn explicit_missing_config_is_an_error() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("missing.toml");
    if load_config(Some(&path)).is_ok() {
        return Err("Expected read error".to_owned());
    }
    Ok(())
}

#[test]
fn cli_urls_use_defaults_when_nothing_else_is_set() -> Result<(), String> {
    let run = resolve(&["barrage", "http://localhost:8080"], None)?;
    let [target] = run.targets.as_slice() else {
        return Err(format!("Expected one target, got {}", run.targets.len()));
    };
    if target.url != "http://localhost:8080"
        || target.count != 10
        || target.concurrency != 1
        || target.timeout != "10s"
        || target.method != "GET"
        || target.user_agent != "barrage"
        || !target.follow_redirects
    {
        return Err(format!("Unexpected target: {:?}", target));
    }
    if run.verbose || run.quiet {
        return Err("Expected verbose and quiet to be off".to_owned());
    }
    Ok(())
}

#[test]
fn cli_flags_override_config_globals() -> Result<(), String> {
    let config = ConfigFile {
        quiet: Some(true),
        defaults: super::types::TargetSettings {
            count: Some(50),
            concurrency: Some(5),
            method: Some("PUT".to_owned()),
            ..Default::default()
        },
        ..Default::default()
    };
    let run = resolve(
        &["barrage", "-n", "7", "--no-follow", "http://localhost"],
        Some(&config),
    )?;
    let target = run.targets.first().ok_or_else(|| "Missing target".to_owned())?;
    if target.count != 7 {
        return Err(format!("Expected CLI count, got {}", target.count));
    }
    if target.concurrency != 5 || target.method != "PUT" {
        return Err(format!("Expected config globals, got {:?}", target));
    }
    if target.follow_redirects {
        return Err("Expected --no-follow to win".to_owned());
    }
    if !run.quiet {
        return Err("Expected quiet from config".to_owned());
    }
    Ok(())
}

#[test]
fn cli_urls_replace_config_targets() -> Result<(), String> {
    let config = ConfigFile {
        targets: Some(vec![super::types::TargetConfig {
            url: Some("http://config.example".to_owned()),
            ..Default::default()
        }]),
        ..Default::default()
    };
    let run = resolve(&["barrage", "http://cli.example"], Some(&config))?;
    let urls: Vec<&str> = run.targets.iter().map(|target| target.url.as_str()).collect();
    if urls != ["http://cli.example"] {
        return Err(format!("Unexpected urls: {:?}", urls));
    }
    Ok(())
}

#[test]
fn config_target_fields_win_over_cli_and_globals() -> Result<(), String> {
    let config = ConfigFile {
        defaults: super::types::TargetSettings {
            timeout: Some("3s".to_owned()),
            concurrency: Some(2),
            ..Default::default()
        },
        targets: Some(vec![
            super::types::TargetConfig {
                url: Some("http://a.example".to_owned()),
                settings: super::types::TargetSettings {
                    concurrency: Some(8),
                    ..Default::default()
                },
            },
            super::types::TargetConfig {
                url: Some("http://b.example".to_owned()),
                ..Default::default()
            },
        ]),
        ..Default::default()
    };
    let run = resolve(&["barrage", "-c", "4", "-n", "20"], Some(&config))?;
    let [first, second] = run.targets.as_slice() else {
        return Err(format!("Expected two targets, got {}", run.targets.len()));
    };
    if first.url != "http://a.example" || first.concurrency != 8 {
        return Err(format!("Unexpected first target: {:?}", first));
    }
    if second.url != "http://b.example" || second.concurrency != 4 {
        return Err(format!("Unexpected second target: {:?}", second));
    }
    if first.timeout != "3s" || second.count != 20 {
        return Err("Expected global timeout and CLI count on every target".to_owned());
    }
    Ok(())
}

#[test]
fn config_target_without_url_is_rejected() -> Result<(), String> {
    let config = ConfigFile {
        targets: Some(vec![super::types::TargetConfig::default()]),
        ..Default::default()
    };
    match resolve(&["barrage"], Some(&config)) {
        Err(err) if err.contains("target 0") => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(run) => Err(format!("Expected error, got {:?}", run)),
    }
}

#[test]
fn no_targets_anywhere_is_rejected() -> Result<(), String> {
    match resolve(&["barrage"], None) {
        Err(_) => Ok(()),
        Ok(run) => Err(format!("Expected missing url error, got {:?}", run)),
    }
}
