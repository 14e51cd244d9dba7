use std::ffi::OsString;
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use barrage::args::StressArgs;
use barrage::config::{DEFAULT_CONFIG_FILES, load_config, resolve_run_config};
use barrage::error::{AppError, AppResult};
use barrage::report::{TargetSummary, export_json, summarize_target, summary_lines};
use barrage::stress::{OutputSink, ResultMatrix, RunConfig, run_stress};

pub(crate) fn run() -> AppResult<()> {
    let (args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    crate::logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args, &matches))
}

fn parse_args() -> AppResult<Option<(StressArgs, ArgMatches)>> {
    let mut cmd = StressArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = StressArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

async fn run_async(args: StressArgs, matches: &ArgMatches) -> AppResult<()> {
    let config = load_config(args.config.as_deref())?;
    let run_config = resolve_run_config(&args, matches, config.as_ref())?;

    let results = run_stress(&run_config, Some(OutputSink::stdout()))
        .await
        .inspect_err(|err| tracing::error!("Stress run failed: {}", err))?;

    let summaries = summarize(&run_config, &results)?;
    if !run_config.quiet {
        for summary in &summaries {
            println!();
            for line in summary_lines(summary) {
                println!("{}", line);
            }
        }
    }

    if let Some(path) = args.output_json.as_deref() {
        export_json(path, &summaries, &results).await?;
        tracing::info!("Wrote results to {}", path.display());
    }
    Ok(())
}

fn summarize(config: &RunConfig, results: &ResultMatrix) -> AppResult<Vec<TargetSummary>> {
    config
        .targets
        .iter()
        .zip(results)
        .map(|(target, stats)| summarize_target(&target.url, stats).map_err(AppError::Summary))
        .collect()
}
