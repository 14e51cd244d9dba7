use std::time::Duration;

use crate::error::ValidationError;

use super::target::{RunConfig, Target};

/// Timeouts must be strictly longer than this.
const MIN_TIMEOUT: Duration = Duration::from_millis(1);

/// Rejects configurations that cannot be run.
///
/// Pure: no request is built and no file is read.
///
/// # Errors
///
/// Returns the first problem found, naming the offending target index.
pub fn validate_config(config: &RunConfig) -> Result<(), ValidationError> {
    if config.targets.is_empty() {
        return Err(ValidationError::NoTargets);
    }
    for (index, target) in config.targets.iter().enumerate() {
        validate_target(index, target)?;
    }
    Ok(())
}

fn validate_target(index: usize, target: &Target) -> Result<(), ValidationError> {
    if target.url.is_empty() {
        return Err(ValidationError::EmptyUrl { index });
    }
    if target.count == 0 {
        return Err(ValidationError::CountNotPositive { index });
    }
    if target.concurrency == 0 {
        return Err(ValidationError::ConcurrencyNotPositive { index });
    }
    if target.method.is_empty() {
        return Err(ValidationError::EmptyMethod { index });
    }
    let timeout = target
        .timeout_duration()
        .map_err(|err| ValidationError::InvalidTimeout {
            index,
            value: target.timeout.clone(),
            source: err,
        })?;
    if let Some(timeout) = timeout
        && timeout <= MIN_TIMEOUT
    {
        return Err(ValidationError::TimeoutTooShort {
            index,
            value: target.timeout.clone(),
        });
    }
    if target.concurrency > target.count {
        return Err(ValidationError::ConcurrencyExceedsCount {
            index,
            concurrency: target.concurrency,
            count: target.count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(target: Target) -> RunConfig {
        RunConfig::new(vec![target])
    }

    #[test]
    fn default_target_is_valid() -> Result<(), String> {
        validate_config(&config_with(Target::default())).map_err(|err| err.to_string())
    }

    #[test]
    fn empty_target_list_is_rejected() -> Result<(), String> {
        match validate_config(&RunConfig::default()) {
            Err(ValidationError::NoTargets) => Ok(()),
            other => Err(format!("Expected NoTargets, got {:?}", other)),
        }
    }

    #[test]
    fn structural_problems_are_rejected() -> Result<(), String> {
        let cases = [
            (
                "empty url",
                Target {
                    url: String::new(),
                    ..Target::default()
                },
            ),
            (
                "zero count",
                Target {
                    count: 0,
                    ..Target::default()
                },
            ),
            (
                "zero concurrency",
                Target {
                    concurrency: 0,
                    ..Target::default()
                },
            ),
            (
                "concurrency above count",
                Target {
                    count: 10,
                    concurrency: 20,
                    ..Target::default()
                },
            ),
            (
                "empty method",
                Target {
                    method: String::new(),
                    ..Target::default()
                },
            ),
            (
                "unparseable timeout",
                Target {
                    timeout: "unparseable".to_owned(),
                    ..Target::default()
                },
            ),
            (
                "timeout of exactly one millisecond",
                Target {
                    timeout: "1ms".to_owned(),
                    ..Target::default()
                },
            ),
            (
                "zero timeout",
                Target {
                    timeout: "0".to_owned(),
                    ..Target::default()
                },
            ),
        ];
        for (label, target) in cases {
            if validate_config(&config_with(target)).is_ok() {
                return Err(format!("Expected '{}' to be rejected", label));
            }
        }
        Ok(())
    }

    #[test]
    fn empty_timeout_means_no_timeout() -> Result<(), String> {
        let target = Target {
            timeout: String::new(),
            ..Target::default()
        };
        validate_config(&config_with(target)).map_err(|err| err.to_string())
    }

    #[test]
    fn timeout_just_above_one_millisecond_is_accepted() -> Result<(), String> {
        let target = Target {
            timeout: "1001us".to_owned(),
            ..Target::default()
        };
        validate_config(&config_with(target)).map_err(|err| err.to_string())
    }

    #[test]
    fn error_names_the_failing_target() -> Result<(), String> {
        let config = RunConfig::new(vec![
            Target::default(),
            Target {
                concurrency: 0,
                ..Target::default()
            },
        ]);
        match validate_config(&config) {
            Err(ValidationError::ConcurrencyNotPositive { index: 1 }) => Ok(()),
            other => Err(format!("Expected failure on target 1, got {:?}", other)),
        }
    }
}
