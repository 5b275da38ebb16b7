//! `boilerplate health`: the service health report.

use serde::Serialize;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Body of the health report.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Health<'a> {
    pub status: &'static str,
    pub env: &'a str,
}

impl<'a> Health<'a> {
    pub fn from_config(config: &'a AppConfig) -> Self {
        Self {
            status: "ok",
            env: &config.env,
        }
    }
}

pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let body =
        serde_json::to_string(&Health::from_config(config)).map_err(serialisation_error)?;
    output.data(&body)?;
    Ok(())
}

fn serialisation_error(e: serde_json::Error) -> CliError {
    CliError::Internal {
        message: format!("Failed to serialise health report: {e}"),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_ok_with_environment() {
        let cfg = AppConfig {
            env: "production".into(),
            ..AppConfig::default()
        };
        let json = serde_json::to_value(Health::from_config(&cfg)).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ok", "env": "production" }));
    }

    #[test]
    fn serialisation_failure_exits_as_internal() {
        let cause = serde_json::from_str::<u8>("not json").unwrap_err();
        let err = serialisation_error(cause);
        assert!(matches!(err, CliError::Internal { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn default_environment_is_development() {
        let cfg = AppConfig::default();
        assert_eq!(Health::from_config(&cfg).env, "development");
    }
}
