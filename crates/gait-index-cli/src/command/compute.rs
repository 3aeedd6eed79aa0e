use std::path::PathBuf;

use clap::Args;
use gait_index::{
    compute_gait_index_report,
    config::{ConstantColumnPolicy, PipelineConfig},
};
use serde::Serialize;
use tracing::info;

use crate::util;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum ConstantColumns {
    #[default]
    Fail,
    Zero,
}

impl From<ConstantColumns> for ConstantColumnPolicy {
    fn from(value: ConstantColumns) -> Self {
        match value {
            ConstantColumns::Fail => Self::Fail,
            ConstantColumns::Zero => Self::Zero,
        }
    }
}

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct ComputeArg {
    /// Measurements JSON file (label -> array of numbers or null); `-` or
    /// omitted reads stdin
    input: Option<PathBuf>,
    /// Pipeline configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of principal components (overrides the config file)
    #[arg(long)]
    num_components: Option<usize>,
    /// Zero-variance handling: `fail` or `zero` (overrides the config file)
    #[arg(long)]
    constant_columns: Option<ConstantColumns>,
    /// Write the full report instead of the index alone
    #[arg(long)]
    report: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct IndexOnly {
    gait_index: f64,
}

pub(crate) fn run(arg: &ComputeArg) -> anyhow::Result<()> {
    let config = resolve_config(arg)?;
    let measurements = util::read_measurements(arg.input.as_deref())?;
    info!(
        columns = measurements.len(),
        num_components = config.num_components,
        "computing gait index"
    );

    let report = compute_gait_index_report(&measurements, &config)?;
    info!(gait_index = report.gait_index, rows = report.rows, "done");

    if arg.report {
        util::save_json(&report, arg.output.as_ref())
    } else {
        let index = IndexOnly {
            gait_index: report.gait_index,
        };
        util::save_json(&index, arg.output.as_ref())
    }
}

fn resolve_config(arg: &ComputeArg) -> anyhow::Result<PipelineConfig> {
    let mut config = match &arg.config {
        Some(path) => util::read_config_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(num_components) = arg.num_components {
        config.num_components = num_components;
    }
    if let Some(policy) = arg.constant_columns {
        config.constant_column_policy = policy.into();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let arg = ComputeArg {
            num_components: Some(3),
            constant_columns: Some(ConstantColumns::Zero),
            ..ComputeArg::default()
        };
        let config = resolve_config(&arg).unwrap();
        assert_eq!(config.num_components, 3);
        assert_eq!(config.constant_column_policy, ConstantColumnPolicy::Zero);
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = resolve_config(&ComputeArg::default()).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_constant_columns_parse() {
        assert_eq!("zero".parse::<ConstantColumns>().unwrap(), ConstantColumns::Zero);
        assert_eq!("Fail".parse::<ConstantColumns>().unwrap(), ConstantColumns::Fail);
        assert!("skip".parse::<ConstantColumns>().is_err());
    }
}
