use std::path::PathBuf;

use clap::Args;
use gait_index::config::PipelineConfig;

use crate::util;

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct DefaultConfigArg {
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DefaultConfigArg) -> anyhow::Result<()> {
    util::save_json(&PipelineConfig::default(), arg.output.as_ref())
}
