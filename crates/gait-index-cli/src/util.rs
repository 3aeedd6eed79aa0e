use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use gait_index::{config::PipelineConfig, measurement::MeasurementSet};

/// Where command results go: stdout or a freshly created file.
pub struct Output {
    writer: Box<dyn Write>,
    name: String,
}

impl Output {
    pub fn from_output_path(output_path: Option<&Path>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Self {
                    writer: Box::new(BufWriter::new(file)),
                    name: path.display().to_string(),
                })
            }
            None => Ok(Self {
                writer: Box::new(io::stdout().lock()),
                name: "stdout".to_owned(),
            }),
        }
    }

    /// Writes `value` as pretty JSON followed by a newline, then flushes.
    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut self.writer, value)
            .with_context(|| format!("Failed to write JSON to {}", self.name))?;
        writeln!(self.writer)
            .and_then(|()| self.writer.flush())
            .with_context(|| format!("Failed to finish writing {}", self.name))?;
        Ok(())
    }
}

pub fn save_json<T>(value: &T, output_path: Option<&PathBuf>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    Output::from_output_path(output_path.map(PathBuf::as_path))?.write_json(value)
}

fn parse_json<T, R>(file_kind: &str, source: &str, reader: R) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    R: Read,
{
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {file_kind} JSON from {source}"))
}

pub fn read_json_file<T>(file_kind: &str, path: &Path) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;
    parse_json(file_kind, &path.display().to_string(), BufReader::new(file))
}

/// Read a measurement set from a JSON file, or from stdin when `path` is
/// `None` or `-`
///
/// The JSON document must be an object mapping column labels to arrays of
/// numbers; `null` entries mark missing samples. Labels keep document order.
pub fn read_measurements(path: Option<&Path>) -> anyhow::Result<MeasurementSet> {
    match path {
        Some(path) if path != Path::new("-") => read_json_file("measurements", path),
        _ => parse_json("measurements", "stdin", io::stdin().lock()),
    }
}

pub fn read_config_file(path: &Path) -> anyhow::Result<PipelineConfig> {
    read_json_file("config", path)
}
