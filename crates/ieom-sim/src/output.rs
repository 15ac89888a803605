//! Output, checkpoint and matrix files written by the drivers.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use ieom_core::{ErrorInfo, IeomError, PlatformInfo, Result, RunProvenance, SchemaVersion};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

const CHECKPOINT_MARKER: &str = "_checkpoint_";
const CHECKPOINT_EXTENSION: &str = "bin";

fn io_error(code: &str, err: impl ToString, path: &Path) -> IeomError {
    IeomError::Io(ErrorInfo::new(code, err.to_string()).with_context("path", path.display()))
}

fn stem(out: &Path) -> String {
    out.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}

/// Sibling of `out` named `<stem><suffix>`.
pub fn derived_path(out: &Path, suffix: &str) -> PathBuf {
    out.with_file_name(format!("{}{suffix}", stem(out)))
}

/// `<stem>_checkpoint_<step>.bin` next to `out`.
pub fn checkpoint_path(out: &Path, step: u64) -> PathBuf {
    derived_path(out, &format!("{CHECKPOINT_MARKER}{step}.{CHECKPOINT_EXTENSION}"))
}

/// Step number encoded in a checkpoint file name.
pub fn parse_checkpoint_step(path: &Path) -> Option<u64> {
    if path.extension()?.to_str()? != CHECKPOINT_EXTENSION {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let (_, digits) = stem.rsplit_once(CHECKPOINT_MARKER)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Coefficient vector at a given step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Completed integrator steps.
    pub step: u64,
    /// Simulation time.
    pub time: f64,
    /// Coefficients of the basis entries.
    pub coefficients: Vec<Complex64>,
}

impl Checkpoint {
    /// Writes the checkpoint as bincode.
    pub fn store(&self, path: &Path) -> Result<()> {
        let bytes =
            bincode::serialize(self).map_err(|err| io_error("checkpoint-serialize", err, path))?;
        fs::write(path, bytes).map_err(|err| io_error("checkpoint-write", err, path))
    }

    /// Reads a checkpoint and checks it against the step in its file name.
    pub fn load(path: &Path) -> Result<Self> {
        let step = parse_checkpoint_step(path).ok_or_else(|| {
            IeomError::Io(
                ErrorInfo::new("checkpoint-name", "file name carries no step number")
                    .with_context("path", path.display())
                    .with_hint(format!("expected <stem>{CHECKPOINT_MARKER}<step>.bin")),
            )
        })?;
        let bytes = fs::read(path).map_err(|err| io_error("checkpoint-read", err, path))?;
        let checkpoint: Checkpoint =
            bincode::deserialize(&bytes).map_err(|err| io_error("checkpoint-parse", err, path))?;
        if checkpoint.step != step {
            return Err(IeomError::Io(
                ErrorInfo::new("checkpoint-mismatch", "stored step differs from the file name")
                    .with_context("path", path.display())
                    .with_context("stored", checkpoint.step)
                    .with_context("name", step),
            ));
        }
        Ok(checkpoint)
    }
}

/// Provenance for artefacts derived from `config`.
pub fn provenance(program: &str, config: &SimulationConfig) -> Result<RunProvenance> {
    let mut tool_versions = BTreeMap::new();
    tool_versions.insert(
        env!("CARGO_PKG_NAME").to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    Ok(RunProvenance {
        schema_version: SchemaVersion::default(),
        program: program.to_string(),
        input_hash: config.hash()?,
        created_at: Utc::now().to_rfc3339(),
        platform: PlatformInfo::current(),
        tool_versions,
    })
}

/// Effective configuration stored next to the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Configuration after command line overrides.
    pub config: SimulationConfig,
    /// Where and when the run happened.
    pub provenance: RunProvenance,
}

/// Matrix in coordinate form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixFile<T> {
    /// Where and when the matrix was computed.
    pub provenance: RunProvenance,
    /// Row count.
    pub rows: usize,
    /// Column count.
    pub cols: usize,
    /// Stored elements.
    pub triplets: Vec<T>,
}

/// Serializes `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| io_error("output-mkdir", err, parent))?;
    }
    let json =
        serde_json::to_string_pretty(value).map_err(|err| io_error("json-serialize", err, path))?;
    fs::write(path, json).map_err(|err| io_error("json-write", err, path))
}

/// Tab separated measurement file with a `#` header.
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputFile {
    /// Creates `path` and writes the platform header.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| io_error("output-mkdir", err, parent))?;
        }
        let file = File::create(path).map_err(|err| io_error("output-create", err, path))?;
        let mut output = Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        };
        for line in PlatformInfo::current().header_lines() {
            output.write_line(&line)?;
        }
        Ok(output)
    }

    /// Reopens an existing file for a resumed run, dropping rows measured at
    /// or after `time`.
    pub fn resume(path: &Path, time: f64) -> Result<Self> {
        let kept = match File::open(path) {
            Ok(file) => {
                let mut kept = Vec::new();
                for line in BufReader::new(file).lines() {
                    let line = line.map_err(|err| io_error("output-read", err, path))?;
                    if keep_line(&line, time) {
                        kept.push(line);
                    }
                }
                kept
            }
            Err(err) if err.kind() == ErrorKind::NotFound => return Self::create(path),
            Err(err) => return Err(io_error("output-open", err, path)),
        };
        let file = File::create(path).map_err(|err| io_error("output-create", err, path))?;
        let mut output = Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        };
        for line in &kept {
            output.write_line(line)?;
        }
        Ok(output)
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `time` followed by `values`.
    pub fn write_row(&mut self, time: f64, values: &[f64]) -> Result<()> {
        let mut line = time.to_string();
        for value in values {
            line.push('\t');
            line.push_str(&value.to_string());
        }
        self.write_line(&line)
    }

    /// Flushes buffered rows to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|err| io_error("output-flush", err, &self.path))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}").map_err(|err| io_error("output-write", err, &self.path))
    }
}

// headers stay, rows stay when measured before the resume time
fn keep_line(line: &str, time: f64) -> bool {
    if line.starts_with('#') {
        return true;
    }
    match line.split('\t').next().and_then(|t| t.trim().parse::<f64>().ok()) {
        Some(t) => t < time - 1e-12,
        None => false,
    }
}
