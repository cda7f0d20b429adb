//! The narrow interface to the external static-analysis engine.
//!
//! The engine owns rule evaluation, parsing, and violation detection; this
//! crate only feeds it files and consumes its events. [`ProcessEngine`] is
//! the default implementation, driving an analyzer executable and reading
//! newline-delimited JSON events from its stdout:
//!
//! ```text
//! {"kind":"violation","path":"src/Foo.cs","line":12,"rule":"SA1600","message":"..."}
//! {"kind":"output","message":"Pass 1 complete","importance":"low"}
//! ```
//!
//! Unparseable lines are logged and skipped. Events are delivered
//! synchronously on the calling thread; the driver introduces no concurrency
//! of its own.

use crate::error::{Result, SrclintError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Importance tier attached to informational output events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Normal,
    High,
}

impl Default for Importance {
    fn default() -> Self {
        Self::Normal
    }
}

/// An event emitted by the engine while analyzing.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EngineEvent {
    /// Informational output.
    Output {
        message: String,
        #[serde(default)]
        importance: Importance,
    },
    /// A rule violation in a source file.
    Violation {
        path: PathBuf,
        line: u64,
        rule: String,
        message: String,
    },
}

/// The engine operations this tool consumes.
pub trait AnalysisEngine {
    /// Creates the single logical project rooted at `root_path`, optionally
    /// configured from a settings file.
    fn create_project(&mut self, root_path: &str, settings: Option<&Path>) -> Result<()>;

    /// Registers a source file with the project by its physical path.
    fn add_source_file(&mut self, path: &Path) -> Result<()>;

    /// Runs the analysis, delivering each event to `on_event` synchronously.
    fn start(&mut self, on_event: &mut dyn FnMut(EngineEvent) -> Result<()>) -> Result<()>;
}

/// Default engine: an analyzer executable invoked as a subprocess.
#[derive(Debug)]
pub struct ProcessEngine {
    analyzer: PathBuf,
    root_path: Option<String>,
    settings: Option<PathBuf>,
    files: Vec<PathBuf>,
}

impl ProcessEngine {
    pub fn new(analyzer: PathBuf) -> Self {
        Self {
            analyzer,
            root_path: None,
            settings: None,
            files: Vec::new(),
        }
    }
}

impl AnalysisEngine for ProcessEngine {
    fn create_project(&mut self, root_path: &str, settings: Option<&Path>) -> Result<()> {
        self.root_path = Some(root_path.to_string());
        self.settings = settings.map(Path::to_path_buf);
        Ok(())
    }

    fn add_source_file(&mut self, path: &Path) -> Result<()> {
        self.files.push(path.to_path_buf());
        Ok(())
    }

    fn start(&mut self, on_event: &mut dyn FnMut(EngineEvent) -> Result<()>) -> Result<()> {
        let mut command = Command::new(&self.analyzer);
        if let Some(root) = &self.root_path {
            command.arg("--root").arg(root);
        }
        if let Some(settings) = &self.settings {
            command.arg("--settings").arg(settings);
        }
        command.args(&self.files);

        tracing::debug!("Executing analyzer: {command:?}");
        let output = command.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SrclintError::engine_error(format!(
                    "{} not found; install the analyzer or pass --analyzer",
                    self.analyzer.display()
                ))
            } else {
                SrclintError::engine_error_with_source(
                    format!("failed to execute {}", self.analyzer.display()),
                    Box::new(e),
                )
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!("Analyzer failed. Stderr:\n{stderr}");
            return Err(SrclintError::engine_error(format!(
                "analyzer exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<EngineEvent>(line) {
                Ok(event) => on_event(event)?,
                Err(e) => {
                    tracing::warn!("Failed to parse analyzer event: {e}. Line: {line:?}");
                }
            }
        }
        Ok(())
    }
}
