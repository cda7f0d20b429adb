//! Feeds a resolved file set to the analysis engine and aggregates
//! violations.

use crate::engine::{AnalysisEngine, EngineEvent, Importance};
use crate::error::Result;
use crate::reporter::Reporter;
use crate::root_path::common_root;
use crate::source::{FileMap, ResolvedFile};
use std::io::Write;
use std::path::Path;
use tracing::instrument;

/// Runs the engine over `files` and returns the violation count.
///
/// The project root is the common root of the display paths, so revision
/// sourcing roots the project at repository paths even though the engine
/// reads bytes from the staging directory. Violation paths reported by the
/// engine are translated back through `file_map` (when present) before
/// printing. Output events are shown only when `verbose` is set or their
/// importance is above the lowest tier.
#[instrument(skip_all, fields(file_count = files.len()), level = "debug")]
pub fn run_analysis<W: Write>(
    engine: &mut dyn AnalysisEngine,
    files: &[ResolvedFile],
    file_map: Option<&FileMap>,
    settings: Option<&Path>,
    verbose: bool,
    reporter: &mut Reporter<W>,
) -> Result<u64> {
    let display_paths: Vec<String> = files
        .iter()
        .map(|f| f.display_path.to_string_lossy().into_owned())
        .collect();
    let root = common_root(&display_paths);
    tracing::debug!("Project root: {root:?}");

    engine.create_project(&root, settings)?;
    for file in files {
        engine.add_source_file(&file.physical_path)?;
    }

    let mut violations = 0u64;
    engine.start(&mut |event| {
        match event {
            EngineEvent::Output {
                message,
                importance,
            } => {
                if verbose || importance > Importance::Low {
                    reporter.output(&message)?;
                }
            }
            EngineEvent::Violation {
                path,
                line,
                rule,
                message,
            } => {
                let shown = match file_map {
                    Some(map) => map.display_for(&path),
                    None => path,
                };
                reporter.violation(&shown, line, &rule, &message)?;
                violations += 1;
            }
        }
        Ok(())
    })?;

    reporter.summary(violations)?;
    Ok(violations)
}
