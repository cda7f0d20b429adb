//! Orchestration from parsed CLI arguments to a violation count.

use crate::cli::Cli;
use crate::driver::run_analysis;
use crate::engine::{AnalysisEngine, ProcessEngine};
use crate::error::{Result, SrclintError};
use crate::local_source;
use crate::path_matcher::FileFilter;
use crate::reporter::Reporter;
use crate::revision_source::{self, RevisionSpec, SVNLOOK_PROBE_PATHS, discover_svnlook};
use crate::source::{FileMap, ResolvedFile};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Exit code for a clean run with no violations.
pub const EXIT_OK: i32 = 0;
/// Exit code for argument, path, or VCS errors.
pub const EXIT_ERROR: i32 = 1;
/// Exit code when the engine found violations.
pub const EXIT_VIOLATIONS: i32 = 2;

/// Settings filename probed next to the executable when `-s` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "srclint.settings.json";

/// Resolves the file set, runs the analysis, and returns the violation
/// count. The default subprocess engine is used; [`run_with_engine`] is the
/// seam for supplying another.
pub fn run<W: Write>(cli: &Cli, reporter: &mut Reporter<W>) -> Result<u64> {
    let mut engine = ProcessEngine::new(cli.analyzer.clone());
    run_with_engine(cli, &mut engine, reporter)
}

/// As [`run`], with the engine supplied by the caller.
pub fn run_with_engine<W: Write>(
    cli: &Cli,
    engine: &mut dyn AnalysisEngine,
    reporter: &mut Reporter<W>,
) -> Result<u64> {
    let filter = FileFilter::new(&cli.include, &cli.exclude)?;
    let (files, file_map) = resolve_files(cli, &filter)?;

    let settings = match &cli.settings {
        Some(path) => Some(path.clone()),
        None => discover_settings(),
    };

    run_analysis(
        engine,
        &files,
        file_map.as_ref(),
        settings.as_deref(),
        cli.verbose,
        reporter,
    )
}

/// Maps a run outcome onto the process exit code.
pub fn exit_code(violations: u64) -> i32 {
    if violations == 0 { EXIT_OK } else { EXIT_VIOLATIONS }
}

fn resolve_files(cli: &Cli, filter: &FileFilter) -> Result<(Vec<ResolvedFile>, Option<FileMap>)> {
    match RevisionSpec::from_args(cli.revision.as_deref(), cli.transaction.as_deref()) {
        Some(spec) => {
            let repo = cli.inputs.first().ok_or_else(|| {
                SrclintError::invalid_input(
                    "revision mode requires the repository path as the input",
                )
            })?;
            if cli.inputs.len() > 1 {
                return Err(SrclintError::invalid_input(
                    "revision mode takes exactly one input, the repository path",
                ));
            }

            let svnlook = match &cli.svnlook {
                Some(path) => path.clone(),
                None => discover_svnlook(SVNLOOK_PROBE_PATHS)?,
            };
            let temp_dir = cli
                .temp
                .clone()
                .unwrap_or_else(|| std::env::temp_dir().join("srclint-staging"));

            let (files, map) =
                revision_source::resolve(&svnlook, Path::new(repo), &spec, &temp_dir, filter)?;
            Ok((files, Some(map)))
        }
        None => {
            if cli.inputs.is_empty() {
                return Err(SrclintError::invalid_input(
                    "no inputs given; pass files, directories, or glob patterns",
                ));
            }
            let files = local_source::resolve(&cli.inputs, cli.recursive, filter)?;
            Ok((files, None))
        }
    }
}

fn discover_settings() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let candidate = exe.parent()?.join(DEFAULT_SETTINGS_FILE);
    if candidate.is_file() {
        tracing::debug!("Using settings discovered at {}", candidate.display());
        Some(candidate)
    } else {
        None
    }
}
