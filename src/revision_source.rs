//! Sourcing files from a Subversion revision or transaction.
//!
//! Queries `svnlook changed` for the paths touched by a changeset, filters
//! them, and materializes each accepted file's content (via `svnlook cat`)
//! into a staging directory so a file-based engine can read it. The staged
//! path to repository path mapping is kept in a [`FileMap`] so reports show
//! repository-relative locations.

use crate::error::{Result, SrclintError};
use crate::path_matcher::FileFilter;
use crate::source::{FileMap, ResolvedFile};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;
use tracing::instrument;

/// Identifies the changeset to analyze. Exactly one of the two is active;
/// callers resolve the revision-wins precedence before constructing this.
#[derive(Debug, Clone)]
pub enum RevisionSpec {
    Revision(String),
    Transaction(String),
}

impl RevisionSpec {
    /// Builds the spec from the two CLI options. Revision takes precedence
    /// when both are given; `None` when neither is set.
    pub fn from_args(revision: Option<&str>, transaction: Option<&str>) -> Option<Self> {
        match (revision, transaction) {
            (Some(rev), _) => Some(Self::Revision(rev.to_string())),
            (None, Some(txn)) => Some(Self::Transaction(txn.to_string())),
            (None, None) => None,
        }
    }

    fn flag_args(&self) -> [&str; 2] {
        match self {
            Self::Revision(rev) => ["--revision", rev],
            Self::Transaction(txn) => ["--transaction", txn],
        }
    }
}

/// Well-known svnlook install locations probed in order when `--svnlook` is
/// not given.
pub const SVNLOOK_PROBE_PATHS: &[&str] = &[
    "/usr/bin/svnlook",
    "/usr/local/bin/svnlook",
    "/opt/homebrew/bin/svnlook",
    "/opt/local/bin/svnlook",
    "C:\\Program Files\\Subversion\\bin\\svnlook.exe",
    "C:\\Program Files (x86)\\Subversion\\bin\\svnlook.exe",
    "C:\\Program Files\\CollabNet\\Subversion Server\\svnlook.exe",
];

/// Probes the given locations in order and returns the first that exists.
///
/// Fails with `VcsQueryFailed` when the probe exhausts; an unset helper path
/// is never left implicit.
pub fn discover_svnlook<P: AsRef<Path>>(probe_paths: &[P]) -> Result<PathBuf> {
    for candidate in probe_paths {
        let candidate = candidate.as_ref();
        if candidate.is_file() {
            tracing::debug!("Found svnlook at {}", candidate.display());
            return Ok(candidate.to_path_buf());
        }
    }
    Err(SrclintError::vcs_query_failed(
        "svnlook discovery",
        "svnlook not found in any well-known location; pass --svnlook",
    ))
}

/// Resolves the files changed in the given revision or transaction, staging
/// each one's content under `temp_dir`.
///
/// The staging directory is created if missing. Staged files are named
/// `__{index}_{basename}` so changed files sharing a base name cannot
/// collide. Cleanup is best-effort and left to the platform temp handling.
#[instrument(skip(filter), level = "debug")]
pub fn resolve(
    svnlook: &Path,
    repo: &Path,
    spec: &RevisionSpec,
    temp_dir: &Path,
    filter: &FileFilter,
) -> Result<(Vec<ResolvedFile>, FileMap)> {
    fs::create_dir_all(temp_dir).map_err(|e| {
        SrclintError::io_error_with_path("creating staging directory", temp_dir.to_path_buf(), e)
    })?;

    let listing = run_svnlook(svnlook, "changed", spec, repo, None)?;

    let mut files = Vec::new();
    let mut map = FileMap::new();
    let mut index = 0usize;

    for line in listing.lines() {
        let Some(repo_path) = parse_changed_line(line) else {
            tracing::debug!("Skipping changed-listing line: {line:?}");
            continue;
        };
        if !filter.matches(repo_path) {
            continue;
        }

        let basename = Path::new(repo_path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let staged = temp_dir.join(format!("__{index}_{basename}"));
        index += 1;

        let content = run_svnlook_bytes(svnlook, "cat", spec, repo, Some(repo_path))?;
        fs::write(&staged, content).map_err(|e| {
            SrclintError::io_error_with_path("writing staged file", staged.clone(), e)
        })?;

        map.insert(staged.clone(), PathBuf::from(repo_path));
        files.push(ResolvedFile::staged(staged, PathBuf::from(repo_path)));
    }

    tracing::debug!("Staged {} changed files under {}", files.len(), temp_dir.display());
    Ok((files, map))
}

/// Extracts the path from one line of `svnlook changed` output.
///
/// The grammar is optional `A`/`U` status flags, whitespace, then the path.
/// Returns `None` for lines that do not match (deletions, noise), empty
/// paths, and directory entries (trailing separator).
pub fn parse_changed_line(line: &str) -> Option<&str> {
    static LINE_RE: LazyLock<regex::Regex> =
        LazyLock::new(|| regex::Regex::new(r"^[AU]*\s+(.+)$").expect("changed-line regex"));

    let captures = LINE_RE.captures(line.trim_end_matches(['\r', '\n']))?;
    let path = captures.get(1)?.as_str().trim_end();
    if path.is_empty() || path.ends_with('/') || path.ends_with('\\') {
        return None;
    }
    Some(path)
}

fn run_svnlook(
    svnlook: &Path,
    subcommand: &str,
    spec: &RevisionSpec,
    repo: &Path,
    target: Option<&str>,
) -> Result<String> {
    let bytes = run_svnlook_bytes(svnlook, subcommand, spec, repo, target)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn run_svnlook_bytes(
    svnlook: &Path,
    subcommand: &str,
    spec: &RevisionSpec,
    repo: &Path,
    target: Option<&str>,
) -> Result<Vec<u8>> {
    let operation = format!("svnlook {subcommand}");

    let mut command = Command::new(svnlook);
    command.arg(subcommand).args(spec.flag_args()).arg(repo);
    if let Some(target) = target {
        command.arg(target);
    }

    tracing::debug!("Executing {command:?}");
    let output = command.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SrclintError::vcs_query_failed(
                operation.clone(),
                format!("{} not found", svnlook.display()),
            )
        } else {
            SrclintError::vcs_query_failed(operation.clone(), format!("failed to execute: {e}"))
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::error!("{operation} failed. Stderr:\n{stderr}");
        return Err(SrclintError::vcs_query_failed(
            operation,
            format!("exited with {}: {}", output.status, stderr.trim()),
        ));
    }

    Ok(output.stdout)
}
