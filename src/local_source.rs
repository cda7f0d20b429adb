//! Expansion of on-disk input specs into a concrete file set.
//!
//! Each input is a literal file, a directory, or a glob pattern (contains
//! `*` or `?`). Directories enumerate their files, recursively when asked;
//! glob inputs are split into a directory part and a filename pattern. Every
//! candidate becomes an absolute path, then the include/exclude filter is
//! applied over the whole candidate list.

use crate::error::{Result, SrclintError};
use crate::path_matcher::FileFilter;
use crate::source::ResolvedFile;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::instrument;
use walkdir::WalkDir;

/// Expands the given input specs into resolved files.
///
/// Inputs are processed in order and any input that names nothing on disk
/// aborts the whole run with `PathNotFound` — no partial analysis of the
/// remaining inputs. Enumeration order is kept and duplicates are not
/// removed; overlapping inputs may legitimately yield a file twice.
#[instrument(skip(filter), level = "debug")]
pub fn resolve(
    inputs: &[String],
    recursive: bool,
    filter: &FileFilter,
) -> Result<Vec<ResolvedFile>> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    for input in inputs {
        if input.contains(['*', '?']) {
            expand_glob(input, recursive, &mut candidates)?;
        } else {
            let path = Path::new(input);
            if path.is_dir() {
                collect_files(path, recursive, &mut candidates)?;
            } else if path.is_file() {
                candidates.push(absolute(path)?);
            } else {
                return Err(SrclintError::path_not_found(input));
            }
        }
    }

    tracing::debug!("Enumerated {} candidate files", candidates.len());

    Ok(candidates
        .into_iter()
        .filter(|path| filter.matches(&path.to_string_lossy()))
        .map(ResolvedFile::local)
        .collect())
}

/// Splits a wildcard input into its directory part and filename pattern and
/// enumerates matching files under the directory. A pattern with no
/// directory part searches `.`.
fn expand_glob(input: &str, recursive: bool, out: &mut Vec<PathBuf>) -> Result<()> {
    let input_path = Path::new(input);
    let pattern_str = input_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            SrclintError::invalid_input_with_argument("glob input has no filename part", input)
        })?;

    let dir = match input_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(SrclintError::path_not_found(input));
    }

    let pattern = glob::Pattern::new(&pattern_str).map_err(|e| {
        SrclintError::invalid_input_with_argument(format!("bad glob pattern: {e}"), input)
    })?;

    for entry in walk(dir, recursive) {
        let entry = entry.map_err(|e| {
            SrclintError::io_error_with_path(
                "walking directory",
                dir.to_path_buf(),
                std::io::Error::other(e),
            )
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if pattern.matches(&name) {
            out.push(absolute(entry.path())?);
        }
    }
    Ok(())
}

/// Enumerates every file under `dir` as an absolute path.
fn collect_files(dir: &Path, recursive: bool, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in walk(dir, recursive) {
        let entry = entry.map_err(|e| {
            SrclintError::io_error_with_path(
                "walking directory",
                dir.to_path_buf(),
                std::io::Error::other(e),
            )
        })?;
        if entry.file_type().is_file() {
            out.push(absolute(entry.path())?);
        }
    }
    Ok(())
}

fn walk(dir: &Path, recursive: bool) -> walkdir::IntoIter {
    let walker = if recursive {
        WalkDir::new(dir)
    } else {
        WalkDir::new(dir).max_depth(1)
    };
    walker.into_iter()
}

fn absolute(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path)
        .map_err(|e| SrclintError::io_error_with_path("resolving path", path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "content").expect("failed to write fixture file");
        path
    }

    fn physical_paths(files: &[ResolvedFile]) -> Vec<PathBuf> {
        files.iter().map(|f| f.physical_path.clone()).collect()
    }

    #[test]
    fn test_literal_file_input_resolves_to_itself() {
        let temp = TempDir::new().expect("temp dir");
        let file = touch(temp.path(), "Foo.cs");

        let files = resolve(
            &[file.to_string_lossy().into_owned()],
            false,
            &FileFilter::accept_all(),
        )
        .expect("resolve should succeed");

        assert_eq!(
            physical_paths(&files),
            vec![fs::canonicalize(&file).unwrap()]
        );
        assert_eq!(files[0].physical_path, files[0].display_path);
    }

    #[test]
    fn test_directory_non_recursive_returns_only_direct_children() {
        let temp = TempDir::new().expect("temp dir");
        touch(temp.path(), "Top.cs");
        fs::create_dir(temp.path().join("nested")).unwrap();
        touch(&temp.path().join("nested"), "Deep.cs");

        let files = resolve(
            &[temp.path().to_string_lossy().into_owned()],
            false,
            &FileFilter::accept_all(),
        )
        .expect("resolve should succeed");

        let names: Vec<String> = files
            .iter()
            .map(|f| {
                f.physical_path
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, vec!["Top.cs"]);
    }

    #[test]
    fn test_directory_recursive_includes_nested_files() {
        let temp = TempDir::new().expect("temp dir");
        touch(temp.path(), "Top.cs");
        fs::create_dir(temp.path().join("nested")).unwrap();
        touch(&temp.path().join("nested"), "Deep.cs");

        let files = resolve(
            &[temp.path().to_string_lossy().into_owned()],
            true,
            &FileFilter::accept_all(),
        )
        .expect("resolve should succeed");

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_nonexistent_input_fails_with_path_not_found() {
        let temp = TempDir::new().expect("temp dir");
        let missing = temp.path().join("does-not-exist.cs");

        let result = resolve(
            &[missing.to_string_lossy().into_owned()],
            false,
            &FileFilter::accept_all(),
        );

        match result {
            Err(SrclintError::PathNotFound { input }) => {
                assert!(input.contains("does-not-exist.cs"));
            }
            other => panic!("expected PathNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_glob_input_matches_filenames_in_directory() {
        let temp = TempDir::new().expect("temp dir");
        touch(temp.path(), "Foo.cs");
        touch(temp.path(), "Bar.cs");
        touch(temp.path(), "Readme.txt");

        let spec = temp.path().join("*.cs").to_string_lossy().into_owned();
        let files = resolve(&[spec], false, &FileFilter::accept_all())
            .expect("resolve should succeed");

        assert_eq!(files.len(), 2);
        assert!(files
            .iter()
            .all(|f| f.physical_path.extension().is_some_and(|e| e == "cs")));
    }

    #[test]
    fn test_glob_recursive_reaches_nested_directories() {
        let temp = TempDir::new().expect("temp dir");
        touch(temp.path(), "Top.cs");
        fs::create_dir(temp.path().join("nested")).unwrap();
        touch(&temp.path().join("nested"), "Deep.cs");

        let spec = temp.path().join("*.cs").to_string_lossy().into_owned();
        let files = resolve(&[spec], true, &FileFilter::accept_all())
            .expect("resolve should succeed");

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_filter_applied_after_enumeration() {
        let temp = TempDir::new().expect("temp dir");
        touch(temp.path(), "Keep.cs");
        touch(temp.path(), "Keep.Generated.cs");

        let filter = FileFilter::new(&[], &["Generated".to_string()]).unwrap();
        let files = resolve(
            &[temp.path().to_string_lossy().into_owned()],
            false,
            &filter,
        )
        .expect("resolve should succeed");

        assert_eq!(files.len(), 1);
        assert!(files[0]
            .physical_path
            .to_string_lossy()
            .contains("Keep.cs"));
    }

    #[test]
    fn test_overlapping_inputs_keep_duplicates() {
        let temp = TempDir::new().expect("temp dir");
        let file = touch(temp.path(), "Foo.cs");

        let files = resolve(
            &[
                temp.path().to_string_lossy().into_owned(),
                file.to_string_lossy().into_owned(),
            ],
            false,
            &FileFilter::accept_all(),
        )
        .expect("resolve should succeed");

        assert_eq!(files.len(), 2);
    }
}
