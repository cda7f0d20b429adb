//! Shared data model for the file-sourcing subsystem.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A file handed to the analysis engine.
///
/// `physical_path` is where the bytes actually live; `display_path` is the
/// path shown to the user in reports. Local sourcing keeps the two identical;
/// revision sourcing stages repository content into temporary files and keeps
/// the repository path for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub physical_path: PathBuf,
    pub display_path: PathBuf,
}

impl ResolvedFile {
    /// A file resolved from disk, displayed under its own path.
    pub fn local(path: PathBuf) -> Self {
        Self {
            physical_path: path.clone(),
            display_path: path,
        }
    }

    /// A file staged from a repository, displayed under its repository path.
    pub fn staged(physical_path: PathBuf, display_path: PathBuf) -> Self {
        Self {
            physical_path,
            display_path,
        }
    }
}

/// Mapping from staged physical path to original repository path.
///
/// Built incrementally during staging, read-only during analysis, and
/// discarded with the staging directory after the run.
#[derive(Debug, Default)]
pub struct FileMap {
    staged_to_original: HashMap<PathBuf, PathBuf>,
}

impl FileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `staged` holds the content of `original`.
    pub fn insert(&mut self, staged: PathBuf, original: PathBuf) {
        self.staged_to_original.insert(staged, original);
    }

    /// Translates a staged path back to its repository path.
    ///
    /// Paths with no mapping pass through unchanged, so local files reported
    /// by the engine keep their own path.
    pub fn display_for(&self, path: &Path) -> PathBuf {
        self.staged_to_original
            .get(path)
            .cloned()
            .unwrap_or_else(|| path.to_path_buf())
    }

    pub fn len(&self) -> usize {
        self.staged_to_original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged_to_original.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_resolved_file_has_identical_paths() {
        let file = ResolvedFile::local(PathBuf::from("/a/b.cs"));
        assert_eq!(file.physical_path, file.display_path);
    }

    #[test]
    fn test_file_map_translates_known_paths() {
        let mut map = FileMap::new();
        map.insert(
            PathBuf::from("/tmp/stage/__0_Foo.cs"),
            PathBuf::from("trunk/src/Foo.cs"),
        );
        assert_eq!(
            map.display_for(Path::new("/tmp/stage/__0_Foo.cs")),
            PathBuf::from("trunk/src/Foo.cs")
        );
    }

    #[test]
    fn test_file_map_passes_unknown_paths_through() {
        let map = FileMap::new();
        assert_eq!(
            map.display_for(Path::new("/elsewhere/Bar.cs")),
            PathBuf::from("/elsewhere/Bar.cs")
        );
    }
}
