//! Include/exclude filtering over candidate paths.
//!
//! A [`FileFilter`] holds two ordered lists of case-insensitive regular
//! expressions. When any include patterns are present a path must match at
//! least one of them; an exclude match then suppresses the path. Patterns are
//! searched anywhere in the path string, not anchored.

use crate::error::{Result, SrclintError};
use regex::{Regex, RegexBuilder};

/// An include/exclude predicate over candidate path strings.
#[derive(Debug, Default)]
pub struct FileFilter {
    includes: Vec<Regex>,
    excludes: Vec<Regex>,
}

impl FileFilter {
    /// Compiles the given include and exclude patterns into a filter.
    ///
    /// Returns an `InvalidInput` error naming the offending pattern if one
    /// fails to compile.
    pub fn new(includes: &[String], excludes: &[String]) -> Result<Self> {
        Ok(Self {
            includes: compile_patterns(includes)?,
            excludes: compile_patterns(excludes)?,
        })
    }

    /// A filter that accepts every path.
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Returns `true` if the path passes the filter.
    ///
    /// Pure function of the path and the compiled patterns; no side effects.
    pub fn matches(&self, path: &str) -> bool {
        if !self.includes.is_empty() && !self.includes.iter().any(|re| re.is_match(path)) {
            return false;
        }
        !self.excludes.iter().any(|re| re.is_match(path))
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    SrclintError::invalid_input_with_argument(
                        format!("failed to compile pattern: {e}"),
                        pattern.clone(),
                    )
                })
        })
        .collect()
}
