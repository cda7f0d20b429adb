//! Console report formatting: one line per event, one summary line.

use crate::error::{Result, SrclintError};
use std::io::Write;
use std::path::Path;

/// Writes report lines to the given sink.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// One violation: `path(line): ruleId message`.
    pub fn violation(&mut self, path: &Path, line: u64, rule: &str, message: &str) -> Result<()> {
        writeln!(self.out, "{}({line}): {rule} {message}", path.display()).map_err(write_error)
    }

    /// One informational output event, raw.
    pub fn output(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}").map_err(write_error)
    }

    /// The trailing summary line.
    pub fn summary(&mut self, count: u64) -> Result<()> {
        writeln!(self.out, "{count} Violations found").map_err(write_error)
    }
}

fn write_error(err: std::io::Error) -> SrclintError {
    SrclintError::IoError {
        operation: "writing report".to_string(),
        path: None,
        source: Some(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn rendered(build: impl FnOnce(&mut Reporter<&mut Vec<u8>>)) -> String {
        let mut buffer = Vec::new();
        let mut reporter = Reporter::new(&mut buffer);
        build(&mut reporter);
        String::from_utf8(buffer).expect("report output is utf8")
    }

    #[test]
    fn test_violation_line_format() {
        let out = rendered(|r| {
            r.violation(
                &PathBuf::from("src/Foo.cs"),
                42,
                "SA1600",
                "Elements must be documented",
            )
            .unwrap();
        });
        assert_eq!(out, "src/Foo.cs(42): SA1600 Elements must be documented\n");
    }

    #[test]
    fn test_output_line_is_raw_message() {
        let out = rendered(|r| r.output("Pass 1 complete").unwrap());
        assert_eq!(out, "Pass 1 complete\n");
    }

    #[test]
    fn test_summary_line_format() {
        assert_eq!(rendered(|r| r.summary(0).unwrap()), "0 Violations found\n");
        assert_eq!(rendered(|r| r.summary(3).unwrap()), "3 Violations found\n");
    }
}
