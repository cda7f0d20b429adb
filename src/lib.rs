//! # srclint
//!
//! srclint is a command-line front end that selects a set of source files
//! and hands them to an external static-analysis engine, reporting the
//! violations found. The engine owns rule evaluation; this crate owns file
//! sourcing:
//!
//! - **Local sourcing**: expanding files, directories, and glob patterns
//!   into a concrete file set, with include/exclude regex filtering.
//! - **Revision sourcing**: querying `svnlook` for the files changed in a
//!   Subversion revision or transaction and staging their content into
//!   temporary files, while reports keep the repository-relative paths.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line argument parsing
//! - [`error`] - Centralized error types for the crate
//! - [`path_matcher`] - Include/exclude regex filtering
//! - [`root_path`] - Common-root computation for relative display
//! - [`source`] - Resolved files and the staged-to-original path map
//! - [`local_source`] - On-disk input expansion
//! - [`revision_source`] - Subversion changeset querying and staging
//! - [`engine`] - The narrow interface to the external analysis engine
//! - [`driver`] - Feeding files to the engine and counting violations
//! - [`reporter`] - One-line-per-event console formatting
//! - [`run`] - Orchestration and exit-code mapping
//!
//! ## Usage as a library
//!
//! ```rust,no_run
//! use srclint_core::path_matcher::FileFilter;
//! use srclint_core::{local_source, driver, engine::ProcessEngine, reporter::Reporter};
//!
//! # fn main() -> srclint_core::error::Result<()> {
//! let filter = FileFilter::new(&[r"\.cs$".to_string()], &[])?;
//! let files = local_source::resolve(&["src".to_string()], true, &filter)?;
//!
//! let mut engine = ProcessEngine::new("source-analyzer".into());
//! let mut reporter = Reporter::new(std::io::stdout().lock());
//! let violations = driver::run_analysis(&mut engine, &files, None, None, false, &mut reporter)?;
//! println!("{violations} violations");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! All fallible functions return [`Result<T>`], an alias for
//! `std::result::Result<T, SrclintError>`. See the [`error`] module.

// Module declarations
pub mod cli;
pub mod driver;
pub mod engine;
pub mod error;
pub mod local_source;
pub mod path_matcher;
pub mod reporter;
pub mod revision_source;
pub mod root_path;
pub mod run;
pub mod source;

// Public API exports
pub use crate::cli::Cli;
pub use crate::driver::run_analysis;
pub use crate::engine::{AnalysisEngine, EngineEvent, Importance, ProcessEngine};
pub use crate::error::{Result, SrclintError as Error};
pub use crate::path_matcher::FileFilter;
pub use crate::reporter::Reporter;
pub use crate::revision_source::{RevisionSpec, SVNLOOK_PROBE_PATHS, discover_svnlook};
pub use crate::root_path::common_root;
pub use crate::run::{EXIT_ERROR, EXIT_OK, EXIT_VIOLATIONS, exit_code, run, run_with_engine};
pub use crate::source::{FileMap, ResolvedFile};
