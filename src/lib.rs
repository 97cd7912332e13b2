//! # Typecat
//!
//! `typecat` is a library for scanning a directory tree for the file extensions it
//! contains, letting an operator pick a subset, and concatenating the content of every
//! matching file into a single combined document. Files are decoded with a statistical
//! encoding detector and fall back to a lossy UTF-8 decode, so unreadable encodings
//! never abort a run.
//!
//! All operator interaction goes through the [`Console`] trait; [`ScriptedConsole`]
//! substitutes for a real terminal in tests and automation.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use typecat::{ScriptedConsole, TypecatBuilder, typecat};
//!
//! let options = TypecatBuilder::new(".")
//!     .output_dir("OutputFiles")
//!     .respect_gitignore(true)
//!     .build();
//!
//! // Pick the first listed extension.
//! let mut console = ScriptedConsole::new(["1"]);
//! let summary = typecat(options, &mut console).expect("run failed");
//!
//! if let Some(summary) = summary {
//!     println!("Wrote {}", summary.output_path.display());
//! }
//! ```

mod engine;
mod error;
mod options;
mod output;
mod prompt;
mod reader;
mod scan;
mod types;

pub use engine::{combine, typecat};
pub use error::TypecatError;
pub use options::{TypecatBuilder, TypecatOptions};
pub use output::{OUTPUT_FILE_NAME, OutputDocument};
pub use prompt::{Console, ScriptedConsole, StdConsole, select};
pub use reader::{Decoded, decode_bytes, read_text};
pub use scan::{extension_of, scan_extensions};
pub use types::{CombineSummary, CombinedFile};
