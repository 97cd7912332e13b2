//! The combined output document.
//!
//! A repeating block structure: a `--- <filename> ---` header line, the file's decoded
//! text, and a single newline separator before the next block. Blocks are appended in
//! the order files are encountered; the underlying handle stays open for the whole
//! aggregation pass and is closed exactly once.

use crate::error::TypecatError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Fixed name of the combined document inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "combined.txt";

/// An open combined document being written.
pub struct OutputDocument {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl OutputDocument {
    /// Creates the output directory if absent and opens `combined.txt` inside it,
    /// truncating any previous run's content.
    pub fn create(output_dir: &Path) -> Result<Self, TypecatError> {
        fs::create_dir_all(output_dir).map_err(|e| TypecatError::io(output_dir, e))?;
        let path = output_dir.join(OUTPUT_FILE_NAME);
        let file = File::create(&path).map_err(|e| TypecatError::io(&path, e))?;
        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one labeled block.
    pub fn append_block(&mut self, name: &str, content: &str) -> Result<(), TypecatError> {
        writeln!(self.writer, "--- {name} ---")
            .and_then(|_| self.writer.write_all(content.as_bytes()))
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|e| TypecatError::io(&self.path, e))
    }

    /// Flushes and closes the document, returning its path.
    pub fn finish(mut self) -> Result<PathBuf, TypecatError> {
        self.writer
            .flush()
            .map_err(|e| TypecatError::io(&self.path, e))?;
        Ok(self.path)
    }
}
