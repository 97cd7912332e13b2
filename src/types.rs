use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One source file that made it into the combined document.
#[derive(Debug, Serialize, Deserialize)]
pub struct CombinedFile {
    /// The full path to the file.
    pub path: PathBuf,
    /// Name of the encoding the content was decoded with.
    ///
    /// `None` when the detected encoding could not decode the bytes and the lossy
    /// UTF-8 fallback was used instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// Whether the lossy fallback path was taken.
    pub lossy: bool,
}

/// The complete result of an aggregation pass.
#[derive(Debug, Serialize, Deserialize)]
pub struct CombineSummary {
    /// Where the combined document was written.
    pub output_path: PathBuf,
    /// All files appended to the document, in traversal order.
    pub files: Vec<CombinedFile>,
    /// Files that matched the selection but could not be read at all.
    pub skipped: Vec<PathBuf>,
}
