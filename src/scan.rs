use crate::engine::Walker;
use crate::error::TypecatError;
use crate::options::TypecatOptions;
use std::collections::BTreeSet;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Returns the normalized extension of `path`, dot included (`.txt`).
///
/// Filenames without an extension (including dotfiles like `.bashrc`) yield `None`,
/// as do extensions that are not valid UTF-8.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
}

/// Collects the distinct set of extensions among all files under the root.
///
/// Walk errors are skipped, so a nonexistent root yields an empty set.
pub fn scan_extensions(options: &TypecatOptions) -> Result<BTreeSet<String>, TypecatError> {
    let walker = Walker::new(options)?;
    let mut extensions = BTreeSet::new();
    for entry in walker.into_iter() {
        match entry {
            Ok(path) if path.is_file() => {
                if let Some(ext) = extension_of(&path) {
                    extensions.insert(ext);
                }
            }
            Ok(_) => {}
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping unreadable entry while scanning: {}", _e);
            }
        }
    }
    Ok(extensions)
}
