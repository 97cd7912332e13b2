use crate::error::TypecatError;
use crate::options::TypecatOptions;
use crate::output::OutputDocument;
use crate::prompt::{Console, select};
use crate::reader::{self, Decoded};
use crate::scan::{extension_of, scan_extensions};
use crate::types::{CombineSummary, CombinedFile};
use ignore::WalkBuilder;
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing;
pub(crate) struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    pub(crate) fn new(options: &TypecatOptions) -> Result<Self, TypecatError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .git_ignore(options.respect_gitignore)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .ignore(false);
        if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    TypecatError::Walk(format!("Invalid glob pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder
                .build()
                .map_err(|e| TypecatError::Walk(format!("Failed to build glob set: {}", e)))?;
            builder.filter_entry(move |entry| !matcher.is_match(entry.path()));
        }
        Ok(Self {
            inner: builder.build(),
        })
    }
    pub(crate) fn into_iter(self) -> impl Iterator<Item = Result<PathBuf, TypecatError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) => Some(Ok(entry.path().to_path_buf())),
            Err(e) => Some(Err(TypecatError::Walk(e.to_string()))),
        })
    }
}

/// Runs the full interactive pipeline: scan the tree for extensions, let the operator
/// pick a subset, and combine the matching files.
///
/// Returns `None` when nothing was selected; no output file is created in that case.
pub fn typecat(
    options: TypecatOptions,
    console: &mut dyn Console,
) -> Result<Option<CombineSummary>, TypecatError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Scanning {} for file types", options.root.display());
    let extensions = scan_extensions(&options)?;
    let choices: Vec<String> = extensions.into_iter().collect();
    let selected = select(console, "Select file types to include:", &choices)?;
    if selected.is_empty() {
        console.say("No file types selected.")?;
        return Ok(None);
    }
    combine(&options, &selected, console).map(Some)
}

/// Combines every file under the root whose extension is in `selected` into the
/// output document. Files that cannot be read are skipped with a diagnostic; a single
/// failure never aborts the pass.
pub fn combine(
    options: &TypecatOptions,
    selected: &[String],
    console: &mut dyn Console,
) -> Result<CombineSummary, TypecatError> {
    let walker = Walker::new(options)?;
    let mut document = OutputDocument::create(&options.output_dir)?;
    let mut files = Vec::new();
    let mut skipped = Vec::new();
    for entry in walker.into_iter() {
        let path = match entry {
            Ok(p) => p,
            Err(e) => {
                console.say(&format!("Could not read entry: {e}"))?;
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        let matches = match extension_of(&path) {
            Some(ext) => selected.contains(&ext),
            None => false,
        };
        if !matches {
            continue;
        }
        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().into_owned(),
            None => path.display().to_string(),
        };
        match reader::read_text(&path) {
            Ok(decoded) => {
                if let Decoded::Lossy { looks_binary, .. } = &decoded {
                    let note = if *looks_binary {
                        " (content looks binary)"
                    } else {
                        ""
                    };
                    console.say(&format!(
                        "Could not decode {} with detected encoding; using lossy UTF-8{}",
                        path.display(),
                        note
                    ))?;
                }
                document.append_block(&name, decoded.text())?;
                files.push(CombinedFile {
                    encoding: decoded.encoding().map(str::to_string),
                    lossy: decoded.is_lossy(),
                    path,
                });
            }
            Err(e) => {
                console.say(&format!("Could not read file {}: {}", path.display(), e))?;
                skipped.push(path);
            }
        }
    }
    let output_path = document.finish()?;
    console.say(&format!("Combined file saved as {}", output_path.display()))?;
    Ok(CombineSummary {
        output_path,
        files,
        skipped,
    })
}
