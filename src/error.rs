use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TypecatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),
}
impl TypecatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TypecatError::Io {
            path: path.into(),
            source,
        }
    }
}
