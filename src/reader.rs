//! Encoding-aware file reading.
//!
//! Reads a file as raw bytes, guesses the encoding with a statistical detector, and
//! decodes with the guess. Input the guessed encoding cannot represent falls back to a
//! lossy UTF-8 decode, so every file yields *some* string.

use crate::error::TypecatError;
use chardetng::EncodingDetector;
use std::fs;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

const INSPECT_LIMIT: usize = 4096;

/// The outcome of decoding a file's bytes.
///
/// `Clean` means the bytes decoded with the detected encoding without any malformed
/// sequences. `Lossy` means the strict decode reported errors and the text is a lossy
/// UTF-8 rendering instead (malformed sequences replaced with U+FFFD).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Clean {
        text: String,
        /// Name of the encoding actually used (after BOM sniffing).
        encoding: &'static str,
    },
    Lossy {
        text: String,
        /// Whether the raw bytes classified as binary content.
        looks_binary: bool,
    },
}

impl Decoded {
    pub fn text(&self) -> &str {
        match self {
            Decoded::Clean { text, .. } | Decoded::Lossy { text, .. } => text,
        }
    }
    pub fn into_text(self) -> String {
        match self {
            Decoded::Clean { text, .. } | Decoded::Lossy { text, .. } => text,
        }
    }
    pub fn encoding(&self) -> Option<&'static str> {
        match self {
            Decoded::Clean { encoding, .. } => Some(encoding),
            Decoded::Lossy { .. } => None,
        }
    }
    pub fn is_lossy(&self) -> bool {
        matches!(self, Decoded::Lossy { .. })
    }
}

/// Reads `path` and decodes its content.
///
/// The only error that crosses this boundary is the initial read failing; decoding
/// itself always produces a string.
pub fn read_text(path: &Path) -> Result<Decoded, TypecatError> {
    let raw = fs::read(path).map_err(|e| TypecatError::io(path, e))?;
    Ok(decode_bytes(&raw))
}

/// Decodes raw bytes with the detected encoding, falling back to lossy UTF-8.
pub fn decode_bytes(raw: &[u8]) -> Decoded {
    let mut detector = EncodingDetector::new();
    detector.feed(raw, true);
    let guessed = detector.guess(None, true);
    let (text, used, had_errors) = guessed.decode(raw);
    if !had_errors {
        return Decoded::Clean {
            text: text.into_owned(),
            encoding: used.name(),
        };
    }
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Strict decode as {} failed, falling back to lossy UTF-8",
        used.name()
    );
    let head = &raw[..raw.len().min(INSPECT_LIMIT)];
    Decoded::Lossy {
        text: String::from_utf8_lossy(raw).into_owned(),
        looks_binary: content_inspector::inspect(head).is_binary(),
    }
}
