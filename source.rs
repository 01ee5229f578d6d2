//! Text sources: local file, web page, or an inline string.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use encoding_rs::{UTF_8, WINDOWS_1252};
use url::Url;

use crate::error::{DensityError, Result};
use crate::web;

/// Where the raw text comes from. Exactly one variant per run, picked once
/// at the entry point.
#[derive(Debug)]
pub enum TextSource {
    File(PathBuf),
    Url(Url),
    Inline(String),
}

impl TextSource {
    /// Produce the raw text. Network and filesystem I/O happen here and
    /// nowhere else in the pipeline.
    pub fn load(&self, timeout: Duration) -> Result<String> {
        match self {
            TextSource::File(path) => load_file(path),
            TextSource::Url(url) => web::fetch_and_extract_text(url, timeout),
            TextSource::Inline(text) => Ok(text.clone()),
        }
    }
}

fn load_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|_| DensityError::Read(path.to_path_buf()))?;
    decode_bytes(&bytes).ok_or_else(|| DensityError::Read(path.to_path_buf()))
}

/// Try each encoding in priority order; return the first clean decode.
/// UTF-8 is BOM-aware; Windows-1252 maps every byte, so it doubles as the
/// latin-1 fallback.
fn decode_bytes(bytes: &[u8]) -> Option<String> {
    for enc in [UTF_8, WINDOWS_1252] {
        let (text, _, had_errors) = enc.decode(bytes);
        if !had_errors {
            return Some(text.into_owned());
        }
    }
    None
}
