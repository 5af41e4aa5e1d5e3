//! Pre-upload file gate
//!
//! Client-side guard run strictly before any network call. This is not
//! authoritative business validation (the server re-checks everything), it
//! only blocks obviously wrong files without wasting an upload.

use vendhub_common::format::format_bytes;
use vendhub_common::{Error, Result};

/// Maximum accepted upload size: 10 MiB
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted filename extensions (case-insensitive)
const ACCEPTED_EXTENSIONS: [&str; 5] = ["csv", "xlsx", "xls", "json", "xml"];

/// Accepted MIME types. Browsers and shells report spreadsheets
/// inconsistently, so the extension fallback below does the real work for
/// XLSX/XLS files with empty or generic MIME types.
const ACCEPTED_MIME_TYPES: [&str; 7] = [
    "text/csv",
    "application/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/json",
    "application/xml",
    "text/xml",
];

/// File attributes checked by the gate
#[derive(Debug, Clone)]
pub struct UploadCandidate<'a> {
    pub filename: &'a str,
    /// Reported MIME type, `None` or empty when unknown
    pub mime_type: Option<&'a str>,
    pub size_bytes: u64,
}

/// Lower-cased filename extension, if any
fn extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

/// Accepted when either the MIME type or the filename extension matches
fn type_accepted(candidate: &UploadCandidate<'_>) -> bool {
    if let Some(mime) = candidate.mime_type {
        if ACCEPTED_MIME_TYPES.contains(&mime.to_ascii_lowercase().as_str()) {
            return true;
        }
    }
    match extension(candidate.filename) {
        Some(ext) => ACCEPTED_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

/// Validate a file against the gate, with a user-facing reason on rejection
pub fn validate_upload(candidate: &UploadCandidate<'_>) -> Result<()> {
    if !type_accepted(candidate) {
        return Err(Error::InvalidInput(format!(
            "Unsupported file type: {} (accepted: {})",
            candidate.filename,
            ACCEPTED_EXTENSIONS.join(", ")
        )));
    }
    if candidate.size_bytes > MAX_UPLOAD_BYTES {
        return Err(Error::InvalidInput(format!(
            "File too large: {} (limit {})",
            format_bytes(candidate.size_bytes),
            format_bytes(MAX_UPLOAD_BYTES)
        )));
    }
    Ok(())
}

/// Convenience predicate form of [`validate_upload`]
pub fn is_valid_file(filename: &str, mime_type: Option<&str>, size_bytes: u64) -> bool {
    validate_upload(&UploadCandidate {
        filename,
        mime_type,
        size_bytes,
    })
    .is_ok()
}

/// MIME type to attach to the multipart upload, inferred from the extension
/// when the caller has no better information
pub fn mime_for_filename(filename: &str) -> &'static str {
    match extension(filename).as_deref() {
        Some("csv") => "text/csv",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("xls") => "application/vnd.ms-excel",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        _ => "application/octet-stream",
    }
}
