use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SwimStdError {
    #[error("table extraction failed: {0}")]
    Extraction(String),

    #[error("no table extraction program configured. Pass --extractor-cmd or set SWIMSTD_EXTRACTOR")]
    ExtractorNotConfigured,

    #[error("table extraction program '{program}' not found on PATH")]
    ExtractorNotFound { program: String },

    #[error("'{program}' failed with exit code {code}: {stderr}")]
    ExtractorFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("invalid table dump: {0}")]
    TableDump(String),

    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("failed to load column layout from {path}: {reason}")]
    LayoutLoad { path: PathBuf, reason: String },

    #[error("invalid column layout: {0}")]
    LayoutInvalid(String),

    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
