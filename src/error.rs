use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ReactomeError {
    #[error("invalid drug interaction source: {0}")]
    InvalidDrugSource(String),

    #[error("download request failed: {0}")]
    DownloadHttp(String),

    #[error("download returned status {status}: {message}")]
    DownloadStatus { status: u16, message: String },

    #[error("FI service request failed: {0}")]
    FiHttp(String),

    #[error("FI service returned status {status}: {message}")]
    FiStatus { status: u16, message: String },

    #[error("drug service request failed: {0}")]
    DrugHttp(String),

    #[error("drug service returned status {status}: {message}")]
    DrugStatus { status: u16, message: String },

    #[error("archive error: {0}")]
    Archive(String),
}
