use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Request to {url} returned status {status}")]
    HttpStatusError { url: String, status: u16 },

    #[error("Markup mismatch: {message}")]
    ParseError { message: String },

    #[error("Workbook error: {0}")]
    WorkbookError(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn parse(message: impl Into<String>) -> Self {
        ScrapeError::ParseError {
            message: message.into(),
        }
    }

    /// Process exit code for main: 2 for configuration mistakes the user can
    /// fix on the command line, 1 for everything that failed mid-run.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScrapeError::ConfigError { .. } | ScrapeError::InvalidConfigValueError { .. } => 2,
            _ => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScrapeError::ConfigError { .. } | ScrapeError::SerializationError(_) => {
                "Check that the companies file exists and is a JSON array of {name, code} objects"
            }
            ScrapeError::InvalidConfigValueError { .. } => {
                "Fix the flagged command-line value and run again"
            }
            ScrapeError::FetchError(_) | ScrapeError::HttpStatusError { .. } => {
                "Check network connectivity; the site may also be blocking the request"
            }
            ScrapeError::ParseError { .. } => {
                "The site markup likely changed; the selectors need updating"
            }
            ScrapeError::WorkbookError(_) | ScrapeError::IoError(_) => {
                "Check that the output path exists and is writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
