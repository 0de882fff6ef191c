use std::fmt;

#[derive(Debug)]
pub enum FolioError {
    Json(serde_json::Error),
    Config(String),
    Catalog(String),
    InvalidAction(String),
    Io(std::io::Error),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::Json(e) => write!(f, "JSON parsing error: {}", e),
            FolioError::Config(e) => write!(f, "Configuration error: {}", e),
            FolioError::Catalog(e) => write!(f, "Catalog error: {}", e),
            FolioError::InvalidAction(e) => write!(f, "Invalid action: {}", e),
            FolioError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for FolioError {}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Json(err)
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::Io(err)
    }
}
