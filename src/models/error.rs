use std::fmt;

#[derive(Debug)]
pub enum Error {
    DirectoryError(String),
    DocumentReadError(String),
    SegmentationError(String),
    StaleLocationError(String),
    ConfigError(String),
    ReportError(String),
    IoError(std::io::Error),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryError(msg) => write!(f, "Directory Error: {}", msg),
            Error::DocumentReadError(msg) => write!(f, "Document Read Error: {}", msg),
            Error::SegmentationError(msg) => write!(f, "Segmentation Error: {}", msg),
            Error::StaleLocationError(msg) => write!(f, "Stale Location Error: {}", msg),
            Error::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            Error::ReportError(msg) => write!(f, "Report Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::Other(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ReportError(err.to_string())
    }
}
