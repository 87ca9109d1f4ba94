use std::{fmt, io};

#[derive(Debug)]
pub enum ScanError {
    /// The image path (or URL) does not resolve to anything.
    NotFound { location: String },
    /// Anything else: decoding, permissions, network, writing output.
    Failed(String),
}

impl ScanError {
    pub fn not_found(location: impl Into<String>) -> Self {
        ScanError::NotFound {
            location: location.into(),
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::NotFound { location } => {
                write!(f, "Error: The file at {} was not found.", location)
            }
            ScanError::Failed(description) => write!(f, "An error occurred: {}", description),
        }
    }
}

impl std::error::Error for ScanError {}

impl From<io::Error> for ScanError {
    fn from(err: io::Error) -> Self {
        ScanError::Failed(err.to_string())
    }
}
