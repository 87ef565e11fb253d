use std::error;
use std::fmt;

/// Errors raised while assembling or writing generated Python modules.
///
/// Rendering a single [`DataClass`](crate::DataClass) to a string never fails;
/// these surface from module generation and argument parsing.
#[derive(Debug)]
pub enum DataclassGenError {
    /// The request cannot be rendered, e.g. a module with no models.
    GenericError(String),

    /// Creating or writing the output module (file or writer) failed.
    IoError(std::io::Error),

    /// Explicit decorator arguments were not a well-formed JSON object.
    JsonError(serde_json::Error),
}

impl error::Error for DataclassGenError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::GenericError(_) => None,
            Self::IoError(io_error) => Some(io_error),
            Self::JsonError(json_error) => Some(json_error),
        }
    }
}

impl fmt::Display for DataclassGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenericError(message) => write!(f, "{message}"),
            Self::IoError(io_error) => fmt::Display::fmt(io_error, f),
            Self::JsonError(json_error) => fmt::Display::fmt(json_error, f),
        }
    }
}

impl From<&str> for DataclassGenError {
    fn from(message: &str) -> Self {
        Self::GenericError(message.to_string())
    }
}

impl From<String> for DataclassGenError {
    fn from(message: String) -> Self {
        Self::GenericError(message)
    }
}

impl From<std::io::Error> for DataclassGenError {
    fn from(io_error: std::io::Error) -> Self {
        Self::IoError(io_error)
    }
}

impl From<serde_json::Error> for DataclassGenError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::JsonError(json_error)
    }
}
