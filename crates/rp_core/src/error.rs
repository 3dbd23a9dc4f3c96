use std::path::PathBuf;

use thiserror::Error;

/// An IO error tagged with the path it happened at.
///
/// Raw [`std::io::Error`]s don't tell you *which* file couldn't be
/// read; attach the path at the call site with
/// [`IntoIoError::path`]:
///
/// ```
/// use rp_core::IntoIoError;
///
/// let path = std::path::Path::new("does/not/exist.json");
/// let err = std::fs::read_to_string(path).path(path).unwrap_err();
/// assert!(err.to_string().contains("exist.json"));
/// ```
#[derive(Debug, Error)]
#[error("at path {path:?}: {error}")]
pub struct IoError {
    pub error: std::io::Error,
    pub path: PathBuf,
}

pub trait IntoIoError<T> {
    fn path(self, path: impl Into<PathBuf>) -> Result<T, IoError>;
}

impl<T> IntoIoError<T> for Result<T, std::io::Error> {
    fn path(self, path: impl Into<PathBuf>) -> Result<T, IoError> {
        self.map_err(|error| IoError {
            error,
            path: path.into(),
        })
    }
}

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("could not parse json: {0}")]
    From(serde_json::Error),
    #[error("could not serialize json: {0}")]
    To(serde_json::Error),
}

/// Distinguishes deserialization failures from serialization ones,
/// since `serde_json` uses a single error type for both.
pub trait IntoJsonError<T> {
    fn json(self) -> Result<T, JsonError>;
    fn json_to(self) -> Result<T, JsonError>;
}

impl<T> IntoJsonError<T> for Result<T, serde_json::Error> {
    fn json(self) -> Result<T, JsonError> {
        self.map_err(JsonError::From)
    }

    fn json_to(self) -> Result<T, JsonError> {
        self.map_err(JsonError::To)
    }
}

#[derive(Debug, Error)]
pub enum JsonFileError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Json(#[from] JsonError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_the_path() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::from(std::io::ErrorKind::NotFound));
        let err = result.path("some/config.json").unwrap_err();
        assert!(err.to_string().contains("some/config.json"));
    }

    #[test]
    fn json_error_keeps_direction() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{oops");
        assert!(matches!(parse.json(), Err(JsonError::From(_))));
    }
}
