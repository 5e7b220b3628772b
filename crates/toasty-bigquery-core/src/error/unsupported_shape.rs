use super::Error;

/// Error when a container value has a shape the dialect cannot store.
///
/// BigQuery arrays are single-dimensional, so rendering a rectangular
/// multi-dimensional value as an array literal fails with this error.
#[derive(Debug)]
pub(super) struct UnsupportedShapeError {
    message: Box<str>,
}

impl std::error::Error for UnsupportedShapeError {}

impl core::fmt::Display for UnsupportedShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported shape: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported shape error.
    pub fn unsupported_shape(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedShape(UnsupportedShapeError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported shape error.
    pub fn is_unsupported_shape(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedShape(_))
    }
}
