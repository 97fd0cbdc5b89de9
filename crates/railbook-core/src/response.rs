//! Host-facing response type.

use crate::error::Result;

/// Outcome of an `invoke` or `init` call.
///
/// Success carries an opaque payload (possibly empty); error carries a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Success(Vec<u8>),
    Error(String),
}

impl Response {
    pub fn success(payload: impl Into<Vec<u8>>) -> Self {
        Response::Success(payload.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Response::Error(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    /// Payload bytes, or `None` for an error response.
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Response::Success(payload) => Some(payload),
            Response::Error(_) => None,
        }
    }

    /// Error message, or `None` for a success response.
    pub fn message(&self) -> Option<&str> {
        match self {
            Response::Success(_) => None,
            Response::Error(message) => Some(message),
        }
    }
}

impl From<Result<Vec<u8>>> for Response {
    fn from(result: Result<Vec<u8>>) -> Self {
        match result {
            Ok(payload) => Response::Success(payload),
            Err(err) => Response::Error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;

    #[test]
    fn test_from_result() {
        let ok: Response = Ok(b"abc".to_vec()).into();
        assert!(ok.is_success());
        assert_eq!(ok.payload(), Some(&b"abc"[..]));
        assert_eq!(ok.message(), None);

        let err: Response = Err(LedgerError::ArgumentCount { expected: 1 }).into();
        assert!(!err.is_success());
        assert_eq!(err.payload(), None);
        assert_eq!(
            err.message(),
            Some("Incorrect number of arguments. Expecting 1")
        );
    }
}
