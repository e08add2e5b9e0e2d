//! Immutable response values

use serde::de::DeserializeOwned;

use crate::error::ServiceResult;

/// Status and raw payload of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    body: Vec<u8>,
}

impl Response {
    /// Create a response
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is 2xx
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Raw payload
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the response, decoding the payload as UTF-8 text
    pub fn into_text(self) -> ServiceResult<String> {
        Ok(String::from_utf8(self.body)?)
    }

    /// Consume the response, decoding the payload as JSON
    pub fn into_json<T: DeserializeOwned>(self) -> ServiceResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    #[test]
    fn test_success_range() {
        assert!(Response::new(200, "").is_success());
        assert!(Response::new(204, "").is_success());
        assert!(!Response::new(304, "").is_success());
        assert!(!Response::new(404, "").is_success());
    }

    #[test]
    fn test_into_text() {
        let text = Response::new(200, "héllo").into_text().unwrap();
        assert_eq!(text, "héllo");
    }

    #[test]
    fn test_into_text_rejects_invalid_utf8() {
        let err = Response::new(200, vec![0xff, 0xfe]).into_text().unwrap_err();
        assert!(matches!(err, ServiceError::DecodeError(_)));
    }

    #[test]
    fn test_into_json() {
        let values: Vec<u32> = Response::new(200, "[1,2,3]").into_json().unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
