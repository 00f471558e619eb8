use crate::shared::Result;
use serde::de::DeserializeOwned;

/// Status line and raw body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Canonical reason phrase, e.g. `Not Found`
    pub reason: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, reason: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `404 Not Found` style status message for diagnostics
    pub fn status_message(&self) -> String {
        if self.reason.is_empty() {
            self.status.to_string()
        } else {
            format!("{} {}", self.status, self.reason)
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Into::into)
    }
}

/// HttpClient port for blocking GET requests
///
/// Retry, backoff and timeout policy belong to implementations; callers
/// only see one response or one transport error per request.
pub trait HttpClient {
    /// Issues a GET request with the given extra headers
    ///
    /// # Errors
    /// Returns an error only for transport failures. Non-success statuses are
    /// returned as a normal [`HttpResponse`].
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse>;
}
