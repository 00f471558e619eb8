use cocoa_sbom::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock HttpClient serving canned responses; unknown URLs fail at transport level
#[derive(Default, Clone)]
pub struct MockHttpClient {
    responses: HashMap<String, HttpResponse>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: &[u8]) -> Self {
        self.responses
            .insert(url.to_string(), HttpResponse::new(200, "OK", body.to_vec()));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16, reason: &str) -> Self {
        self.responses
            .insert(url.to_string(), HttpResponse::new(status, reason, Vec::new()));
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl HttpClient for MockHttpClient {
    fn get(&self, url: &str, _headers: &[(&str, &str)]) -> Result<HttpResponse> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(response) => Ok(response.clone()),
            None => anyhow::bail!("Mock connection refused: {}", url),
        }
    }
}
