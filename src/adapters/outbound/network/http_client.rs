use crate::ports::outbound::{HttpClient, HttpResponse};
use crate::shared::Result;
use reqwest::blocking::Client;

/// ReqwestHttpClient adapter issuing blocking GET requests
///
/// No timeout or retry is configured; one request yields one response
/// or one transport error.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a client identifying itself as `cocoa-sbom/<version>`
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("cocoa-sbom/{}", version);
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |request, (name, value)| {
                request.header(*name, *value)
            });

        let response = request.send()?;
        let status = response.status();
        let body = response.bytes()?.to_vec();

        Ok(HttpResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            body,
        ))
    }
}
