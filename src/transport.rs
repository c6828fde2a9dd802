//! The HTTP seam shared by every operation group.

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use url::Url;

/// User agent sent with every request.
pub const USER_AGENT_VALUE: &str = concat!("dnspod-rs/", env!("CARGO_PKG_VERSION"));

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// HTTP methods used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully built request, with the form body already encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub body: String,
}

/// Executes requests and returns the raw response body.
///
/// Implementations must not interpret the HTTP status; the DNSPod API reports
/// failures inside the body. A single handle is shared between callers, so it
/// needs to be usable from several threads at once.
pub trait Transport: Send + Sync {
    fn execute(&self, request: TransportRequest) -> Result<String, reqwest::Error>;
}

impl Transport for reqwest::blocking::Client {
    fn execute(&self, request: TransportRequest) -> Result<String, reqwest::Error> {
        let builder = match request.method {
            Method::Get => self.get(request.url),
            Method::Post => self.post(request.url),
        };

        builder
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(request.body)
            .send()?
            .text()
    }
}
