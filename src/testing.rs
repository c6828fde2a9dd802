//! Test doubles shared by the unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::Client;
use crate::transport::{Transport, TransportRequest};

pub(crate) const TOKEN: &str = "13490,6b5976c68aba5b14a0558b77c17c3932";

pub(crate) const OK: &str = r#"{"status":{
    "code":"1","message":"Action completed successful","created_at":"2024-05-01 10:00:00"
}}"#;

/// Records every request and replies with canned bodies, in order.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn respond(&self, body: &str) -> &Self {
        self.responses.lock().unwrap().push_back(body.to_string());
        self
    }

    pub(crate) fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request sent, panicking if there were zero or several.
    pub(crate) fn single_request(&self) -> TransportRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: TransportRequest) -> Result<String, reqwest::Error> {
        self.requests.lock().unwrap().push(request);
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no canned response left"))
    }
}

pub(crate) fn client(transport: &Arc<MockTransport>) -> Client {
    Client::builder()
        .login_token(TOKEN)
        .transport(transport.clone())
        .build()
        .unwrap()
}

/// Decodes the form body of the request.
pub(crate) fn form(request: &TransportRequest) -> Vec<(String, String)> {
    url::form_urlencoded::parse(request.body.as_bytes())
        .into_owned()
        .collect()
}

pub(crate) fn param(request: &TransportRequest, key: &str) -> Option<String> {
    form(request)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// Keys of the form body, without the login token and format every call carries.
pub(crate) fn keys(request: &TransportRequest) -> Vec<String> {
    form(request)
        .into_iter()
        .map(|(k, _)| k)
        .filter(|k| k != "login_token" && k != "format")
        .collect()
}

pub(crate) fn failure(code: &str, message: &str) -> String {
    format!(r#"{{"status":{{"code":"{code}","message":"{message}"}}}}"#)
}
