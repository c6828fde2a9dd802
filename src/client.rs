use std::sync::{Arc, LazyLock};
use std::time::Duration;

use regex::Regex;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::DomainApi;
use crate::record::RecordApi;
use crate::status::Envelope;
use crate::transport::{Method, Transport, TransportRequest};
use crate::user::UserApi;
use crate::{ClientBuilderError, ClientError, Payload};

/// Default DNSPod API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://dnsapi.cn/";

/// Default page used by [Client::my_public_ip].
pub const DEFAULT_IP_LOOKUP: &str = "http://m.tool.chinaz.com/ipsel";

// constant pattern, compiled on first use
static IPV4_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\.\d+\.\d+").unwrap());

/// Everything an operation group needs to reach the API.
pub(crate) struct Connection {
    endpoint: Url,
    login_token: String,
    transport: Arc<dyn Transport>,
}

impl Connection {
    /// Creates a [Url] for the given action, such as `Domain.Create`.
    fn build_url(&self, action: &str) -> Result<Url, url::ParseError> {
        self.endpoint.join(action)
    }

    /// Returns a payload that already carries the login token and the format.
    pub(crate) fn payload(&self) -> Payload {
        Payload::new(&self.login_token)
    }

    /// POSTs the payload to the given action and decodes the response.
    ///
    /// The status block is checked before the rest of the body is decoded, so
    /// a failed call reports the API's message rather than a missing field.
    pub(crate) fn send_request<T: DeserializeOwned>(
        &self,
        action: &str,
        payload: Payload,
    ) -> Result<T, ClientError> {
        let url = self.build_url(action)?;

        log::debug!("POST {action}");
        let body = self.transport.execute(TransportRequest {
            method: Method::Post,
            url,
            body: payload.encode(),
        })?;
        log::debug!("{action}: received {} bytes", body.len());

        let envelope: Envelope = serde_json::from_str(&body)?;
        if let Err(e) = envelope.status.check() {
            log::debug!("{action} failed with code {}: {}", e.code(), e.message());
            return Err(e.into());
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Builder for a [Client] that handles default values.
#[derive(Default)]
pub struct ClientBuilder {
    endpoint: Option<Url>,
    ip_lookup: Option<Url>,
    login_token: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the API endpoint to the one given.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s semantics.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s semantics.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Sets the page queried by [Client::my_public_ip].
    pub fn ip_lookup(mut self, ip_lookup: &Url) -> Self {
        self.ip_lookup = Some(ip_lookup.clone());
        self
    }

    /// Sets the login token, in the `ID,Token` form DNSPod hands out.
    pub fn login_token(mut self, login_token: &str) -> Self {
        self.login_token = Some(login_token.to_string());
        self
    }

    /// Sets a deadline for each request.
    ///
    /// Without one, a call against an unresponsive server blocks forever.
    /// Ignored when a custom transport is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the default HTTP transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, `https://dnsapi.cn/` is used.
    ///
    /// # Errors
    /// - `MissingField` if the login token isn't added to the builder.
    /// - `UrlParse` if a default URL fails to parse. This shouldn't happen.
    /// - `Reqwest` if the HTTP client can't be initialised.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => DEFAULT_ENDPOINT.parse()?,
        };
        let ip_lookup = match self.ip_lookup {
            Some(ip_lookup) => ip_lookup,
            None => DEFAULT_IP_LOOKUP.parse()?,
        };
        let login_token = self
            .login_token
            .ok_or_else(|| ClientBuilderError::MissingField("login_token".to_string()))?;
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            // reqwest's blocking client defaults to 30s, unset means no deadline here
            None => Arc::new(
                reqwest::blocking::Client::builder()
                    .timeout(self.timeout)
                    .build()?,
            ),
        };

        Ok(Client::with_transport(
            endpoint,
            ip_lookup,
            login_token,
            transport,
        ))
    }
}

/// API client.
///
/// Holds one transport handle, shared by the domain, record and user groups.
pub struct Client {
    ip_lookup: Url,
    transport: Arc<dyn Transport>,
    domain: DomainApi,
    record: RecordApi,
    user: UserApi,
}

impl Client {
    /// Creates a new Client with the default endpoint and no timeout.
    pub fn new(login_token: &str) -> Result<Self, ClientBuilderError> {
        Self::builder().login_token(login_token).build()
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    fn with_transport(
        endpoint: Url,
        ip_lookup: Url,
        login_token: String,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let connection = Arc::new(Connection {
            endpoint,
            login_token,
            transport: Arc::clone(&transport),
        });

        Self {
            ip_lookup,
            transport,
            domain: DomainApi::new(Arc::clone(&connection)),
            record: RecordApi::new(Arc::clone(&connection)),
            user: UserApi::new(connection),
        }
    }

    /// Domain operations.
    pub fn domain(&self) -> &DomainApi {
        &self.domain
    }

    /// Record operations.
    pub fn record(&self) -> &RecordApi {
        &self.record
    }

    /// User account operations.
    pub fn user(&self) -> &UserApi {
        &self.user
    }

    /// Looks up the caller's public IPv4 address.
    ///
    /// Fetches the IP lookup page without authentication and returns the first
    /// dotted quad found in it. The match isn't validated as an address, and an
    /// empty string is returned when the page contains none.
    pub fn my_public_ip(&self) -> Result<String, ClientError> {
        log::debug!("GET {}", self.ip_lookup);
        let body = self.transport.execute(TransportRequest {
            method: Method::Get,
            url: self.ip_lookup.clone(),
            body: String::new(),
        })?;

        Ok(IPV4_PATTERN
            .find(&body)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default())
    }
}
