use url::form_urlencoded;

/// Form parameters to send to the DNSPod API.
#[derive(Debug)]
pub(crate) struct Payload {
    params: Vec<(String, String)>,
}

impl Payload {
    /// Creates a new payload, with the given login token and the JSON format selector.
    pub(crate) fn new(login_token: &str) -> Self {
        Self {
            params: vec![
                ("login_token".to_string(), login_token.to_string()),
                ("format".to_string(), "json".to_string()),
            ],
        }
    }

    /// Adds the given key-value pair.
    pub(crate) fn add<T: ToString>(mut self, key: &str, value: T) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// In the case that `value` is some, adds the key-value pair.
    pub(crate) fn add_if_some<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.add(key, value),
            None => self,
        }
    }

    /// Encodes the parameters as an `application/x-www-form-urlencoded` body.
    pub(crate) fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.params)
            .finish()
    }
}
