use std::fmt;

use url::Url;

use crate::domain::{ApiKey, BaseUrl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the `api_key` travels for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPlacement {
    /// `?api_key=...`; the request has no body.
    Query,
    /// `"api_key"` field of the JSON body.
    Body,
}

/// Static description of one remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Human-readable name used to label failures.
    pub operation: &'static str,
    pub method: HttpMethod,
    /// Relative to the configured base URL.
    pub path: &'static str,
    pub key: KeyPlacement,
}

impl Endpoint {
    pub fn url(&self, base: &BaseUrl, api_key: &ApiKey) -> Result<Url, url::ParseError> {
        let mut url = base.join(self.path)?;
        if self.key == KeyPlacement::Query {
            url.query_pairs_mut()
                .append_pair(ApiKey::FIELD, api_key.as_str());
        }
        Ok(url)
    }
}

/// Render `url` with the `api_key` query value masked, for error messages.
pub fn redacted_url(url: &Url) -> String {
    if !url.query_pairs().any(|(key, _)| key == ApiKey::FIELD) {
        return url.to_string();
    }

    let pairs = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == ApiKey::FIELD {
                "***".to_owned()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect::<Vec<_>>();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
