// src/core/net.rs
// Blocking HTTP GET probes against the app under test.
// No retries; redirects follow reqwest's default policy.

use std::{error::Error, time::Duration};

use reqwest::{blocking::Client, Url};

use crate::config::consts::USER_AGENT;

pub type ProbeError = Box<dyn Error>;
pub type ProbeOutcome = Result<ProbeResponse, ProbeError>;

/// What came back from one probe. Lives for a single verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: Option<String>, // None when the body could not be read
}

impl ProbeResponse {
    pub fn new(status: u16, body: &str) -> Self {
        Self { status, body: Some(s!(body)) }
    }
}

/// Scheme + authority of the app under test. `host` keeps an explicit port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub scheme: String,
    pub host: String,
}

impl Target {
    pub fn parse(raw: &str) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(raw)?;
        Self::from_url(&url)
    }

    pub fn from_url(url: &Url) -> Result<Self, Box<dyn Error>> {
        let host = url.host_str().ok_or_else(|| format!("URL has no host: {url}"))?;
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => s!(host),
        };
        Ok(Self { scheme: s!(url.scheme()), host })
    }

    /// Compose `scheme://host/path?query`. Query pairs are form-encoded;
    /// an empty slice leaves the URL without a `?`.
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, Box<dyn Error>> {
        let mut url = Url::parse(&join!(&self.scheme, "://", &self.host, path))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }
}

/// One client per run, reused for each probe in sequence.
pub struct ProbeClient {
    client: Client,
}

impl ProbeClient {
    pub fn new(timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Issue one GET. Transport failures (DNS, refused, timeout) come back as `Err`;
    /// status and body are left for the verifiers to judge.
    pub fn get(&self, target: &Target, path: &str, query: &[(&str, &str)]) -> ProbeOutcome {
        let url = target.url(path, query)?;
        logd!("GET {url}");

        let response = match self.client.get(url.clone()).send() {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                logd!("GET {url} timed out: {e}");
                return Err(format!("Request to {url} timed out").into());
            }
            Err(e) => {
                logd!("GET {url} failed: {e}");
                return Err(e.into());
            }
        };

        let status = response.status().as_u16();
        let body = match response.text() {
            Ok(text) => Some(text),
            Err(e) => {
                logd!("Could not read body from {url}: {e}");
                None
            }
        };
        Ok(ProbeResponse { status, body })
    }
}
