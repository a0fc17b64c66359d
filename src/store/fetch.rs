//! HTTP fetching of the template store.
//!
//! Provides a blocking client that performs exactly one GET per call with a
//! bounded timeout. The response is dropped (and its connection released) on
//! every return path.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

use crate::error::StoreError;

use super::template::{decode_templates, TemplateInfo};

/// Timeout applied to the whole store request, body included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches the template store over HTTP/HTTPS.
#[derive(Debug)]
pub struct StoreFetcher {
    client: Client,
    timeout: Duration,
}

impl StoreFetcher {
    /// Create a fetcher with the 5-second store timeout.
    pub fn new() -> Result<Self, StoreError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder()
            .user_agent(concat!("faas-store/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|source| StoreError::RequestConstruction { source })?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the raw store body from `url`.
    ///
    /// `configured_url` is the URL the user asked for; it is only used to
    /// name the source when the store answers with an empty body.
    pub fn fetch(&self, url: &str, configured_url: &str) -> Result<Vec<u8>, StoreError> {
        let request = self
            .client
            .get(url)
            .build()
            .map_err(|source| StoreError::RequestConstruction { source })?;

        tracing::debug!("Requesting template store: {}", url);

        let response = self
            .client
            .execute(request)
            .map_err(|source| StoreError::Transport { source })?;

        let status = response.status();
        tracing::debug!("Template store responded with {}", status);

        if status != StatusCode::OK {
            return Err(StoreError::UnexpectedStatus {
                wanted: StatusCode::OK.as_u16(),
                got: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .map_err(|source| StoreError::BodyRead { source })?;

        if body.is_empty() {
            return Err(StoreError::EmptyBody {
                url: configured_url.to_string(),
            });
        }

        Ok(body.to_vec())
    }

    /// Fetch and decode the store in one step.
    pub fn fetch_templates(
        &self,
        url: &str,
        configured_url: &str,
    ) -> Result<Vec<TemplateInfo>, StoreError> {
        let body = self.fetch(url, configured_url)?;
        decode_templates(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn default_timeout_is_5_seconds() {
        let fetcher = StoreFetcher::new().unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn custom_timeout() {
        let fetcher = StoreFetcher::with_timeout(Duration::from_millis(250)).unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn fetch_returns_body() {
        let server = MockServer::start();
        let body = r#"[{"template": "go"}]"#;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/templates.json");
            then.status(200).body(body);
        });

        let fetcher = StoreFetcher::new().unwrap();
        let url = server.url("/templates.json");
        let content = fetcher.fetch(&url, &url).unwrap();

        mock.assert();
        assert_eq!(content, body.as_bytes());
    }

    #[test]
    fn fetch_rejects_non_200_status() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/templates.json");
            then.status(404).body("Not Found");
        });

        let fetcher = StoreFetcher::new().unwrap();
        let url = server.url("/templates.json");
        let err = fetcher.fetch(&url, &url).unwrap_err();

        assert!(
            matches!(err, StoreError::UnexpectedStatus { wanted: 200, got: 404 }),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn fetch_rejects_other_success_codes() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/templates.json");
            then.status(204);
        });

        let fetcher = StoreFetcher::new().unwrap();
        let url = server.url("/templates.json");
        let err = fetcher.fetch(&url, &url).unwrap_err();

        assert!(matches!(err, StoreError::UnexpectedStatus { wanted: 200, got: 204 }));
    }

    #[test]
    fn empty_body_names_configured_url() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/templates.json");
            then.status(200);
        });

        let fetcher = StoreFetcher::new().unwrap();
        let err = fetcher
            .fetch(&server.url("/templates.json"), "https://configured.example.com/store.json")
            .unwrap_err();

        match err {
            StoreError::EmptyBody { url } => {
                assert_eq!(url, "https://configured.example.com/store.json")
            }
            other => panic!("expected EmptyBody, got {other}"),
        }
    }

    #[test]
    fn stalled_server_times_out() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/templates.json");
            then.status(200).body("[]").delay(Duration::from_secs(2));
        });

        let fetcher = StoreFetcher::with_timeout(Duration::from_millis(200)).unwrap();
        let url = server.url("/templates.json");
        let err = fetcher.fetch(&url, &url).unwrap_err();

        assert!(matches!(err, StoreError::Transport { .. }), "got {err}");
        assert!(err.is_timeout());
        assert!(err.to_string().contains("timed out"), "got {err}");
    }

    #[test]
    fn fetch_templates_decodes_body() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/templates.json");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"template": "go", "platform": "x86_64"}, {"template": "go-armhf"}]"#);
        });

        let fetcher = StoreFetcher::new().unwrap();
        let url = server.url("/templates.json");
        let templates = fetcher.fetch_templates(&url, &url).unwrap();

        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].name, "go");
        assert_eq!(templates[1].name, "go-armhf");
    }

    #[test]
    fn fetch_templates_reports_decode_error() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/templates.json");
            then.status(200).body(r#"{"templates": []}"#);
        });

        let fetcher = StoreFetcher::new().unwrap();
        let url = server.url("/templates.json");
        let err = fetcher.fetch_templates(&url, &url).unwrap_err();

        assert!(matches!(err, StoreError::Decode(_)), "got {err}");
    }

    #[test]
    fn invalid_url_fails_request_construction() {
        let fetcher = StoreFetcher::new().unwrap();
        let err = fetcher.fetch("not a url", "not a url").unwrap_err();

        assert!(matches!(err, StoreError::RequestConstruction { .. }), "got {err}");
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to be listening.
        let fetcher = StoreFetcher::with_timeout(Duration::from_secs(1)).unwrap();
        let err = fetcher
            .fetch("http://127.0.0.1:9/templates.json", "http://127.0.0.1:9/templates.json")
            .unwrap_err();

        assert!(matches!(err, StoreError::Transport { .. }), "got {err}");
        assert!(!err.is_timeout());
        assert!(
            err.to_string().to_lowercase().contains("refused"),
            "got {err}"
        );
    }
}
