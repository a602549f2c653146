//! HTTP client for the category page
//!
//! One browser-like session: fixed header set, cookie store, bounded timeout.
//! Connection errors, timeouts and non-2xx statuses are reported as transport
//! errors; there is no retry. An empty 2xx body is a valid, empty page.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION, HeaderMap, HeaderValue, REFERER,
    UPGRADE_INSECURE_REQUESTS,
};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::infrastructure::config::{ScraperConfig, defaults, fnac};
use crate::infrastructure::crawling::PageFetcher;
use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};

/// Configuration for HTTP client behavior
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
    /// Referer sent with every request
    pub referer: String,
    /// Whether to follow redirects
    pub follow_redirects: bool,
}

impl HttpClientConfig {
    pub fn from_scraper_config(scraper_config: &ScraperConfig) -> Self {
        Self {
            timeout_seconds: scraper_config.request_timeout_seconds,
            ..Self::default()
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            user_agent: fnac::USER_AGENT.to_string(),
            referer: fnac::REFERER.to_string(),
            follow_redirects: true,
        }
    }
}

/// HTTP client with the browser-like header set
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .default_headers(Self::default_headers(&config)?)
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    pub const fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    // Accept-Encoding is negotiated by reqwest from the enabled decoders
    fn default_headers(config: &HttpClientConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(fnac::ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(fnac::ACCEPT_LANGUAGE));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static(fnac::CACHE_CONTROL));
        headers.insert(
            REFERER,
            HeaderValue::from_str(&config.referer)
                .map_err(|e| anyhow!("Invalid referer '{}': {}", config.referer, e))?,
        );
        Ok(headers)
    }

    /// Fetch a page body as a string
    pub async fn fetch_html_string(&self, url: &str) -> ParsingResult<String> {
        info!("🌐 HTTP GET: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ParsingError::transport_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            error!("❌ HTTP error {}: {}", status, url);
            return Err(ParsingError::HttpRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ParsingError::transport_failed(url, format!("Failed to read response body: {e}")))?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch_page(&self, url: &str) -> ParsingResult<String> {
        self.fetch_html_string(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Answer a single request on a loopback port with a canned response
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/")
    }

    #[test]
    fn test_client_creation() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn test_timeout_follows_scraper_config() {
        let scraper_config = ScraperConfig {
            request_timeout_seconds: 3,
            ..ScraperConfig::default()
        };
        let config = HttpClientConfig::from_scraper_config(&scraper_config);
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.user_agent, fnac::USER_AGENT);
    }

    #[test]
    fn test_header_set() {
        let headers = HttpClient::default_headers(&HttpClientConfig::default()).unwrap();
        assert_eq!(headers[REFERER], "https://www.fnac.com/");
        assert_eq!(headers[CACHE_CONTROL], "no-cache");
        assert_eq!(headers[ACCEPT_LANGUAGE], "fr-FR,fr;q=0.9,en;q=0.8");
    }

    #[test]
    fn test_invalid_referer_rejected() {
        let config = HttpClientConfig {
            referer: "bad\nvalue".to_string(),
            ..HttpClientConfig::default()
        };
        assert!(HttpClient::with_config(config).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let config = HttpClientConfig {
            timeout_seconds: 2,
            ..HttpClientConfig::default()
        };
        let client = HttpClient::with_config(config).unwrap();
        // Port 9 on loopback refuses connections on any normal host
        let err = client.fetch_html_string("http://127.0.0.1:9/").await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_empty_success_body_is_not_an_error() {
        let url = serve_once("HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let body = HttpClient::new().unwrap().fetch_html_string(&url).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_is_transport_error() {
        let url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let err = HttpClient::new().unwrap().fetch_html_string(&url).await.unwrap_err();
        assert!(matches!(err, ParsingError::HttpRequestFailed { status: 503, .. }));
        assert!(err.is_transport());
    }
}
