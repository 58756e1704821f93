use reqwest::blocking::Client;
use reqwest::{StatusCode, header, redirect};
use tracing::{debug, warn};

use crate::config::{CrawlConfig, MAX_REDIRECTS};
use crate::error::{ConfigError, FetchError};

/// Anything that can hand back the raw HTML of a numbered catalog page.
pub trait PageSource {
    fn fetch_page(&self, page: u32) -> Result<String, FetchError>;
}

/// Blocking HTTP fetcher that reuses one client for the whole crawl.
pub struct Fetcher {
    client: Client,
    config: CrawlConfig,
}

impl Fetcher {
    pub fn new(config: &CrawlConfig) -> Result<Self, ConfigError> {
        let redirect_policy = redirect::Policy::custom(|attempt| {
            if attempt.previous().len() > MAX_REDIRECTS {
                attempt.error("Too many redirects")
            } else {
                attempt.follow()
            }
        });

        let client = Client::builder().redirect(redirect_policy).build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn request(&self, page: u32) -> Result<String, FetchError> {
        let url = self.config.page_url(page);
        debug!(page, %url, "requesting page");

        let resp = self
            .client
            .get(&url)
            .header(header::USER_AGENT, &self.config.user_agent)
            .header(header::ACCEPT_LANGUAGE, &self.config.accept_language)
            .send()
            .map_err(|source| FetchError::Request { page, source })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status { page, status });
        }

        resp.text().map_err(|source| FetchError::Body { page, source })
    }
}

impl PageSource for Fetcher {
    fn fetch_page(&self, page: u32) -> Result<String, FetchError> {
        self.request(page).inspect_err(|err| match err {
            FetchError::Status { status, .. } => {
                warn!(page, status = status.as_u16(), "page request failed")
            }
            other => warn!(page, error = %other, "page request failed"),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    /// Answers a single request with the given raw HTTP response.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap_or(0) > 0 && line != "\r\n" {
                line.clear();
            }
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{addr}/?pn=product.list")
    }

    #[test]
    fn non_ok_status_is_reported_with_page_number() {
        let base_url =
            serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let fetcher = Fetcher::new(&CrawlConfig::default().with_base_url(base_url)).unwrap();

        let err = fetcher.fetch_page(1).unwrap_err();

        assert!(matches!(
            err,
            FetchError::Status { page: 1, status } if status == StatusCode::NOT_FOUND
        ));
        assert_eq!(err.to_string(), "page 1 request failed with status 404 Not Found");
    }

    #[test]
    fn ok_status_returns_body() {
        let base_url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: 13\r\nConnection: close\r\n\r\n<p>상품</p>",
        );
        let fetcher = Fetcher::new(&CrawlConfig::default().with_base_url(base_url)).unwrap();

        assert_eq!(fetcher.fetch_page(1).unwrap(), "<p>상품</p>");
    }
}
