use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use crate::error::{Result, VenueError};

/// HTTP client wrapper shared by the venue REST clients.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET a public JSON resource.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(VenueError::Http {
                status,
                message: body,
            });
        }

        resp.json::<T>().await.map_err(VenueError::Request)
    }

    /// Send a signed JSON request.
    ///
    /// The query string is appended to the URL verbatim so the bytes on the
    /// wire are exactly the bytes that were signed.
    pub async fn send_signed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &str,
        body: Option<String>,
        headers: &[(&'static str, String)],
    ) -> Result<T> {
        let url = if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        };

        let mut req = self.client.request(method, &url);
        for (name, value) in headers {
            req = req.header(*name, value);
        }
        if let Some(body) = body {
            req = req.header("content-type", "application/json").body(body);
        }

        let resp = req.send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(VenueError::Http {
                status,
                message: body,
            });
        }

        resp.json::<T>().await.map_err(VenueError::Request)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Join query pairs into a `k=v&k=v` string.
///
/// Values are used verbatim; the venue parameters this crate sends
/// (currency pairs, symbols, limits, statuses) are already URL-safe.
pub fn encode_query(query: &[(&str, &str)]) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}
