use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

/// Thin HTTP client for the admin API
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        log::info!("[ApiClient] Creating new API client with base URL: {}", base_url);

        Self { client, base_url }
    }

    /// Build a full URL for a given path
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Execute a request and handle common errors
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(ApiError::Decode)
    }

    /// Execute a request whose body is irrelevant (200/204 responses)
    async fn execute_no_content(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }

    // Public API methods

    /// GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] GET {}", url);
        self.execute(self.client.get(&url)).await
    }

    /// POST request
    pub async fn post<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] POST {}", url);
        self.execute(self.client.post(&url).json(body)).await
    }

    /// PUT request
    pub async fn put<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] PUT {}", url);
        self.execute(self.client.put(&url).json(body)).await
    }

    /// DELETE request (no response body expected)
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] DELETE {}", url);
        self.execute_no_content(self.client.delete(&url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_without_doubled_slash() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(
            client.build_url("/api/users"),
            "http://localhost:3000/api/users"
        );
    }
}
