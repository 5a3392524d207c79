//! HTTP plumbing shared by every endpoint wrapper.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Client for the shop-management service.
///
/// Endpoint wrappers live in the per-domain modules (`customers`,
/// `vehicles`, `inventory`, `orders`, `planning`); this type carries the
/// connection and the request/response conventions.
#[derive(Debug, Clone)]
pub struct ShopClient {
    client: Client,
    base_url: String,
}

impl ShopClient {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        handle_response(response).await
    }

    /// GET that treats a 404 as an absent record.
    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> ClientResult<Option<T>> {
        match self.get(path).await {
            Ok(value) => Ok(Some(value)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        handle_response(response).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let response = self.client.put(&url).json(body).send().await?;
        handle_response(response).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "PATCH");
        let response = self.client.patch(&url).json(body).send().await?;
        handle_response(response).await
    }

    /// PATCH without a body (the disable endpoint takes none).
    pub(crate) async fn patch_empty(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!(%url, "PATCH");
        let response = self.client.patch(&url).send().await?;
        expect_success(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self.client.delete(&url).send().await?;
        expect_success(response).await
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Map a non-success status to the client error taxonomy.
fn error_for_status(status: StatusCode, body: String) -> ClientError {
    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(body),
        StatusCode::BAD_REQUEST => ClientError::Validation(body),
        _ => ClientError::Service {
            status: status.as_u16(),
            body,
        },
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, "request failed");
        return Err(error_for_status(status, body));
    }
    response.json().await.map_err(Into::into)
}

/// Success is all that matters for deletes/disables (the service answers
/// 200/204 with no meaningful body).
async fn expect_success(response: reqwest::Response) -> ClientResult<()> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_for_status(status, body));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://x/api/v1", "/customers/list"),
            "http://x/api/v1/customers/list"
        );
        assert_eq!(
            join_url("http://x/api/v1", "customers/list"),
            "http://x/api/v1/customers/list"
        );
    }

    #[test]
    fn new_strips_trailing_slash_from_base_url() {
        let client = ShopClient::new(&ClientConfig::new("http://x/api/v1/")).unwrap();
        assert_eq!(client.url("customers/list"), "http://x/api/v1/customers/list");
    }

    #[test]
    fn status_mapping_matches_the_error_taxonomy() {
        assert!(matches!(
            error_for_status(StatusCode::NOT_FOUND, String::new()),
            ClientError::NotFound(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::BAD_REQUEST, String::new()),
            ClientError::Validation(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            ClientError::Service { status: 500, .. }
        ));
    }
}
