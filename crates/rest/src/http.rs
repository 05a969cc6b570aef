//! Shared HTTP plumbing: one reqwest client, one error-mapping table.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use cantina_core::{DomainError, StoreError, StoreResult};

use crate::config::ClientConfig;

/// Thin wrapper over `reqwest::Client` bound to a base URL.
///
/// All stores clone this (cheaply; reqwest clients share their pool).
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> StoreResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::transport(format!("building http client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> StoreResult<T> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        parse_json(check(response).await?).await
    }

    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> StoreResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(transport)?;
        parse_json(check(response).await?).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> StoreResult<T> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        parse_json(check(response).await?).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> StoreResult<T> {
        let response = self
            .http
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        parse_json(check(response).await?).await
    }

    pub async fn delete(&self, path: &str) -> StoreResult<()> {
        let response = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        check(response).await?;
        Ok(())
    }
}

fn transport(e: reqwest::Error) -> StoreError {
    StoreError::transport(e.to_string())
}

async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> StoreResult<T> {
    response
        .json()
        .await
        .map_err(|e| StoreError::transport(format!("decoding response body: {e}")))
}

async fn check(response: reqwest::Response) -> StoreResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    tracing::warn!(%status, %message, "backend rejected request");
    Err(error_for(status, message))
}

/// Map a non-success status to the error kind the stores promise.
fn error_for(status: StatusCode, message: String) -> StoreError {
    match status {
        StatusCode::NOT_FOUND => DomainError::not_found().into(),
        StatusCode::CONFLICT => DomainError::conflict(message).into(),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            DomainError::Validation(message).into()
        }
        _ => StoreError::transport(format!("{status}: {message}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_domain_not_found() {
        assert_eq!(
            error_for(StatusCode::NOT_FOUND, String::new()),
            StoreError::Domain(DomainError::NotFound)
        );
    }

    #[test]
    fn conflict_and_validation_pass_the_body_through() {
        assert!(matches!(
            error_for(StatusCode::CONFLICT, "row exists".to_string()),
            StoreError::Domain(DomainError::Conflict(m)) if m == "row exists"
        ));
        assert!(matches!(
            error_for(StatusCode::UNPROCESSABLE_ENTITY, "bad qty".to_string()),
            StoreError::Domain(DomainError::Validation(m)) if m == "bad qty"
        ));
    }

    #[test]
    fn server_errors_are_transport() {
        assert!(matches!(
            error_for(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            StoreError::Transport(_)
        ));
    }
}
