use crate::{errors::BackendError, types::ApiEnvelope};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// Create a JSON request and unwrap the service envelope from the response.
/// Throws error on non-success status code and on `success: false` bodies.
pub(crate) async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    timeout: Duration,
) -> Result<R, BackendError> {
    tracing::debug!(%url, "sending analysis request");
    let response = client.post(url).timeout(timeout).json(data).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::StatusCode(
            status,
            response.text().await.unwrap_or_default(),
        ));
    }
    response.json::<ApiEnvelope<R>>().await?.into_result()
}
