use facevault_core::UPLOAD_DIRECTORY;
use serde::{Deserialize, Serialize};

use crate::error::UploadError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadRequest<'a> {
    base64_string: &'a str,
    id_database: &'a str,
    directory: &'a str,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    path: Option<String>,
}

/// Client for the external file-upload API.
///
/// One instance is shared by all requests; `reqwest::Client` pools
/// connections internally.
#[derive(Debug, Clone)]
pub struct UploadClient {
    client: reqwest::Client,
    url: Option<String>,
}

impl UploadClient {
    /// Creates a client posting to `url`. With `None`, every upload fails
    /// with [`UploadError::NotConfigured`].
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(url: Option<String>, timeout: std::time::Duration) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UploadError::ClientInit(e.to_string()))?;
        Ok(Self { client, url })
    }

    /// Upload a face photo and return the stored file path.
    ///
    /// The API signals success with `201 Created` and a JSON body carrying a
    /// non-empty `path`; anything else is an error. No retry.
    pub async fn upload_face(&self, data_uri: &str, person_id: &str) -> Result<String, UploadError> {
        let url = self.url.as_deref().ok_or(UploadError::NotConfigured)?;
        let request = UploadRequest {
            base64_string: data_uri,
            id_database: person_id,
            directory: UPLOAD_DIRECTORY,
        };

        let response = self.client.post(url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != reqwest::StatusCode::CREATED {
            return Err(UploadError::UnexpectedStatus { code: status.as_u16(), body });
        }

        let parsed: UploadResponse = serde_json::from_str(&body).map_err(UploadError::JsonParse)?;
        let path = parsed.path.filter(|p| !p.is_empty()).ok_or(UploadError::MissingPath)?;
        tracing::info!(person_id, path = %path, "face image uploaded");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
