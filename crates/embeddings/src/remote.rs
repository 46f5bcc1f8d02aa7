//! HTTP backend for [`FaceEmbedder`].
//!
//! Wire contract with the model server:
//! - `POST {base}/embed`    `{"image_base64": ".."}` → `{"embedding": [f32; 512] | null}`
//! - `POST {base}/identify` `{"image_base64": ".."}` → `{"faces": [{"bbox": [f32; 4], "embedding": [f32; 512]}]}`

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use facevault_core::{BoundingBox, Embedding, Face};
use serde::{Deserialize, Serialize};

use crate::embedder::FaceEmbedder;
use crate::error::EmbeddingError;
use crate::image_input::DecodedImage;

#[derive(Debug, Serialize)]
struct ImageRequest {
    image_base64: String,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: Option<Vec<f32>>,
}

#[derive(Debug, Deserialize)]
struct IdentifyResponse {
    #[serde(default)]
    faces: Vec<RemoteFace>,
}

#[derive(Debug, Deserialize)]
struct RemoteFace {
    bbox: [f32; 4],
    embedding: Vec<f32>,
}

/// Client for a recognition model served over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteEmbedder {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteEmbedder {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, timeout: std::time::Duration) -> Result<Self, EmbeddingError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmbeddingError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        image: &DecodedImage,
    ) -> Result<T, EmbeddingError> {
        let request = ImageRequest { image_base64: STANDARD.encode(image.bytes()) };
        let response = self
            .client
            .post(format!("{}/{endpoint}", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(EmbeddingError::HttpStatus { code: status.as_u16(), body });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl FaceEmbedder for RemoteEmbedder {
    async fn embed(&self, image: &DecodedImage) -> Result<Embedding, EmbeddingError> {
        let response: EmbedResponse = self.post("embed", image).await?;
        let values = response.embedding.ok_or(EmbeddingError::NoFaceDetected)?;
        Ok(Embedding::try_from(values)?)
    }

    async fn identify(&self, image: &DecodedImage) -> Result<Vec<Face>, EmbeddingError> {
        let response: IdentifyResponse = self.post("identify", image).await?;
        tracing::debug!(faces = response.faces.len(), "remote identify");
        response
            .faces
            .into_iter()
            .map(|f| -> Result<Face, EmbeddingError> {
                Ok(Face::new(BoundingBox::from(f.bbox), Embedding::try_from(f.embedding)?))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
