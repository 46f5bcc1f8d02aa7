//! Nearest-neighbor matching of detected faces against enrolled embeddings.

use facevault_core::{Face, Match};
use facevault_storage::traits::EmbeddingStore;

use super::RecognitionService;
use crate::ServiceError;

impl RecognitionService {
    /// One [`Match`] per face, in input order, for at most `max_results` faces.
    ///
    /// Each face is looked up independently; the closest stored embedding
    /// whose distance is strictly below `threshold` wins, otherwise the face
    /// is reported as unknown with confidence 0.
    pub async fn find_closest_matches(
        &self,
        faces: &[Face],
        threshold: f64,
        max_results: usize,
    ) -> Result<Vec<Match>, ServiceError> {
        let mut matches = Vec::with_capacity(faces.len().min(max_results));
        for face in faces.iter().take(max_results) {
            let nearest = self.storage.find_nearest(&face.embedding, threshold).await?;
            matches.push(match nearest {
                Some(n) => Match::known(n.person_id, n.distance, face.bbox),
                None => Match::unknown(face.bbox),
            });
        }
        Ok(matches)
    }

    /// [`Self::find_closest_matches`] with the configured threshold and cap.
    pub async fn match_faces(&self, faces: &[Face]) -> Result<Vec<Match>, ServiceError> {
        self.find_closest_matches(faces, self.config.threshold, self.config.max_results).await
    }

    /// Match for a single face. A zero face cap still yields an unknown match.
    pub async fn find_closest_match_single_face(&self, face: &Face) -> Result<Match, ServiceError> {
        let matches = self.match_faces(std::slice::from_ref(face)).await?;
        Ok(matches.into_iter().next().unwrap_or_else(|| Match::unknown(face.bbox)))
    }

    /// Decode, detect every face, and match each one.
    pub async fn identify(&self, image_bytes: Vec<u8>) -> Result<Vec<Match>, ServiceError> {
        let image = self.decode(image_bytes).await?;
        let faces = self.embedder.identify(&image).await?;
        let matches = self.match_faces(&faces).await?;
        tracing::info!(
            faces = faces.len(),
            matched = matches.iter().filter(|m| !m.is_unknown()).count(),
            "identify"
        );
        Ok(matches)
    }

    /// Decode, pick the most prominent face, and match it. `None` when no face
    /// was detected.
    pub async fn identify_single(&self, image_bytes: Vec<u8>) -> Result<Option<Match>, ServiceError> {
        let image = self.decode(image_bytes).await?;
        match self.embedder.identify_single_face(&image).await? {
            Some(face) => Ok(Some(self.find_closest_match_single_face(&face).await?)),
            None => Ok(None),
        }
    }
}
