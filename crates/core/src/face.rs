use serde::{Deserialize, Serialize};

use crate::constants::{EMBEDDING_DIMENSION, UNKNOWN_PERSON_ID};
use crate::error::DimensionError;

/// Face embedding vector with exactly [`EMBEDDING_DIMENSION`] components.
///
/// The only way to build one is through `TryFrom<Vec<f32>>`, so any value of
/// this type is safe to compare against the `vector(512)` column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Embedding(Vec<f32>);

impl Embedding {
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// pgvector text literal, e.g. `[0.1,0.2,...]`.
    #[must_use]
    pub fn to_pgvector(&self) -> String {
        format!("[{}]", self.0.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(","))
    }

    /// Cosine distance (`1 - cos θ`), the same metric as pgvector's `<=>`.
    ///
    /// NaN when either vector has zero norm, as with `<=>`; NaN compares false
    /// against any threshold, so such a vector never matches.
    #[must_use]
    pub fn cosine_distance(&self, other: &Self) -> f64 {
        let (mut dot, mut norm_a, mut norm_b) = (0.0_f64, 0.0_f64, 0.0_f64);
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            let (a, b) = (f64::from(*a), f64::from(*b));
            dot += a * b;
            norm_a += a * a;
            norm_b += b * b;
        }
        if norm_a == 0.0 || norm_b == 0.0 {
            return f64::NAN;
        }
        1.0 - dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}

impl TryFrom<Vec<f32>> for Embedding {
    type Error = DimensionError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        if values.len() == EMBEDDING_DIMENSION {
            Ok(Self(values))
        } else {
            Err(DimensionError { expected: EMBEDDING_DIMENSION, actual: values.len() })
        }
    }
}

impl<'de> Deserialize<'de> for Embedding {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<f32>::deserialize(deserializer)?;
        Self::try_from(values).map_err(serde::de::Error::custom)
    }
}

/// Face bounding box as reported by the detector: `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[must_use]
    pub fn area(&self) -> f32 {
        (self.x2 - self.x1).max(0.0) * (self.y2 - self.y1).max(0.0)
    }
}

impl From<[f32; 4]> for BoundingBox {
    fn from([x1, y1, x2, y2]: [f32; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<BoundingBox> for [f32; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x1, b.y1, b.x2, b.y2]
    }
}

/// One detected face: where it is and what it looks like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub bbox: BoundingBox,
    pub embedding: Embedding,
}

impl Face {
    #[must_use]
    pub const fn new(bbox: BoundingBox, embedding: Embedding) -> Self {
        Self { bbox, embedding }
    }
}

/// Identification result for a single face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub person_id: String,
    /// `1 - cosine distance`, or `0.0` for unknown faces.
    pub confidence: f64,
    pub bbox: BoundingBox,
}

impl Match {
    #[must_use]
    pub fn known(person_id: String, distance: f64, bbox: BoundingBox) -> Self {
        Self { person_id, confidence: 1.0 - distance, bbox }
    }

    #[must_use]
    pub fn unknown(bbox: BoundingBox) -> Self {
        Self { person_id: UNKNOWN_PERSON_ID.to_owned(), confidence: 0.0, bbox }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.person_id == UNKNOWN_PERSON_ID
    }
}

/// Closest stored embedding returned by a nearest-neighbor query.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestMatch {
    pub person_id: String,
    pub distance: f64,
}

/// Stored enrollment row, without the raw vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    pub id: i32,
    pub person_id: String,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(axis: usize) -> Embedding {
        let mut v = vec![0.0_f32; EMBEDDING_DIMENSION];
        v[axis] = 1.0;
        Embedding::try_from(v).unwrap()
    }

    #[test]
    fn test_embedding_rejects_wrong_dimension() {
        let err = Embedding::try_from(vec![0.5_f32; 128]).unwrap_err();
        assert_eq!(err, DimensionError { expected: 512, actual: 128 });
    }

    #[test]
    fn test_embedding_deserialize_checks_dimension() {
        let short = serde_json::json!([0.1, 0.2, 0.3]);
        assert!(serde_json::from_value::<Embedding>(short).is_err());

        let full = serde_json::Value::from(vec![0.25_f32; EMBEDDING_DIMENSION]);
        let emb: Embedding = serde_json::from_value(full).unwrap();
        assert_eq!(emb.as_slice().len(), EMBEDDING_DIMENSION);
    }

    #[test]
    fn test_cosine_distance_self_is_zero() {
        let e = unit(3);
        assert!(e.cosine_distance(&e).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_distance_orthogonal_is_one() {
        assert!((unit(0).cosine_distance(&unit(1)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_distance_zero_vector() {
        let zero = Embedding::try_from(vec![0.0_f32; EMBEDDING_DIMENSION]).unwrap();
        assert!(zero.cosine_distance(&unit(0)).is_nan());
        assert!(unit(0).cosine_distance(&zero).is_nan());
    }

    #[test]
    fn test_pgvector_literal() {
        let mut v = vec![0.0_f32; EMBEDDING_DIMENSION];
        v[0] = 0.5;
        let literal = Embedding::try_from(v).unwrap().to_pgvector();
        assert!(literal.starts_with("[0.5,0,"));
        assert!(literal.ends_with(",0]"));
    }

    #[test]
    fn test_bbox_serializes_as_array() {
        let bbox = BoundingBox::new(1.0, 2.0, 11.0, 22.0);
        assert_eq!(serde_json::to_value(bbox).unwrap(), serde_json::json!([1.0, 2.0, 11.0, 22.0]));
        assert!((bbox.area() - 200.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_match_confidence_from_distance() {
        let m = Match::known("alice".to_owned(), 0.2, BoundingBox::default());
        assert!((m.confidence - 0.8).abs() < 1e-9);
        assert!(!m.is_unknown());

        let u = Match::unknown(BoundingBox::default());
        assert_eq!(u.person_id, "unknown");
        assert!(u.confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_uses_image_url_key() {
        let rec = EmbeddingRecord {
            id: 7,
            person_id: "bob".to_owned(),
            image_url: Some("faces/bob.png".to_owned()),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["imageURL"], "faces/bob.png");
        assert_eq!(json["id"], 7);
    }
}
