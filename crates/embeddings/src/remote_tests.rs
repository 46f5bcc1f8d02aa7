#![allow(clippy::unwrap_used, reason = "test code")]

use std::io::Cursor;
use std::time::Duration;

use facevault_core::EMBEDDING_DIMENSION;
use image::{DynamicImage, ImageFormat};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{DecodedImage, EmbeddingError, FaceEmbedder, RemoteEmbedder, decode_image};

fn test_image() -> DecodedImage {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::new_rgb8(2, 2).write_to(&mut out, ImageFormat::Png).unwrap();
    decode_image(out.into_inner()).unwrap()
}

fn embedder(server: &MockServer) -> RemoteEmbedder {
    RemoteEmbedder::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

fn vector(fill: f32) -> Vec<f32> {
    vec![fill; EMBEDDING_DIMENSION]
}

#[tokio::test]
async fn test_embed_returns_vector() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/embed"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"embedding": vector(0.5)})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let emb = embedder(&server).embed(&test_image()).await.unwrap();
    assert_eq!(emb.as_slice().len(), EMBEDDING_DIMENSION);
    assert!((emb.as_slice()[0] - 0.5).abs() < f32::EPSILON);
}

#[tokio::test]
async fn test_embed_sends_base64_image() {
    let server = MockServer::start().await;
    let image = test_image();
    let expected = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, image.bytes());

    Mock::given(method("POST"))
        .and(path("/embed"))
        .and(body_partial_json(serde_json::json!({"image_base64": expected})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"embedding": vector(0.1)})),
        )
        .expect(1)
        .mount(&server)
        .await;

    embedder(&server).embed(&image).await.unwrap();
}

#[tokio::test]
async fn test_embed_without_face() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/embed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"embedding": null})))
        .mount(&server)
        .await;

    let err = embedder(&server).embed(&test_image()).await.unwrap_err();
    assert!(matches!(err, EmbeddingError::NoFaceDetected));
}

#[tokio::test]
async fn test_embed_wrong_dimension() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/embed"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"embedding": [0.1, 0.2]})),
        )
        .mount(&server)
        .await;

    let err = embedder(&server).embed(&test_image()).await.unwrap_err();
    assert!(matches!(err, EmbeddingError::Dimension(d) if d.actual == 2));
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/identify"))
        .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
        .mount(&server)
        .await;

    let err = embedder(&server).identify(&test_image()).await.unwrap_err();
    match err {
        EmbeddingError::HttpStatus { code, body } => {
            assert_eq!(code, 503);
            assert_eq!(body, "model loading");
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_identify_parses_faces() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/identify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "faces": [
                {"bbox": [0.0, 0.0, 10.0, 10.0], "embedding": vector(0.1)},
                {"bbox": [5.0, 5.0, 45.0, 45.0], "embedding": vector(0.2)}
            ]
        })))
        .mount(&server)
        .await;

    let faces = embedder(&server).identify(&test_image()).await.unwrap();
    assert_eq!(faces.len(), 2);
    assert!((faces[1].bbox.x2 - 45.0).abs() < f32::EPSILON);
}

#[tokio::test]
async fn test_identify_single_face_picks_largest() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/identify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "faces": [
                {"bbox": [0.0, 0.0, 10.0, 10.0], "embedding": vector(0.1)},
                {"bbox": [0.0, 0.0, 50.0, 40.0], "embedding": vector(0.2)},
                {"bbox": [0.0, 0.0, 20.0, 20.0], "embedding": vector(0.3)}
            ]
        })))
        .mount(&server)
        .await;

    let face = embedder(&server).identify_single_face(&test_image()).await.unwrap().unwrap();
    assert!((face.bbox.x2 - 50.0).abs() < f32::EPSILON);
}

#[tokio::test]
async fn test_identify_no_faces() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/identify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"faces": []})))
        .mount(&server)
        .await;

    let e = embedder(&server);
    assert!(e.identify(&test_image()).await.unwrap().is_empty());
    assert!(e.identify_single_face(&test_image()).await.unwrap().is_none());
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let e = RemoteEmbedder::new("http://model:8500/", Duration::from_secs(1)).unwrap();
    assert_eq!(e.base_url(), "http://model:8500");
}
