mod common;

use civictrack::model::UploadedImage;
use civictrack::upload::ImageFile;
use common::dispatcher_for;
use common::mock_backend::{MockBackend, MockResponse};

fn jpeg(name: &str) -> ImageFile {
    ImageFile {
        file_name: name.to_string(),
        bytes: vec![0xff, 0xd8, 0xff, 0xe0],
        mime: Some("image/jpeg".to_string()),
    }
}

#[tokio::test]
async fn batch_upload_records_every_image() {
    let mock = MockBackend::start().await;
    let dispatcher = dispatcher_for(&mock);

    for id in ["a", "b"] {
        mock.enqueue_response(MockResponse::value(serde_json::json!({
            "public_id": id,
            "secure_url": format!("https://img.example.com/{}.jpg", id),
        })))
        .await;
    }

    let images = dispatcher
        .upload_images(vec![jpeg("one.jpg"), jpeg("two.jpg")])
        .await
        .unwrap();
    assert_eq!(images.len(), 2);

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(request.path, "/image/upload");
        assert!(request.header("authorization").is_none());
        let body = String::from_utf8_lossy(&request.body);
        assert!(body.contains("name=\"upload_preset\""));
        assert!(body.contains("civictrack"));
    }

    let mut recorded: Vec<_> = dispatcher
        .store()
        .select(|s| s.media.images.iter().map(|i| i.public_id.clone()).collect());
    recorded.sort();
    assert_eq!(recorded, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn one_failure_rejects_the_batch() {
    let mock = MockBackend::start().await;
    let dispatcher = dispatcher_for(&mock);

    mock.enqueue_response(MockResponse::json(
        r#"{"public_id": "a", "secure_url": "https://img.example.com/a.jpg"}"#,
    ))
    .await;
    mock.enqueue_response(MockResponse::error(400, "Invalid image file")).await;

    let err = dispatcher
        .upload_images(vec![jpeg("one.jpg"), jpeg("two.jpg")])
        .await
        .unwrap_err();
    assert_eq!(err.payload(), "Invalid image file");

    let media = dispatcher.store().select(|s| s.media.clone());
    assert!(media.images.is_empty());
    assert_eq!(media.status.error_message(), Some("Invalid image file"));
}

#[tokio::test]
async fn destroy_removes_the_image() {
    let mock = MockBackend::start().await;
    let dispatcher = dispatcher_for(&mock);

    mock.enqueue_response(MockResponse::json(
        r#"{"public_id": "a", "secure_url": "https://img.example.com/a.jpg"}"#,
    ))
    .await;
    mock.enqueue_response(MockResponse::json(r#"{"result": "ok"}"#)).await;

    dispatcher.upload_images(vec![jpeg("one.jpg")]).await.unwrap();
    let destroyed = dispatcher.destroy_image("a").await.unwrap();
    assert_eq!(destroyed, "a");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[1].path, "/image/destroy");
    assert_eq!(requests[1].json(), serde_json::json!({"public_id": "a"}));

    let images: Vec<UploadedImage> = dispatcher.store().select(|s| s.media.images.clone());
    assert!(images.is_empty());
}
