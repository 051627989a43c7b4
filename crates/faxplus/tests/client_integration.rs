use faxplus::{FaxApi, FaxClient, FaxConfig, OutboxPayload};
use proto::FaxApiError;
use wiremock::matchers::{bearer_token, body_json_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FaxClient {
    FaxClient::new(FaxConfig::new("test-token", "user-1").with_base_url(server.uri()))
}

#[tokio::test]
async fn upload_file_posts_multipart_and_returns_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts/user-1/files"))
        .and(bearer_token("test-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "file-42", "mime_type": "application/pdf"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uploaded = client_for(&server)
        .upload_file("doc.pdf", b"%PDF-1.4".to_vec(), "application/pdf")
        .await
        .expect("upload");
    assert_eq!(uploaded.id, "file-42");
    assert_eq!(uploaded.mime_type.as_deref(), Some("application/pdf"));
}

#[tokio::test]
async fn send_fax_posts_payload_and_returns_confirmation() {
    let server = MockServer::start().await;
    let payload = OutboxPayload::outbound("+12025550123", "Invoice", "", "file-42");
    let expected = serde_json::to_string(&payload).expect("serialize payload");

    Mock::given(method("POST"))
        .and(path("/accounts/user-1/outbox"))
        .and(bearer_token("test-token"))
        .and(body_json_string(expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "fax-7"})))
        .expect(1)
        .mount(&server)
        .await;

    let confirmation = client_for(&server).send_fax(payload).await.expect("send");
    assert_eq!(confirmation.id, "fax-7");
}

#[tokio::test]
async fn get_fax_returns_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/user-1/outbox/fax-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "fax-7",
            "status": "success",
            "completed": true,
            "cost": 1.0,
            "page_count": 2,
            "created_at": "2023-01-01T12:00:00Z"
        })))
        .mount(&server)
        .await;

    let record = client_for(&server).get_fax("fax-7").await.expect("record");
    assert_eq!(record.status, "success");
    assert!(record.completed);
    assert_eq!(record.page_count, 2);
}

#[tokio::test]
async fn list_faxes_passes_limit_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/user-1/faxes"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {"id": "fax_id_1", "status": "success", "created_at": "2023-01-02T12:00:00Z"},
                {"id": "fax_id_2", "status": "failed", "created_at": "2023-01-01T12:00:00Z"}
            ]
        })))
        .mount(&server)
        .await;

    let records = client_for(&server).list_faxes(Some(2)).await.expect("list");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "fax_id_1");
    assert_eq!(records[1].status, "failed");
}

#[tokio::test]
async fn list_faxes_omits_limit_when_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/user-1/faxes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})),
        )
        .mount(&server)
        .await;

    let records = client_for(&server).list_faxes(None).await.expect("list");
    assert!(records.is_empty());
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/user-1/outbox/fax-9"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_fax("fax-9").await.unwrap_err();
    match err {
        FaxApiError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid token"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/user-1/outbox/fax-10"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_fax("fax-10").await.unwrap_err();
    assert!(matches!(err, FaxApiError::InvalidResponse(_)));
}
