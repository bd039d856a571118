use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use fieldwork::application::ports::{RenderError, TextExtractor, WorkpaperRenderer};
use fieldwork::application::services::{
    IngestionService, NO_PRIOR_DATA_MESSAGE, SuggestionService, WorkpaperStore,
};
use fieldwork::domain::{SourceFormat, Workpaper, WorkpaperDraft};
use fieldwork::infrastructure::persistence::InMemoryWorkpaperRepository;
use fieldwork::infrastructure::text_processing::{CompositeTextExtractor, PlainTextExtractor};
use fieldwork::presentation::{AppState, Settings, create_router};

const BOUNDARY: &str = "workpaper-test-boundary";

struct MockRenderer;

#[async_trait::async_trait]
impl WorkpaperRenderer for MockRenderer {
    async fn render(&self, _draft: &WorkpaperDraft) -> Result<PathBuf, RenderError> {
        Ok(PathBuf::from("data/workpaper.pdf"))
    }
}

struct FailingRenderer;

#[async_trait::async_trait]
impl WorkpaperRenderer for FailingRenderer {
    async fn render(&self, _draft: &WorkpaperDraft) -> Result<PathBuf, RenderError> {
        Err(RenderError::WriteFailed("disk full".to_string()))
    }
}

async fn build_app_with<R>(records: Vec<Workpaper>, renderer: R) -> (Router, Arc<WorkpaperStore>)
where
    R: WorkpaperRenderer + 'static,
{
    let repository = Arc::new(InMemoryWorkpaperRepository::seeded(records));
    let store = Arc::new(WorkpaperStore::load(repository).await);

    let text_extractor = Arc::new(CompositeTextExtractor::new(vec![(
        SourceFormat::Text,
        Arc::new(PlainTextExtractor) as Arc<dyn TextExtractor>,
    )]));

    let state = AppState {
        ingestion_service: Arc::new(IngestionService::new(text_extractor, Arc::clone(&store))),
        suggestion_service: Arc::new(SuggestionService::new(Arc::clone(&store))),
        renderer: Arc::new(renderer),
        settings: Settings::default(),
    };

    (create_router(state), store)
}

async fn build_app(records: Vec<Workpaper>) -> (Router, Arc<WorkpaperStore>) {
    build_app_with(records, MockRenderer).await
}

fn multipart_file_body(parts: &[(&str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (filename, data) in parts {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_running_server_when_get_root_then_reports_running() {
    let (app, _store) = build_app(vec![]).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "fieldwork API is running");
}

#[tokio::test]
async fn given_text_file_when_upload_then_archives_and_lists_filename() {
    let (app, store) = build_app(vec![]).await;

    let body = multipart_file_body(&[("notes.txt", b"walkthrough of cash disbursements")]);
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["uploaded_files"], serde_json::json!(["notes.txt"]));
    assert_eq!(body["message"], "Uploaded files: [\"notes.txt\"]");

    let archived = store.all().await;
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].filename, "notes.txt");
    assert_eq!(archived[0].content, "walkthrough of cash disbursements");
}

#[tokio::test]
async fn given_multiple_files_when_upload_then_appends_in_part_order() {
    let (app, store) = build_app(vec![]).await;

    let body = multipart_file_body(&[("first.txt", b"alpha"), ("second.txt", b"beta")]);
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let archived = store.all().await;
    assert_eq!(archived.len(), 2);
    assert_eq!(archived[0].filename, "first.txt");
    assert_eq!(archived[1].filename, "second.txt");
}

#[tokio::test]
async fn given_invalid_utf8_text_file_when_upload_then_stores_best_effort_content() {
    let (app, store) = build_app(vec![]).await;

    let body = multipart_file_body(&[("binary.txt", b"cash \xff\xfereview")]);
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let archived = store.all().await;
    assert_eq!(archived[0].content, "cash review");
}

#[tokio::test]
async fn given_empty_text_file_when_upload_then_archives_empty_content() {
    let (app, store) = build_app(vec![]).await;

    let body = multipart_file_body(&[("empty.txt", b"")]);
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let archived = store.all().await;
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].content, "");
}

#[tokio::test]
async fn given_multipart_without_file_part_when_upload_then_bad_request() {
    let (app, _store) = build_app(vec![]).await;

    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nnot a file\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_empty_archive_when_generate_then_sentinel_without_score() {
    let (app, _store) = build_app(vec![]).await;

    let response = app
        .oneshot(form_request(
            "/generate",
            "control_description=cash+disbursement+control",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["suggestion"], NO_PRIOR_DATA_MESSAGE);
    assert_eq!(body["source_file"], serde_json::Value::Null);
    assert!(body.get("similarity_score").is_none());
}

#[tokio::test]
async fn given_archived_workpapers_when_generate_then_picks_closest() {
    let records = vec![
        Workpaper::new(
            "cash.txt".to_string(),
            "internal control over cash disbursements".to_string(),
        ),
        Workpaper::new(
            "revenue.txt".to_string(),
            "revenue recognition testing".to_string(),
        ),
    ];
    let (app, _store) = build_app(records).await;

    let response = app
        .oneshot(form_request(
            "/generate",
            "control_description=cash+disbursement+control",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["source_file"], "cash.txt");
    assert_eq!(body["suggestion"], "internal control over cash disbursements");
    assert!(body["similarity_score"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn given_missing_control_description_when_generate_then_client_error() {
    let (app, _store) = build_app(vec![]).await;

    let response = app.oneshot(form_request("/generate", "")).await.unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn given_draft_when_export_then_reports_fixed_path() {
    let (app, _store) = build_app(vec![]).await;

    let response = app
        .oneshot(form_request(
            "/export",
            "control_name=AP-01&control_description=approval+of+invoices&suggestion=inspect+a+sample",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Workpaper generated successfully.");
    assert_eq!(body["file_path"], "data/workpaper.pdf");
}

#[tokio::test]
async fn given_renderer_failure_when_export_then_internal_error() {
    let (app, _store) = build_app_with(vec![], FailingRenderer).await;

    let response = app
        .oneshot(form_request(
            "/export",
            "control_name=AP-01&control_description=x&suggestion=y",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("disk full"));
}

#[tokio::test]
async fn given_request_without_id_when_handled_then_response_carries_one() {
    let (app, _store) = build_app(vec![]).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}
