//! End-to-end workflow runs against a stub caption server.
//!
//! Run with: cargo test -p autocaption-core --features native

use std::cell::RefCell;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use autocaption::{
    refresh_usage, run_workflow, start_over, submit_login, AuthForm, AuthKind, CaptionStyle,
    HttpApi, Phase, VideoFile, VideosRemaining, WorkflowController, WorkflowError,
};
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde_json::{json, Value};
use tempfile::NamedTempFile;

// =============================================================================
// Stub server
// =============================================================================

#[derive(Default)]
struct Recorder {
    uploads: Mutex<Vec<(String, usize)>>,
    process_bodies: Mutex<Vec<Value>>,
    cleaned: Mutex<Vec<String>>,
}

type Shared = Arc<Recorder>;
type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;

async fn upload_ok(State(rec): State<Shared>, mut multipart: Multipart) -> Reply {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))))?
    {
        if field.name() == Some("video") {
            let name = field.file_name().unwrap_or("video").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))))?;
            rec.uploads.lock().unwrap().push((name.clone(), bytes.len()));
            return Ok(Json(json!({
                "success": true,
                "file_id": "abc123",
                "filename": format!("abc123_{}", name),
                "original_filename": name,
                "message": "Video uploaded successfully"
            })));
        }
    }
    Err((StatusCode::BAD_REQUEST, Json(json!({ "error": "No video file provided" }))))
}

async fn upload_too_big() -> Reply {
    Err((StatusCode::PAYLOAD_TOO_LARGE, Json(json!({ "error": "too big" }))))
}

async fn process_ok(State(rec): State<Shared>, Json(body): Json<Value>) -> Reply {
    rec.process_bodies.lock().unwrap().push(body.clone());
    let filename = body["filename"].as_str().unwrap_or_default().trim_end_matches(".mp4").to_string();
    let results: Vec<Value> = body["styles"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .map(|style| {
            let style = style.as_str().unwrap_or_default();
            let captions: Vec<Value> = (0..7)
                .map(|i| json!({ "start": i as f64 * 2.0, "end": i as f64 * 2.0 + 2.0, "text": format!("{} line {}", style, i + 1) }))
                .collect();
            json!({
                "style": style,
                "srt_filename": format!("{}_{}.srt", filename, style),
                "captions": captions,
                "total_captions": 7
            })
        })
        .collect();
    Ok(Json(json!({
        "success": true,
        "results": results,
        "videos_processed": 1,
        "videos_remaining": 1
    })))
}

async fn process_garbage(State(rec): State<Shared>, Json(body): Json<Value>) -> &'static str {
    rec.process_bodies.lock().unwrap().push(body);
    "definitely not json"
}

async fn cleanup(State(rec): State<Shared>, Path(filename): Path<String>) -> Json<Value> {
    rec.cleaned.lock().unwrap().push(filename);
    Json(json!({ "success": true }))
}

async fn user_status() -> Json<Value> {
    Json(json!({
        "username": "ana",
        "email": "ana@example.com",
        "videos_processed": 1,
        "videos_remaining": 1,
        "is_premium": false,
        "can_process": true
    }))
}

async fn login() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Login successful",
        "username": "ana",
        "is_admin": false,
        "redirect_url": "/"
    }))
}

fn happy_router(rec: Shared) -> Router {
    Router::new()
        .route("/upload", post(upload_ok))
        .route("/process", post(process_ok))
        .route("/cleanup/{filename}", delete(cleanup))
        .route("/auth/user/status", get(user_status))
        .route("/auth/login", post(login))
        .with_state(rec)
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

// =============================================================================
// Fixtures
// =============================================================================

fn video_on_disk() -> (NamedTempFile, VideoFile<PathBuf>) {
    let mut tmp = NamedTempFile::new().unwrap();
    let bytes = vec![0u8; 64 * 1024];
    tmp.write_all(&bytes).unwrap();
    let video = VideoFile::new("clip.mp4", "video/mp4", bytes.len() as u64, tmp.path().to_path_buf());
    (tmp, video)
}

fn ready(video: VideoFile<PathBuf>) -> RefCell<WorkflowController<PathBuf>> {
    let mut controller = WorkflowController::new();
    controller.select_file(video).unwrap();
    RefCell::new(controller)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_two_style_run_end_to_end() {
    let rec = Shared::default();
    let api = HttpApi::new(spawn(happy_router(rec.clone())).await);
    let (_tmp, video) = video_on_disk();
    let cell = ready(video);
    cell.borrow_mut().toggle_style(CaptionStyle::Formal);
    cell.borrow_mut().select_language("es").unwrap();

    run_workflow(&api, &cell).await.unwrap();
    cell.borrow_mut().reveal_results();

    assert_eq!(rec.uploads.lock().unwrap().as_slice(), &[("clip.mp4".to_string(), 64 * 1024)]);
    let body = rec.process_bodies.lock().unwrap()[0].clone();
    assert_eq!(body["filename"], "abc123_clip.mp4");
    assert_eq!(body["original_filename"], "clip.mp4");
    assert_eq!(body["styles"], json!(["meme", "formal"]));
    assert_eq!(body["language"], "es");

    let controller = cell.into_inner();
    assert_eq!(controller.phase(), Phase::Results);
    assert_eq!(controller.state().uploaded_filename.as_deref(), Some("abc123_clip.mp4"));
    assert_eq!(
        controller.usage().videos_remaining,
        Some(VideosRemaining::Count(1))
    );

    let previews = controller.previews(|id| autocaption::CaptionApi::download_url(&api, id));
    assert_eq!(previews.len(), 2);
    for preview in &previews {
        assert_eq!(preview.lines.len(), 5);
        assert_eq!(preview.total_captions, 7);
        assert_eq!(preview.language, "Spanish");
        assert!(preview.download_url.ends_with(&format!("/download/{}", preview.subtitle_file)));
    }
    assert_eq!(previews[1].lines[0].label(), "1. formal line 1");
    assert_eq!(previews[0].lines[4].time_range, "00:00:08,000 --> 00:00:10,000");
}

#[tokio::test]
async fn test_upload_error_stops_before_process() {
    let rec = Shared::default();
    let app = Router::new()
        .route("/upload", post(upload_too_big))
        .route("/process", post(process_ok))
        .with_state(rec.clone());
    let api = HttpApi::new(spawn(app).await);
    let (_tmp, video) = video_on_disk();
    let cell = ready(video);

    let result = run_workflow(&api, &cell).await;

    assert!(matches!(result, Err(WorkflowError::Upload(_))));
    assert!(rec.process_bodies.lock().unwrap().is_empty());
    let controller = cell.into_inner();
    assert_eq!(controller.error(), Some("too big"));
    assert!(controller.trigger_enabled());
    assert!(controller.sections().action);
}

#[tokio::test]
async fn test_malformed_process_body_is_a_network_error() {
    let rec = Shared::default();
    let app = Router::new()
        .route("/upload", post(upload_ok))
        .route("/process", post(process_garbage))
        .with_state(rec.clone());
    let api = HttpApi::new(spawn(app).await);
    let (_tmp, video) = video_on_disk();
    let cell = ready(video);

    let result = run_workflow(&api, &cell).await;

    assert!(matches!(result, Err(WorkflowError::Process(_))));
    let controller = cell.into_inner();
    assert!(controller.error().unwrap().starts_with("Network error"));
    assert_eq!(controller.phase(), Phase::Failed);
}

#[tokio::test]
async fn test_unreachable_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = HttpApi::new(format!("http://{}", addr));
    let (_tmp, video) = video_on_disk();
    let cell = ready(video);

    let result = run_workflow(&api, &cell).await;

    assert!(matches!(result, Err(WorkflowError::Upload(_))));
    assert!(cell.borrow().error().unwrap().starts_with("Network error"));
    assert!(cell.borrow().trigger_enabled());
}

#[tokio::test]
async fn test_start_over_releases_upload_and_usage_loads() {
    let rec = Shared::default();
    let app = Router::new()
        .route("/upload", post(upload_ok))
        .route("/process", post(process_garbage))
        .route("/cleanup/{filename}", delete(cleanup))
        .route("/auth/user/status", get(user_status))
        .with_state(rec.clone());
    let api = HttpApi::new(spawn(app).await);
    let (_tmp, video) = video_on_disk();
    let cell = ready(video);

    refresh_usage(&api, &cell).await;
    assert_eq!(cell.borrow().username(), Some("ana"));

    let _ = run_workflow(&api, &cell).await;
    start_over(&api, &cell).await;

    assert_eq!(rec.cleaned.lock().unwrap().as_slice(), &["abc123_clip.mp4".to_string()]);
    assert_eq!(cell.borrow().phase(), Phase::Idle);
    assert!(cell.borrow().sections().upload_prompt);
}

#[tokio::test]
async fn test_login_form() {
    let api = HttpApi::new(spawn(happy_router(Shared::default())).await);
    let cell = RefCell::new(AuthForm::new(AuthKind::Login));

    submit_login(&api, &cell, "ana@example.com", "secret", true).await.unwrap();

    assert_eq!(cell.borrow().redirect(), Some("/"));
}
