//! Common types used across the workflow.
//!
//! # Categories
//!
//! - **File Types** - A selected local video
//! - **API Types** - Request/response bodies of the caption server
//! - **Usage Types** - Free-tier counters
//! - **Auth Types** - Login/register bodies

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::CaptionStyle;

// =============================================================================
// File Types
// =============================================================================

/// A video picked by the user.
///
/// `handle` is whatever the platform uses to read the bytes later
/// (a browser `File`, a path on disk, ...).
#[derive(Clone, Debug, PartialEq)]
pub struct VideoFile<F> {
    pub name: String,
    /// Declared media type, e.g. `video/mp4`
    pub media_type: String,
    /// Size in bytes
    pub size: u64,
    pub handle: F,
}

impl<F> VideoFile<F> {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: u64, handle: F) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
            handle,
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Error body returned with any non-2xx status.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    #[serde(default)]
    pub upgrade_required: bool,
}

/// Successful `POST /upload` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Server-assigned name used by every later call
    pub filename: String,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /process` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
    pub styles: Vec<CaptionStyle>,
    /// Single-style servers only read this field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<CaptionStyle>,
    pub language: String,
}

impl ProcessRequest {
    pub fn new(
        upload: &UploadResponse,
        styles: Vec<CaptionStyle>,
        language: impl Into<String>,
    ) -> Self {
        let style = match styles.as_slice() {
            [only] => Some(*only),
            _ => None,
        };
        Self {
            filename: upload.filename.clone(),
            original_filename: upload.original_filename.clone(),
            styles,
            style,
            language: language.into(),
        }
    }
}

/// One generated caption line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    pub text: String,
}

impl Caption {
    /// `HH:MM:SS,mmm --> HH:MM:SS,mmm`
    pub fn time_range(&self) -> String {
        format!("{} --> {}", format_timestamp(self.start), format_timestamp(self.end))
    }
}

/// Format seconds as an SRT timestamp.
pub fn format_timestamp(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Result of processing one style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleResult {
    /// Missing on single-style servers; filled from the request.
    #[serde(default)]
    pub style: Option<CaptionStyle>,
    /// Subtitle file identifier for `/download/{id}`
    pub srt_filename: String,
    /// Leading captions (the server may truncate)
    #[serde(default)]
    pub captions: Vec<Caption>,
    #[serde(default)]
    pub total_captions: Option<usize>,
}

/// Successful `POST /process` body, in any of the shapes servers send.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProcessResponse {
    /// `{ "results": [...], "videos_remaining": ... }`
    Batch {
        results: Vec<StyleResult>,
        #[serde(flatten)]
        usage: Usage,
    },
    /// `[ {...}, {...} ]`
    List(Vec<StyleResult>),
    /// `{ "srt_filename": ..., "captions": [...] }`
    Single {
        #[serde(flatten)]
        result: StyleResult,
        #[serde(flatten)]
        usage: Usage,
    },
}

impl ProcessResponse {
    /// Split into per-style results and usage counters.
    pub fn into_parts(self) -> (Vec<StyleResult>, Usage) {
        match self {
            ProcessResponse::Batch { results, usage } => (results, usage),
            ProcessResponse::List(results) => (results, Usage::default()),
            ProcessResponse::Single { result, usage } => (vec![result], usage),
        }
    }
}

// =============================================================================
// Usage Types
// =============================================================================

/// Remaining free videos: a number, or a label such as `"unlimited"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VideosRemaining {
    Count(i64),
    Label(String),
}

impl fmt::Display for VideosRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideosRemaining::Count(n) => write!(f, "{}", (*n).max(0)),
            VideosRemaining::Label(label) => f.write_str(label),
        }
    }
}

/// Usage counters piggybacked on process responses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub videos_processed: Option<u32>,
    #[serde(default)]
    pub videos_remaining: Option<VideosRemaining>,
}

/// `GET /auth/user/status` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserStatus {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub videos_processed: u32,
    pub videos_remaining: VideosRemaining,
    #[serde(default)]
    pub is_premium: bool,
    pub can_process: bool,
}

// =============================================================================
// Auth Types
// =============================================================================

/// `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

/// `POST /auth/register` body. The confirmation never leaves the client.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Successful login/register body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_request_single_style_sets_legacy_field() {
        let upload = UploadResponse {
            filename: "abc_clip.mp4".into(),
            original_filename: Some("clip.mp4".into()),
            file_id: None,
            message: None,
        };
        let req = ProcessRequest::new(&upload, vec![CaptionStyle::Meme], "en");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["style"], "meme");
        assert_eq!(json["styles"], serde_json::json!(["meme"]));
        assert_eq!(json["original_filename"], "clip.mp4");

        let req = ProcessRequest::new(&upload, vec![CaptionStyle::Meme, CaptionStyle::Casual], "fr");
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("style").is_none());
        assert_eq!(json["language"], "fr");
    }

    #[test]
    fn test_process_response_batch() {
        let json = r#"{
            "success": true,
            "results": [
                {"style": "meme", "srt_filename": "a_meme.srt", "captions": [{"start": 0, "end": 1.5, "text": "HI"}], "total_captions": 12},
                {"style": "formal", "srt_filename": "a_formal.srt", "captions": []}
            ],
            "videos_processed": 1,
            "videos_remaining": 1
        }"#;
        let (results, usage) = serde_json::from_str::<ProcessResponse>(json).unwrap().into_parts();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].style, Some(CaptionStyle::Meme));
        assert_eq!(results[0].total_captions, Some(12));
        assert_eq!(usage.videos_remaining, Some(VideosRemaining::Count(1)));
    }

    #[test]
    fn test_process_response_bare_list() {
        let json = r#"[{"style": "casual", "srt_filename": "b.srt", "captions": [{"text": "hey"}]}]"#;
        let (results, usage) = serde_json::from_str::<ProcessResponse>(json).unwrap().into_parts();
        assert_eq!(results[0].captions[0].text, "hey");
        assert_eq!(usage, Usage::default());
    }

    #[test]
    fn test_process_response_legacy_single() {
        let json = r#"{
            "success": true,
            "srt_filename": "abc_clip_meme.srt",
            "captions": [{"start": 0.0, "end": 2.0, "text": "HELLO THERE"}],
            "total_captions": 40,
            "videos_processed": 2,
            "videos_remaining": "unlimited",
            "message": "Captions generated successfully"
        }"#;
        let (results, usage) = serde_json::from_str::<ProcessResponse>(json).unwrap().into_parts();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].style, None);
        assert_eq!(results[0].srt_filename, "abc_clip_meme.srt");
        assert_eq!(usage.videos_processed, Some(2));
        assert_eq!(usage.videos_remaining.unwrap().to_string(), "unlimited");
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(format_timestamp(0.0), "00:00:00,000");
        assert_eq!(format_timestamp(3723.456), "01:02:03,456");
        let caption = Caption { start: 1.0, end: 2.5, text: "x".into() };
        assert_eq!(caption.time_range(), "00:00:01,000 --> 00:00:02,500");
    }

    #[test]
    fn test_negative_remaining_clamps() {
        assert_eq!(VideosRemaining::Count(-1).to_string(), "0");
    }
}
