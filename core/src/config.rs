//! Workflow configuration.
//!
//! Limits, defaults and endpoint paths shared by every front end.
//! These mirror what the caption server enforces on its side.

/// Maximum accepted video size, in megabytes.
pub const MAX_FILE_SIZE_MB: u64 = 100;

/// Maximum accepted video size (in bytes).
///
/// 100 MiB limit.
pub const MAX_FILE_SIZE: u64 = MAX_FILE_SIZE_MB * 1024 * 1024;

/// Declared media types accepted by the file picker.
///
/// MP4, QuickTime, AVI, Matroska and WebM containers.
pub const ALLOWED_MEDIA_TYPES: &[&str] = &[
    "video/mp4",
    "video/quicktime",
    "video/x-msvideo",
    "video/x-matroska",
    "video/webm",
];

/// `accept` attribute for the file input.
pub const ACCEPT_ATTRIBUTE: &str = "video/mp4,video/quicktime,video/x-msvideo,video/x-matroska,video/webm";

/// Multipart field name the upload endpoint reads the video from.
pub const UPLOAD_FIELD_NAME: &str = "video";

/// Language selected at page load and after reset.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Captions previewed per style in the results view.
pub const PREVIEW_LIMIT: usize = 5;

// =============================================================================
// Progress checkpoints
// =============================================================================

/// Progress when a run starts.
pub const PROGRESS_START: u8 = 0;
/// Progress once the upload response has arrived.
pub const PROGRESS_UPLOADED: u8 = 33;
/// Progress once processing has finished.
pub const PROGRESS_DONE: u8 = 100;

pub const MSG_UPLOADING: &str = "Uploading video...";
pub const MSG_PROCESSING: &str = "Video uploaded. Processing...";
pub const MSG_COMPLETE: &str = "Complete!";

// =============================================================================
// Endpoints
// =============================================================================

pub const UPLOAD_PATH: &str = "/upload";
pub const PROCESS_PATH: &str = "/process";
pub const DOWNLOAD_PATH: &str = "/download";
pub const CLEANUP_PATH: &str = "/cleanup";
pub const USER_STATUS_PATH: &str = "/auth/user/status";
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

/// Fallback shown when the upload endpoint fails without a message.
pub const UPLOAD_FALLBACK: &str = "Upload failed";
/// Fallback shown when the process endpoint fails without a message.
pub const PROCESS_FALLBACK: &str = "Processing failed";
pub const LOGIN_FALLBACK: &str = "Login failed";
pub const REGISTER_FALLBACK: &str = "Registration failed";

/// Hint appended under usage-limit errors.
pub const UPGRADE_HINT: &str = "Upgrade to premium to keep generating captions.";

/// Build the navigation target for a generated subtitle file.
pub fn download_url(base_url: &str, subtitle_file: &str) -> String {
    format!("{}{}/{}", base_url, DOWNLOAD_PATH, subtitle_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_url() {
        assert_eq!(download_url("", "abc_meme.srt"), "/download/abc_meme.srt");
        assert_eq!(
            download_url("http://localhost:5000", "x.srt"),
            "http://localhost:5000/download/x.srt"
        );
    }

    #[test]
    fn test_accept_attribute_matches_allow_list() {
        assert_eq!(ACCEPT_ATTRIBUTE, ALLOWED_MEDIA_TYPES.join(","));
    }
}
