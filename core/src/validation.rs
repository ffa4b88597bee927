//! Client-side checks run before anything is sent.

use crate::config::{ALLOWED_MEDIA_TYPES, MAX_FILE_SIZE};
use crate::error::ValidationError;
use crate::types::VideoFile;

/// Check a picked file against the media-type allow-list and size ceiling.
///
/// The type check runs first, so an oversized file of the wrong type
/// reports the type problem.
pub fn validate_video<F>(file: &VideoFile<F>) -> Result<(), ValidationError> {
    if !ALLOWED_MEDIA_TYPES.contains(&file.media_type.as_str()) {
        return Err(ValidationError::UnsupportedMediaType(file.media_type.clone()));
    }

    if file.size > MAX_FILE_SIZE {
        return Err(ValidationError::FileTooLarge { size: file.size });
    }

    Ok(())
}

/// Human-readable size using 1024-based units, two decimals at most.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(media_type: &str, size: u64) -> VideoFile<()> {
        VideoFile::new("clip", media_type, size, ())
    }

    #[test]
    fn test_accepts_every_allowed_type() {
        for media_type in ALLOWED_MEDIA_TYPES {
            assert_eq!(validate_video(&video(media_type, 1024)), Ok(()));
        }
    }

    #[test]
    fn test_rejects_disallowed_types() {
        for media_type in ["video/ogg", "audio/mpeg", "image/png", "", "VIDEO/MP4"] {
            assert!(matches!(
                validate_video(&video(media_type, 10)),
                Err(ValidationError::UnsupportedMediaType(_))
            ));
        }
    }

    #[test]
    fn test_size_ceiling_is_inclusive() {
        assert_eq!(validate_video(&video("video/mp4", MAX_FILE_SIZE)), Ok(()));
        assert_eq!(
            validate_video(&video("video/webm", MAX_FILE_SIZE + 1)),
            Err(ValidationError::FileTooLarge { size: MAX_FILE_SIZE + 1 })
        );
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(1_234_567_890), "1.15 GB");
    }
}
