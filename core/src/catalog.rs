//! Caption styles and languages offered to the user.
//!
//! Catalog order is presentation order; the first style is the default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Caption Styles
// =============================================================================

/// A named caption-rendering preset understood by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionStyle {
    /// ALL CAPS, short bursts.
    Meme,
    /// Complete, punctuated sentences.
    Formal,
    /// Lowercase, conversational.
    Casual,
    /// Decorated with symbols.
    Aesthetic,
}

impl CaptionStyle {
    /// Every style, in presentation order.
    pub const ALL: [CaptionStyle; 4] = [
        CaptionStyle::Meme,
        CaptionStyle::Formal,
        CaptionStyle::Casual,
        CaptionStyle::Aesthetic,
    ];

    /// Wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            CaptionStyle::Meme => "meme",
            CaptionStyle::Formal => "formal",
            CaptionStyle::Casual => "casual",
            CaptionStyle::Aesthetic => "aesthetic",
        }
    }

    /// Card title.
    pub fn name(&self) -> &'static str {
        match self {
            CaptionStyle::Meme => "Meme Style",
            CaptionStyle::Formal => "Formal Style",
            CaptionStyle::Casual => "Casual Style",
            CaptionStyle::Aesthetic => "Aesthetic Style",
        }
    }

    /// Short label used in the results summary ("Meme", "Formal", ...).
    pub fn label(&self) -> &'static str {
        match self {
            CaptionStyle::Meme => "Meme",
            CaptionStyle::Formal => "Formal",
            CaptionStyle::Casual => "Casual",
            CaptionStyle::Aesthetic => "Aesthetic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CaptionStyle::Meme => "ALL CAPS, SHORT BURSTS, EMOJI-FRIENDLY",
            CaptionStyle::Formal => "Professional, complete sentences",
            CaptionStyle::Casual => "Natural, conversational tone",
            CaptionStyle::Aesthetic => "✨ Decorative and artistic ✨",
        }
    }
}

impl Default for CaptionStyle {
    fn default() -> Self {
        CaptionStyle::ALL[0]
    }
}

impl fmt::Display for CaptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CaptionStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaptionStyle::ALL
            .into_iter()
            .find(|style| style.id() == s)
            .ok_or_else(|| ValidationError::UnknownStyle(s.to_string()))
    }
}

// =============================================================================
// Languages
// =============================================================================

/// A transcription language option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    /// ISO code sent to the server
    pub code: &'static str,
    /// Label shown in the selector
    pub name: &'static str,
}

/// Supported languages, Indian languages first.
pub const LANGUAGES: &[Language] = &[
    Language { code: "hi", name: "Hindi" },
    Language { code: "bn", name: "Bengali" },
    Language { code: "te", name: "Telugu" },
    Language { code: "mr", name: "Marathi" },
    Language { code: "ta", name: "Tamil" },
    Language { code: "ur", name: "Urdu" },
    Language { code: "gu", name: "Gujarati" },
    Language { code: "kn", name: "Kannada" },
    Language { code: "ml", name: "Malayalam" },
    Language { code: "pa", name: "Punjabi" },
    Language { code: "or", name: "Odia" },
    Language { code: "as", name: "Assamese" },
    Language { code: "mai", name: "Maithili" },
    Language { code: "sa", name: "Sanskrit" },
    Language { code: "ks", name: "Kashmiri" },
    Language { code: "sd", name: "Sindhi" },
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "nl", name: "Dutch" },
    Language { code: "pl", name: "Polish" },
    Language { code: "ru", name: "Russian" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "th", name: "Thai" },
    Language { code: "vi", name: "Vietnamese" },
    Language { code: "id", name: "Indonesian" },
    Language { code: "tr", name: "Turkish" },
    Language { code: "he", name: "Hebrew" },
    Language { code: "fa", name: "Persian" },
    Language { code: "uk", name: "Ukrainian" },
    Language { code: "ro", name: "Romanian" },
    Language { code: "sv", name: "Swedish" },
    Language { code: "no", name: "Norwegian" },
    Language { code: "da", name: "Danish" },
    Language { code: "fi", name: "Finnish" },
    Language { code: "cs", name: "Czech" },
    Language { code: "hu", name: "Hungarian" },
    Language { code: "el", name: "Greek" },
];

/// Look up a language by code.
pub fn find_language(code: &str) -> Result<&'static Language, ValidationError> {
    LANGUAGES
        .iter()
        .find(|lang| lang.code == code)
        .ok_or_else(|| ValidationError::UnknownLanguage(code.to_string()))
}

/// Display name for a code, or the code itself when unknown.
pub fn language_name(code: &str) -> &str {
    find_language(code).map(|lang| lang.name).unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LANGUAGE;

    #[test]
    fn test_style_ids_roundtrip_through_from_str() {
        for style in CaptionStyle::ALL {
            assert_eq!(style.id().parse::<CaptionStyle>(), Ok(style));
        }
        assert_eq!(
            "sarcastic".parse::<CaptionStyle>(),
            Err(ValidationError::UnknownStyle("sarcastic".into()))
        );
    }

    #[test]
    fn test_default_style_is_first() {
        assert_eq!(CaptionStyle::default(), CaptionStyle::Meme);
    }

    #[test]
    fn test_style_serializes_lowercase() {
        let json = serde_json::to_string(&vec![CaptionStyle::Meme, CaptionStyle::Aesthetic]).unwrap();
        assert_eq!(json, r#"["meme","aesthetic"]"#);
    }

    #[test]
    fn test_language_catalog() {
        assert_eq!(LANGUAGES.len(), 44);
        assert!(find_language(DEFAULT_LANGUAGE).is_ok());
        assert_eq!(language_name("ta"), "Tamil");
        assert_eq!(language_name("xx"), "xx");
    }
}
