use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// MediaType – what the day's entry actually is
// ---------------------------------------------------------------------------

/// Classification of an APOD entry. Only `Image` can be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum MediaType {
    Image,
    /// Videos, interactive pages and anything else, keeping the raw label.
    Other(String),
}

impl From<String> for MediaType {
    fn from(s: String) -> Self {
        if s == "image" {
            MediaType::Image
        } else {
            MediaType::Other(s)
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Other(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// ApodRecord – one day of the archive
// ---------------------------------------------------------------------------

/// Metadata for a single APOD entry, as returned by the JSON API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApodRecord {
    pub title: String,
    pub explanation: String,
    pub media_type: MediaType,
    /// Image location (or video/page location for other media types).
    pub url: String,
    #[serde(default)]
    pub copyright: Option<String>,
}

impl ApodRecord {
    pub fn is_image(&self) -> bool {
        self.media_type == MediaType::Image
    }

    /// Text shown in the info panel.
    pub fn info_text(&self) -> String {
        let mut text = format!("Title: {}\n\n{}", self.title, self.explanation);
        if let Some(holder) = &self.copyright {
            text.push_str(&format!("\n\nCopyright: {}", holder.trim()));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_image_record() {
        let body = r#"{
            "date": "2020-01-01",
            "title": "Betelgeuse Dimming",
            "explanation": "A red supergiant.",
            "media_type": "image",
            "url": "https://apod.nasa.gov/apod/image/2001/b.jpg",
            "hdurl": "https://apod.nasa.gov/apod/image/2001/b_big.jpg",
            "service_version": "v1"
        }"#;
        let rec: ApodRecord = serde_json::from_str(body).unwrap();
        assert!(rec.is_image());
        assert_eq!(rec.title, "Betelgeuse Dimming");
        assert_eq!(rec.copyright, None);
        assert_eq!(rec.url, "https://apod.nasa.gov/apod/image/2001/b.jpg");
    }

    #[test]
    fn video_is_other_media() {
        let body = r#"{"title":"t","explanation":"e","media_type":"video","url":"https://youtu.be/x"}"#;
        let rec: ApodRecord = serde_json::from_str(body).unwrap();
        assert_eq!(rec.media_type, MediaType::Other("video".into()));
        assert!(!rec.is_image());
    }

    #[test]
    fn missing_title_is_an_error() {
        let body = r#"{"explanation":"e","media_type":"image","url":"u"}"#;
        assert!(serde_json::from_str::<ApodRecord>(body).is_err());
    }

    #[test]
    fn info_text_includes_copyright_when_present() {
        let body = r#"{"title":"M31","explanation":"Andromeda.","media_type":"image","url":"u","copyright":"\nJane Doe\n"}"#;
        let rec: ApodRecord = serde_json::from_str(body).unwrap();
        assert_eq!(rec.info_text(), "Title: M31\n\nAndromeda.\n\nCopyright: Jane Doe");
    }
}
