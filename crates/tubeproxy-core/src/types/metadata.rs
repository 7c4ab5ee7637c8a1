//! Video metadata value types.

use serde::{Deserialize, Serialize};

/// Flat metadata record for a YouTube video, as returned by the oEmbed
/// endpoint. Every field is optional; absent fields are omitted from the
/// serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    /// Video title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Channel name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Channel URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    /// Media type (oEmbed `type` field).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// Embed height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Embed width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// oEmbed API version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Service provider name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    /// Service provider URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_url: Option<String>,
    /// Thumbnail URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_rename() {
        let metadata = VideoMetadata {
            media_type: Some("video".to_string()),
            ..VideoMetadata::default()
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json, serde_json::json!({"type": "video"}));
    }

    #[test]
    fn test_roundtrip() {
        let metadata = VideoMetadata {
            title: Some("Never Gonna Give You Up".to_string()),
            author_name: Some("Rick Astley".to_string()),
            height: Some(113),
            width: Some(200),
            ..VideoMetadata::default()
        };
        let json = serde_json::to_string(&metadata).unwrap();
        let parsed: VideoMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, metadata);
    }
}
