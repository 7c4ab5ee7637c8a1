//! Transcript value types.

use serde::{Deserialize, Serialize};

/// A single caption segment of a video transcript.
///
/// This is the one canonical segment shape stored in and returned from the
/// cache, regardless of which upstream source produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Caption text.
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    /// How long the segment is displayed, in seconds.
    pub duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_json_shape() {
        let segment = TranscriptSegment {
            text: "hi".to_string(),
            start: 0.0,
            duration: 1.0,
        };
        let json = serde_json::to_value(&segment).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "hi", "start": 0.0, "duration": 1.0})
        );
    }

    #[test]
    fn test_segment_roundtrip() {
        let segments = vec![
            TranscriptSegment {
                text: "first".to_string(),
                start: 0.0,
                duration: 1.5,
            },
            TranscriptSegment {
                text: "second".to_string(),
                start: 1.5,
                duration: 2.25,
            },
        ];
        let json = serde_json::to_string(&segments).unwrap();
        let parsed: Vec<TranscriptSegment> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, segments);
    }
}
