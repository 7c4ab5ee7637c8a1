//! Cache key builders for transcript and metadata entries.
//!
//! Centralising key construction keeps keys deterministic: semantically
//! identical requests always produce byte-identical keys, regardless of the
//! order languages were requested in.

/// Default language marker used when no languages were requested.
const DEFAULT_LANGUAGE: &str = "en";

/// Cache key for a video transcript.
///
/// The language list is canonicalized (sorted, comma-joined) so that
/// `["en", "es"]` and `["es", "en"]` map to the same key. An absent or
/// empty list falls back to `"en"`.
pub fn transcript(video_id: &str, languages: Option<&[String]>) -> String {
    format!("transcript:{video_id}:{}", canonical_languages(languages))
}

/// Cache key for video metadata.
pub fn metadata(video_id: &str) -> String {
    format!("metadata:{video_id}")
}

/// Language marker for a transcript obtained through translation fallback.
///
/// Used as a single-element language list so translated transcripts never
/// collide with native-caption entries (e.g. `auto->>fr`).
pub fn translation_pair(source: &str, target: &str) -> String {
    format!("{source}->>{target}")
}

fn canonical_languages(languages: Option<&[String]>) -> String {
    match languages {
        Some(langs) if !langs.is_empty() => {
            let mut sorted: Vec<&str> = langs.iter().map(String::as_str).collect();
            sorted.sort_unstable();
            sorted.join(",")
        }
        _ => DEFAULT_LANGUAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_transcript_key_order_independent() {
        let a = transcript("dQw4w9WgXcQ", Some(&langs(&["en", "es"])));
        let b = transcript("dQw4w9WgXcQ", Some(&langs(&["es", "en"])));
        assert_eq!(a, b);
        assert_eq!(a, "transcript:dQw4w9WgXcQ:en,es");
    }

    #[test]
    fn test_transcript_key_default_language() {
        assert_eq!(
            transcript("dQw4w9WgXcQ", None),
            "transcript:dQw4w9WgXcQ:en"
        );
        // An explicit ["en"] canonicalizes to the same key as the default.
        assert_eq!(
            transcript("dQw4w9WgXcQ", Some(&langs(&["en"]))),
            transcript("dQw4w9WgXcQ", None),
        );
    }

    #[test]
    fn test_transcript_key_empty_list_is_default() {
        assert_eq!(
            transcript("dQw4w9WgXcQ", Some(&[])),
            transcript("dQw4w9WgXcQ", None),
        );
    }

    #[test]
    fn test_metadata_key() {
        assert_eq!(metadata("dQw4w9WgXcQ"), "metadata:dQw4w9WgXcQ");
    }

    #[test]
    fn test_translation_pair_marker() {
        let marker = translation_pair("auto", "fr");
        assert_eq!(marker, "auto->>fr");
        assert_eq!(
            transcript("dQw4w9WgXcQ", Some(&[marker])),
            "transcript:dQw4w9WgXcQ:auto->>fr"
        );
    }
}
