//! Supported language tags.
//!
//! A tag is either a base language (`en`), the `unk` placeholder, or a
//! translation pair `<target>2<source>` built from two distinct base languages.

/// Placeholder used when no language applies.
pub const UNKNOWN_LANGUAGE: &str = "unk";

/// Base language tags accepted by the backend.
pub const BASE_LANGUAGES: &[&str] = &[
    "en", "ar", "bn", "de", "es", "fi", "fr", "hi", "it", "ja", "ko", "nl", "pt", "sv", "tr", "zh",
];

/// Returns true if `tag` (already normalized) is a supported language tag.
pub fn is_supported(tag: &str) -> bool {
    if tag == UNKNOWN_LANGUAGE || BASE_LANGUAGES.contains(&tag) {
        return true;
    }

    match tag.split_once('2') {
        Some((target, source)) => {
            target != source && BASE_LANGUAGES.contains(&target) && BASE_LANGUAGES.contains(&source)
        }
        None => false,
    }
}

/// Lower-cases and trims a raw language value.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
