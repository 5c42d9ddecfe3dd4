use crate::utils::collapse_whitespace;

/// Pasted text must be longer than this many characters (after trimming) to be used
pub const MIN_PASTED_TEXT_CHARS: usize = 60;

/// Returns the trimmed pasted text when it is long enough to replace the URL
///
/// Short or blank text is treated as if nothing had been pasted, so the caller
/// falls back to fetching the URL.
pub fn usable_pasted_text(text: Option<&str>) -> Option<&str> {
    let trimmed = text?.trim();
    if trimmed.chars().count() > MIN_PASTED_TEXT_CHARS {
        Some(trimmed)
    } else {
        ::log::debug!(
            "Ignoring pasted text of {} characters",
            trimmed.chars().count()
        );
        None
    }
}

/// Normalizes a text blob before summarization
///
/// Every run of whitespace (including newlines) becomes a single space and the
/// ends are trimmed.
pub fn normalize(text: &str) -> String {
    collapse_whitespace(text)
}
