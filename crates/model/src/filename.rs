//! Export file naming.

/// Stem used when the payload yields nothing usable.
pub const FALLBACK_STEM: &str = "qrcode";

/// Longest stem kept, in characters.
pub const MAX_STEM_CHARS: usize = 64;

/// File name for an exported QR code: `<stem>_qr.png`.
pub fn export_file_name(payload: &str) -> String {
    format!("{}_qr.png", file_stem(payload))
}

/// Turn a payload into something safe to use as a file stem.
///
/// Reserved and control characters become `_`, surrounding whitespace and
/// dots are trimmed, and the result is capped at [`MAX_STEM_CHARS`].
pub fn file_stem(payload: &str) -> String {
    let replaced: String = payload
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let stem: String = replaced
        .trim_matches(|c: char| c.is_whitespace() || c == '.')
        .chars()
        .take(MAX_STEM_CHARS)
        .collect();

    if stem.trim_matches('_').is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}
