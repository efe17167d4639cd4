//! Cleanup of model-generated code.
//!
//! Models asked for raw HTML still wrap their output in markdown fences or
//! preface it with prose often enough that callers need a cleanup pass
//! before rendering. These are small, best-effort text heuristics.

use once_cell::sync::Lazy;
use regex::Regex;

// Fenced block, optionally tagged `html`. Non-greedy so only the first
// block is taken.
static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```(?:html)?\s*([\s\S]*?)```").expect("fence pattern is valid")
});

/// Extract displayable HTML from raw model output.
///
/// In order: the interior of a fenced block (trimmed); else the substring
/// starting at `<!DOCTYPE html`; else the substring starting at `<html`;
/// else the trimmed input unchanged. Idempotent: running it on already
/// clean output returns it as-is.
pub fn extract_html(raw: &str) -> String {
    let text = raw.trim();

    if let Some(captures) = FENCED_BLOCK.captures(text) {
        if let Some(interior) = captures.get(1) {
            return interior.as_str().trim().to_string();
        }
    }

    if let Some(index) = text.find("<!DOCTYPE html") {
        return text[index..].to_string();
    }
    if let Some(index) = text.find("<html") {
        return text[index..].to_string();
    }

    text.to_string()
}
