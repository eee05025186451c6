//! Plain-text rendering of item descriptions.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::RawDescription;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// `window.adminAccountId=2671063;` and similar tracking assignments.
static ADMIN_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:window\.)?admin\w*Id\s*=\s*['"]?\w+['"]?\s*;?"#)
        .expect("valid admin id regex")
});

/// Injected loader: `with(document)...src="..."`, non-greedy, across lines.
static SCRIPT_IDIOM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)with\s*\(\s*document\s*\).*?src\s*=\s*"[^"]*""#)
        .expect("valid script idiom regex")
});

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&bull;|&#8226;").expect("valid bullet regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Renders a description as plain text.
///
/// A non-blank `text` field is used as-is (trimmed). Otherwise `html` goes
/// through [`sanitize_html`]. A missing description yields an empty string.
#[must_use]
pub fn sanitize_description(description: Option<&RawDescription>) -> String {
    let Some(description) = description else {
        return String::new();
    };

    if let Some(text) = description
        .text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        return text.to_owned();
    }

    description
        .html
        .as_deref()
        .map(sanitize_html)
        .unwrap_or_default()
}

/// Strips markup and known junk from an HTML fragment.
///
/// Tags are removed first and entities decoded last; decoded text is never
/// re-scanned for markup. The output is therefore not a fixed point when the
/// source escapes angle brackets: `&lt;10cm&gt;` decodes to `<10cm>`, which a
/// second pass would strip as a tag. Only the `text` path of
/// [`sanitize_description`] is idempotent for every input.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let text = TAG_RE.replace_all(html, "");
    let text = ADMIN_ID_RE.replace_all(&text, "");
    let text = SCRIPT_IDIOM_RE.replace_all(&text, "");
    let text = BULLET_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    html_escape::decode_html_entities(text.trim()).into_owned()
}
