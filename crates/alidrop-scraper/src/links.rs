//! Item ids and search queries from marketplace links.

use reqwest::Url;

use crate::error::ScraperError;

const WHOLESALE_PREFIX: &str = "wholesale-";

fn invalid(link: &str, reason: &str) -> ScraperError {
    ScraperError::InvalidLink {
        link: link.to_owned(),
        reason: reason.to_owned(),
    }
}

fn path_segments(link: &str) -> Result<Vec<String>, ScraperError> {
    let url = Url::parse(link).map_err(|e| invalid(link, &e.to_string()))?;
    Ok(url
        .path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default())
}

fn strip_extension(segment: &str) -> &str {
    segment.split('.').next().unwrap_or(segment)
}

/// Item id from a product page link.
///
/// `"https://www.aliexpress.com/item/1005006.html"` yields `"1005006"`. A bare
/// numeric id is accepted as-is.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidLink`] if the link is not a URL or has no
/// numeric `/item/<id>` segment.
pub fn item_id_from_link(link: &str) -> Result<String, ScraperError> {
    let link = link.trim();
    if !link.is_empty() && link.chars().all(|c| c.is_ascii_digit()) {
        return Ok(link.to_owned());
    }

    let segments = path_segments(link)?;
    let id = segments
        .iter()
        .position(|s| s == "item")
        .and_then(|idx| segments.get(idx + 1))
        .map(|s| strip_extension(s))
        .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()))
        .ok_or_else(|| invalid(link, "expected an /item/<id>.html path"))?;
    Ok(id.to_owned())
}

/// Search query from a wholesale search link.
///
/// `"https://www.aliexpress.com/w/wholesale-phone-case.html?spm=..."` yields
/// `"phone-case"`. Input without a scheme is taken as the query itself.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidLink`] if a URL has no `wholesale-<query>`
/// segment or the query is empty.
pub fn query_from_link(link: &str) -> Result<String, ScraperError> {
    let link = link.trim();
    if !link.contains("://") {
        if link.is_empty() {
            return Err(invalid(link, "empty query"));
        }
        return Ok(link.to_owned());
    }

    let segments = path_segments(link)?;
    let query = segments
        .iter()
        .find_map(|s| s.strip_prefix(WHOLESALE_PREFIX))
        .map(strip_extension)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| invalid(link, "expected a /w/wholesale-<query>.html path"))?;
    Ok(query.to_owned())
}
