//! Category-link intake: raw text splitting, validation, dedup.

/// Splits raw multi-line/comma-separated input into trimmed link candidates.
///
/// This is the shape the input field supplies: one link per line or a
/// comma-separated row. Empty fragments are dropped; no validation happens
/// here — see [`normalize_links`].
#[must_use]
pub fn split_links(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Validates and deduplicates link candidates: keeps only `http(s)` links,
/// removes duplicates, preserves order of first occurrence.
#[must_use]
pub fn normalize_links(links: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(links.len());
    for link in links {
        if !is_valid_link(link) {
            tracing::debug!(link, "dropping link without an http(s) scheme");
            continue;
        }
        if !seen.iter().any(|l| l == link) {
            seen.push(link.clone());
        }
    }
    seen
}

fn is_valid_link(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(links: &[&str]) -> Vec<String> {
        links.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn splits_on_newlines_and_commas() {
        let raw = "https://www.21vek.by/small_tech_apps/\n https://www.21vek.by/toaster_accessories/ , https://www.21vek.by/meat_grinder_accessories/";
        assert_eq!(
            split_links(raw),
            owned(&[
                "https://www.21vek.by/small_tech_apps/",
                "https://www.21vek.by/toaster_accessories/",
                "https://www.21vek.by/meat_grinder_accessories/",
            ])
        );
    }

    #[test]
    fn drops_empty_fragments() {
        assert_eq!(split_links(",,\n\n,"), Vec::<String>::new());
    }

    #[test]
    fn dedup_preserves_first_occurrence_order() {
        let links = owned(&["http://a", "http://a", "not-a-url", "http://b"]);
        assert_eq!(normalize_links(&links), owned(&["http://a", "http://b"]));
    }

    #[test]
    fn rejects_non_http_schemes() {
        let links = owned(&["ftp://a", "file:///etc/passwd", "https://ok"]);
        assert_eq!(normalize_links(&links), owned(&["https://ok"]));
    }
}
