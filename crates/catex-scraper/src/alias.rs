//! Alias derivation from a product's detail-page link.

/// Derives the product alias — the slug addressing the detail endpoint —
/// from a detail-page link: the last path segment with any file extension
/// stripped.
///
/// `"/catalog/abc-123.html"` → `"abc-123"`, `"/catalog/abc-123"` →
/// `"abc-123"`. Only the final extension comes off, so `"a.b.html"` keeps
/// its inner dot.
#[must_use]
pub fn derive_alias(link: &str) -> String {
    let last = link.rsplit('/').next().unwrap_or(link);
    match last.rfind('.') {
        // A leading dot is part of the name, not an extension separator.
        Some(i) if i > 0 => last[..i].to_owned(),
        _ => last.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_html_extension() {
        assert_eq!(derive_alias("/catalog/abc-123.html"), "abc-123");
    }

    #[test]
    fn keeps_extensionless_segment() {
        assert_eq!(derive_alias("/catalog/abc-123"), "abc-123");
    }

    #[test]
    fn strips_only_the_final_extension() {
        assert_eq!(derive_alias("/catalog/abc.v2.html"), "abc.v2");
    }

    #[test]
    fn uses_last_path_segment_of_deep_links() {
        assert_eq!(
            derive_alias("/small_tech_apps/toaster_accessories/t-200.html"),
            "t-200"
        );
    }

    #[test]
    fn bare_segment_without_slashes() {
        assert_eq!(derive_alias("abc-123.html"), "abc-123");
    }
}
