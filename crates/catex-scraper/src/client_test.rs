use super::*;

fn client() -> GateClient {
    GateClient::new("http://localhost:8000", 5, "catex-test/0.1").unwrap()
}

#[test]
fn listing_url_is_under_gate_base() {
    assert_eq!(
        client().listing_url(),
        "http://localhost:8000/api/catalog/product-list"
    );
}

#[test]
fn detail_url_is_under_gate_base() {
    assert_eq!(
        client().detail_url(),
        "http://localhost:8000/api/catalog/product-data"
    );
}

#[test]
fn new_strips_trailing_slash() {
    let client = GateClient::new("http://localhost:8000/", 5, "catex-test/0.1").unwrap();
    assert_eq!(
        client.listing_url(),
        "http://localhost:8000/api/catalog/product-list"
    );
}

#[test]
fn new_rejects_relative_base() {
    let err = GateClient::new("/api/catalog", 5, "catex-test/0.1")
        .err()
        .expect("expected an error for a non-absolute base");
    assert!(
        matches!(err, ScrapeError::InvalidGateUrl { .. }),
        "expected InvalidGateUrl, got: {err:?}"
    );
}

#[test]
fn image_search_url_percent_encodes_query() {
    let url = client().image_search_url("Кофеварка DeLonghi EC 685");
    assert!(
        url.starts_with("http://localhost:8000/api/catalog/product-images?text="),
        "got: {url}"
    );
    // No raw spaces or Cyrillic may survive encoding.
    assert!(!url.contains(' '), "got: {url}");
    assert!(url.is_ascii(), "got: {url}");
    assert!(url.contains("%20"), "got: {url}");
}
