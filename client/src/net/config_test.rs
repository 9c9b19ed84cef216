use super::*;

#[test]
fn normalize_base_url_strips_trailing_slashes() {
    assert_eq!(
        normalize_base_url(" https://api.example.com/// "),
        Some("https://api.example.com".to_owned())
    );
}

#[test]
fn normalize_base_url_rejects_blank() {
    assert_eq!(normalize_base_url(""), None);
    assert_eq!(normalize_base_url("  / "), None);
}

#[test]
fn api_base_url_is_normalized() {
    let base = api_base_url();
    assert!(!base.ends_with('/'));
}

#[test]
fn resolve_base_url_prefers_configured_value() {
    assert_eq!(
        resolve_base_url(Some("https://api.example.com/")),
        "https://api.example.com"
    );
}

#[test]
fn resolve_base_url_ignores_blank_configured_value() {
    assert_eq!(resolve_base_url(Some("  ")), resolve_base_url(None));
}
