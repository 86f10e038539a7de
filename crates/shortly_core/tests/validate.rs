use shortly_core::is_valid_url;

#[test]
fn rejects_strings_that_are_not_urls() {
    for candidate in ["", "not a url", "not-a-url", "http//missing-colon", "example.com"] {
        assert!(!is_valid_url(candidate), "{candidate:?} should be rejected");
    }
}

#[test]
fn accepts_well_formed_absolute_urls() {
    for candidate in [
        "https://example.com",
        "http://a.b/c?d=e",
        "https://example.com/very/long/path",
        "http://localhost:8080/shorten",
    ] {
        assert!(is_valid_url(candidate), "{candidate:?} should be accepted");
    }
}

#[test]
fn accepts_non_web_schemes_with_authority() {
    assert!(is_valid_url("ftp://files.example.com/archive.tar"));
    assert!(is_valid_url("ws://chat.example.com/socket"));
}

#[test]
fn rejects_urls_without_authority() {
    assert!(!is_valid_url("mailto:someone@example.com"));
    assert!(!is_valid_url("data:text/plain,hello"));
}
