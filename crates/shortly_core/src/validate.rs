use url::Url;

/// Returns true when `candidate` parses as an absolute URL with an authority.
///
/// Any scheme is accepted as long as a host is present, so
/// `ftp://files.example.com` passes while `mailto:someone@example.com` and
/// relative references do not. Parse failures map to `false`.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}
