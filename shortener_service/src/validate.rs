use url::Url;

/// Syntax check only: true when the WHATWG parser accepts `input`.
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::is_valid_url;

    #[test]
    fn accepts_absolute_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://localhost:8080/path?q=1#frag"));
        assert!(is_valid_url("ftp://files.example.org/pub"));
        assert!(is_valid_url("mailto:someone@example.com"));
    }

    #[test]
    fn rejects_empty() {
        assert!(!is_valid_url(""));
    }

    #[test]
    fn rejects_text_without_scheme() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("/relative/path"));
    }

    #[test]
    fn rejects_malformed_authority() {
        assert!(!is_valid_url("http://"));
        assert!(!is_valid_url("https://exa mple.com"));
    }
}
