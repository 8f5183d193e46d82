//! Absolute URL checks.

use url::Url;

/// Reasons a string is not an acceptable absolute URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Parses `input` as an absolute HTTP(S) URL with a host.
///
/// The input is not rewritten; callers keep storing the original string.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for relative or malformed URLs,
/// [`UrlValidationError::UnsupportedProtocol`] for schemes such as
/// `javascript:` or `ftp:`, and [`UrlValidationError::MissingHost`] otherwise.
pub fn check_absolute_url(input: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(input.trim())
        .map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlValidationError::UnsupportedProtocol);
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(check_absolute_url("https://example.com/page").is_ok());
        assert!(check_absolute_url("http://localhost:8080/a?b=c#d").is_ok());
        assert!(check_absolute_url("https://192.168.1.1").is_ok());
    }

    #[test]
    fn test_rejects_relative_urls() {
        assert!(matches!(
            check_absolute_url("/just/a/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            check_absolute_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(check_absolute_url("").is_err());
    }

    #[test]
    fn test_rejects_other_schemes() {
        for input in ["ftp://example.com", "javascript:alert(1)", "mailto:a@b.c", "file:///etc/passwd"] {
            assert!(
                matches!(check_absolute_url(input), Err(UrlValidationError::UnsupportedProtocol)),
                "{input} should be rejected"
            );
        }
    }
}
