//! Backend base URL validation and endpoint resolution.

use url::Url;

use super::error::AnalyzerError;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:6543";

const ANALYZE_PATH: &str = "api/analyze-review";
const REVIEWS_PATH: &str = "api/reviews";

/// Validated location of the review analysis backend.
///
/// Any path on the base URL is kept as a prefix, so
/// `http://host/prefix` resolves reviews at `http://host/prefix/api/reviews`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendEndpoint {
    base: Url,
}

impl BackendEndpoint {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::InvalidBaseUrl`] when the value is not an
    /// absolute `http` or `https` URL, or carries a query or fragment.
    pub fn parse(base_url: &str) -> Result<Self, AnalyzerError> {
        let mut base = Url::parse(base_url.trim())
            .map_err(|error| AnalyzerError::InvalidBaseUrl(format!("{base_url}: {error}")))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(AnalyzerError::InvalidBaseUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        if base.query().is_some() || base.fragment().is_some() {
            return Err(AnalyzerError::InvalidBaseUrl(format!(
                "{base_url}: query strings and fragments are not supported"
            )));
        }

        // `Url::join` replaces the last path segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }

        Ok(Self { base })
    }

    /// Returns the normalised base URL (always ending in `/`).
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Returns the URL of the analysis endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::InvalidBaseUrl`] if the path cannot be joined.
    pub fn analyze_url(&self) -> Result<Url, AnalyzerError> {
        self.join(ANALYZE_PATH)
    }

    /// Returns the URL of the history endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::InvalidBaseUrl`] if the path cannot be joined.
    pub fn reviews_url(&self) -> Result<Url, AnalyzerError> {
        self.join(REVIEWS_PATH)
    }

    fn join(&self, path: &str) -> Result<Url, AnalyzerError> {
        self.base
            .join(path)
            .map_err(|error| AnalyzerError::InvalidBaseUrl(format!("{}: {error}", self.base)))
    }
}

impl Default for BackendEndpoint {
    fn default() -> Self {
        Self {
            base: default_base(),
        }
    }
}

#[expect(
    clippy::expect_used,
    reason = "DEFAULT_BASE_URL is a constant known to parse"
)]
fn default_base() -> Url {
    Url::parse(&format!("{DEFAULT_BASE_URL}/")).expect("default base URL is valid")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::bare_host("http://localhost:6543", "http://localhost:6543/api/reviews")]
    #[case::trailing_slash("http://localhost:6543/", "http://localhost:6543/api/reviews")]
    #[case::prefix("https://example.com/review", "https://example.com/review/api/reviews")]
    #[case::prefix_slash("https://example.com/review/", "https://example.com/review/api/reviews")]
    fn resolves_reviews_url(#[case] base: &str, #[case] expected: &str) {
        let endpoint = BackendEndpoint::parse(base).expect("valid base URL");
        assert_eq!(
            endpoint.reviews_url().expect("joinable").as_str(),
            expected
        );
    }

    #[test]
    fn resolves_analyze_url() {
        let endpoint = BackendEndpoint::parse("http://127.0.0.1:9000").expect("valid base URL");
        assert_eq!(
            endpoint.analyze_url().expect("joinable").as_str(),
            "http://127.0.0.1:9000/api/analyze-review"
        );
    }

    #[rstest]
    #[case::relative("localhost:6543/api")]
    #[case::not_a_url("not a url")]
    #[case::ftp("ftp://example.com")]
    #[case::query("http://example.com/?debug=1")]
    #[case::fragment("http://example.com/#top")]
    fn rejects_unusable_base_urls(#[case] base: &str) {
        let error = BackendEndpoint::parse(base).expect_err("should reject");
        assert!(matches!(error, AnalyzerError::InvalidBaseUrl(_)));
    }

    #[test]
    fn default_points_at_local_backend() {
        let endpoint = BackendEndpoint::default();
        assert_eq!(endpoint.base().as_str(), "http://localhost:6543/");
    }
}
