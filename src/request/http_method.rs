/// The methods a [`crate::UrlRequest`] canonicalizes on assignment. Any
/// other method string passes through verbatim, permitting non-standard
/// methods.
pub const CANONICAL_HTTP_METHODS: [&str; 6] = ["GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT"];

/// `"get"` becomes `"GET"`, `"pOsT"` becomes `"POST"`, but `"PATCH"` (not
/// in the canonical set) stays exactly `"PATCH"`. Never fails.
pub fn canonicalize_http_method(method: &str) -> String {
    CANONICAL_HTTP_METHODS
        .iter()
        .find(|canonical| canonical.eq_ignore_ascii_case(method))
        .map(|canonical| (*canonical).to_owned())
        .unwrap_or_else(|| method.to_owned())
}
