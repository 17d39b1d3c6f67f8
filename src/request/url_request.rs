use crate::prelude::*;
use std::hash::{Hash, Hasher};

/// A platform-independent description of one HTTP request, translated by
/// the [`FetchSession`](crate::FetchSession) into transport-native call
/// options when dispatched.
///
/// Requests are plain values: created, possibly mutated through the
/// normalizing setters below, dispatched, and discarded. Header names are
/// stored title-cased with at most one entry per logical name; lookups are
/// case-insensitive. The method is canonicalized on assignment, see
/// [`canonicalize_http_method`].
///
/// `cache_policy`, `timeout_interval`, `network_service_type` and
/// `allows_cellular_access` are carried for API completeness only; the
/// host transport decides whether to honor any of them.
#[derive(Record, Clone, Debug)]
pub struct UrlRequest {
    pub url: Option<String>,
    pub http_method: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
    pub cache_policy: CachePolicy,
    pub timeout_interval: f64,
    pub main_document_url: Option<String>,
    pub network_service_type: NetworkServiceType,
    pub allows_cellular_access: bool,
    pub http_should_handle_cookies: bool,
}

impl Default for UrlRequest {
    fn default() -> Self {
        Self {
            url: None,
            http_method: "GET".to_owned(),
            headers: HashMap::new(),
            body: None,
            cache_policy: CachePolicy::default(),
            timeout_interval: 60.0,
            main_document_url: None,
            network_service_type: NetworkServiceType::default(),
            allows_cellular_access: true,
            http_should_handle_cookies: true,
        }
    }
}

impl UrlRequest {
    pub fn new(url: impl AsRef<str>) -> Self {
        Self {
            url: Some(url.as_ref().to_owned()),
            ..Self::default()
        }
    }

    /// Stores the canonical uppercase form when `method` case-insensitively
    /// matches one of [`CANONICAL_HTTP_METHODS`], the input verbatim
    /// otherwise.
    pub fn set_http_method(&mut self, method: impl AsRef<str>) {
        self.http_method = canonicalize_http_method(method.as_ref());
    }

    /// Removes any entry whose name matches case-insensitively, then
    /// inserts `value` under the title-cased form of `name`. At most one
    /// stored entry per logical header name.
    pub fn set_header(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) {
        let name = name.as_ref();
        self.headers
            .retain(|stored, _| !stored.eq_ignore_ascii_case(name));
        self.headers
            .insert(canonical_header_name(name), value.as_ref().to_owned());
    }

    /// HTTP multi-value folding: an existing entry (matched
    /// case-insensitively) is extended with `"," + value` under its stored
    /// key; otherwise this behaves like [`Self::set_header`].
    pub fn append_header(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) {
        let name = name.as_ref();
        let stored = self
            .headers
            .keys()
            .find(|stored| stored.eq_ignore_ascii_case(name))
            .cloned();
        match stored {
            Some(stored) => {
                let folded = format!("{},{}", self.headers[&stored], value.as_ref());
                self.headers.insert(stored, folded);
            }
            None => {
                self.headers
                    .insert(canonical_header_name(name), value.as_ref().to_owned());
            }
        }
    }

    /// Case-insensitive header lookup. Absent names yield `None`, never an
    /// error.
    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        let name = name.as_ref();
        self.headers
            .iter()
            .find(|(stored, _)| stored.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Exactly `url`, `main_document_url`, `http_method`, `body` and
/// `http_should_handle_cookies` participate in equality; `cache_policy`,
/// `headers` and the remaining hint fields do not.
impl PartialEq for UrlRequest {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
            && self.main_document_url == other.main_document_url
            && self.http_method == other.http_method
            && self.body == other.body
            && self.http_should_handle_cookies == other.http_should_handle_cookies
    }
}

impl Eq for UrlRequest {}

/// Hashes the same fields equality compares, keeping the two consistent.
impl Hash for UrlRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
        self.main_document_url.hash(state);
        self.http_method.hash(state);
        self.body.hash(state);
        self.http_should_handle_cookies.hash(state);
    }
}

/// `content-TYPE` becomes `Content-Type`: each `-`-separated part gets an
/// ASCII-uppercased first letter and an ASCII-lowercased remainder.
fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
