//! Request snapshot for the diagnostic page.
//!
//! Captures the CGI environment together with the decoded query string and
//! form body. The snapshot is read-only and lives for a single invocation.

use std::io::Read;
use url::form_urlencoded;

/// Media type whose body is decoded into POST parameters.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Decoded request parameters.
///
/// Keys keep the order in which they first appear; repeated keys collect
/// every value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, Vec<String>)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` byte string.
    pub fn parse(input: &[u8]) -> Self {
        let mut params = Self::new();
        for (key, value) in form_urlencoded::parse(input) {
            params.append(key.into_owned(), value.into_owned());
        }
        params
    }

    /// Add a value for `key`, keeping earlier values.
    pub fn append(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }

    /// All values recorded for `key`.
    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// First value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ParamMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ParamMap::new();
        for (k, v) in iter {
            params.append(k.into(), v.into());
        }
        params
    }
}

/// Point-in-time copy of the request data visible to the CGI program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSnapshot {
    /// Environment variables in the order the host supplied them.
    pub env: Vec<(String, String)>,

    /// Parameters decoded from `QUERY_STRING`.
    pub get: ParamMap,

    /// Parameters decoded from a form-encoded request body.
    pub post: ParamMap,
}

impl RequestSnapshot {
    /// Capture the request from its environment and body stream.
    ///
    /// The body is read only for `POST` requests with a form-encoded content
    /// type, and never beyond `CONTENT_LENGTH` bytes. Capture does not fail:
    /// an unusable length or a read error leaves the POST map empty.
    pub fn capture(env: Vec<(String, String)>, body: &mut dyn Read) -> Self {
        let lookup = |name: &str| {
            env.iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        };

        let get = ParamMap::parse(lookup("QUERY_STRING").unwrap_or_default().as_bytes());

        let is_post = lookup("REQUEST_METHOD").is_some_and(|m| m.eq_ignore_ascii_case("POST"));
        let is_form = lookup("CONTENT_TYPE").is_some_and(is_form_content_type);

        let post = if is_post && is_form {
            let body = read_body(lookup("CONTENT_LENGTH"), body);
            ParamMap::parse(&body)
        } else {
            ParamMap::new()
        };

        Self { env, get, post }
    }
}

/// Check a `CONTENT_TYPE` value, ignoring parameters such as `charset`.
fn is_form_content_type(value: &str) -> bool {
    value
        .split(';')
        .next()
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

fn read_body(content_length: Option<&str>, body: &mut dyn Read) -> Vec<u8> {
    let length = match content_length.map(str::trim) {
        None | Some("") => return Vec::new(),
        Some(raw) => match raw.parse::<u64>() {
            Ok(length) => length,
            Err(e) => {
                log::warn!("ignoring request body: invalid CONTENT_LENGTH '{}': {}", raw, e);
                return Vec::new();
            }
        },
    };

    let mut buffer = Vec::new();
    if let Err(e) = body.take(length).read_to_end(&mut buffer) {
        log::warn!("ignoring request body: failed to read stdin: {}", e);
        return Vec::new();
    }

    if (buffer.len() as u64) < length {
        log::warn!(
            "request body shorter than CONTENT_LENGTH ({} of {} bytes)",
            buffer.len(),
            length
        );
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "client went away"))
        }
    }

    #[test]
    fn test_parse_decodes_pairs() {
        let params = ParamMap::parse(b"q=hello+world&lang=%F0%9F%90%98&empty=");
        assert_eq!(params.get("q"), Some("hello world"));
        assert_eq!(params.get("lang"), Some("🐘"));
        assert_eq!(params.get("empty"), Some(""));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_repeated_keys_collect_values() {
        let params = ParamMap::parse(b"tag=a&other=1&tag=b");
        assert_eq!(
            params.get_all("tag"),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert_eq!(params.get("tag"), Some("a"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_parse_empty() {
        assert!(ParamMap::parse(b"").is_empty());
    }

    #[test]
    fn test_capture_query_string() {
        let snapshot = RequestSnapshot::capture(
            env(&[("REQUEST_METHOD", "GET"), ("QUERY_STRING", "q=1")]),
            &mut io::empty(),
        );
        assert_eq!(snapshot.get.get("q"), Some("1"));
        assert!(snapshot.post.is_empty());
        assert_eq!(snapshot.env.len(), 2);
    }

    #[test]
    fn test_capture_form_post() {
        let mut body = Cursor::new(b"name=Ada&lang=rust".to_vec());
        let snapshot = RequestSnapshot::capture(
            env(&[
                ("REQUEST_METHOD", "POST"),
                ("CONTENT_TYPE", "application/x-www-form-urlencoded; charset=UTF-8"),
                ("CONTENT_LENGTH", "18"),
            ]),
            &mut body,
        );
        assert_eq!(snapshot.post.get("name"), Some("Ada"));
        assert_eq!(snapshot.post.get("lang"), Some("rust"));
    }

    #[test]
    fn test_capture_respects_content_length() {
        let mut body = Cursor::new(b"a=1&b=2".to_vec());
        let snapshot = RequestSnapshot::capture(
            env(&[
                ("REQUEST_METHOD", "POST"),
                ("CONTENT_TYPE", FORM_CONTENT_TYPE),
                ("CONTENT_LENGTH", "3"),
            ]),
            &mut body,
        );
        assert_eq!(snapshot.post.get("a"), Some("1"));
        assert_eq!(snapshot.post.get("b"), None);
    }

    #[test]
    fn test_capture_ignores_non_form_body() {
        let mut body = Cursor::new(b"{\"a\":1}".to_vec());
        let snapshot = RequestSnapshot::capture(
            env(&[
                ("REQUEST_METHOD", "POST"),
                ("CONTENT_TYPE", "application/json"),
                ("CONTENT_LENGTH", "7"),
            ]),
            &mut body,
        );
        assert!(snapshot.post.is_empty());
    }

    #[test]
    fn test_capture_ignores_body_on_get() {
        let mut body = Cursor::new(b"a=1".to_vec());
        let snapshot = RequestSnapshot::capture(
            env(&[
                ("REQUEST_METHOD", "GET"),
                ("CONTENT_TYPE", FORM_CONTENT_TYPE),
                ("CONTENT_LENGTH", "3"),
            ]),
            &mut body,
        );
        assert!(snapshot.post.is_empty());
    }

    #[test]
    fn test_capture_invalid_content_length() {
        let mut body = Cursor::new(b"a=1".to_vec());
        let snapshot = RequestSnapshot::capture(
            env(&[
                ("REQUEST_METHOD", "POST"),
                ("CONTENT_TYPE", FORM_CONTENT_TYPE),
                ("CONTENT_LENGTH", "lots"),
            ]),
            &mut body,
        );
        assert!(snapshot.post.is_empty());
    }

    #[test]
    fn test_capture_read_error_is_not_fatal() {
        let snapshot = RequestSnapshot::capture(
            env(&[
                ("REQUEST_METHOD", "POST"),
                ("CONTENT_TYPE", FORM_CONTENT_TYPE),
                ("CONTENT_LENGTH", "10"),
            ]),
            &mut FailingReader,
        );
        assert!(snapshot.post.is_empty());
    }

    #[test]
    fn test_capture_without_cgi_env() {
        let snapshot = RequestSnapshot::capture(Vec::new(), &mut io::empty());
        assert_eq!(snapshot, RequestSnapshot::default());
    }
}
