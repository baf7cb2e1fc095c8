//! Navigation state and fragment-address handling.
//!
//! URL format: `#/path?key=value` (e.g. `#/platform/weibo`, `#/history?day=3`).

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use super::route::{ViewId, split_segments};

/// Characters escaped in a path parameter so it stays a single segment
/// and survives address parsing.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Path or query parameters, ordered by key.
pub type Params = BTreeMap<String, String>;

/// A requested address after normalisation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    /// Always starts with `/`. No trailing `/` except for the root.
    pub path: String,
    pub query: Params,
}

impl Address {
    /// Normalise a raw path or hash.
    ///
    /// Accepts `""`, `"#"`, `"#/platforms"`, `"platforms/"`, `"/history?day=1"`.
    /// Case is preserved.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('#').unwrap_or(raw);
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (raw, Params::new()),
        };

        let mut path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        if path.len() > 1 && path.ends_with('/') {
            path.pop();
        }

        Self { path, query }
    }

    /// Path segments, excluding the leading `/`.
    pub fn segments(&self) -> Vec<&str> {
        split_segments(&self.path[1..])
    }

    pub fn to_hash(&self) -> String {
        format!("#{}{}", self.path, format_query(&self.query))
    }
}

/// `?k=v&flag` suffix, or an empty string when there is no query.
fn format_query(query: &Params) -> String {
    if query.is_empty() {
        return String::new();
    }
    let pairs = query
        .iter()
        .map(|(key, value)| {
            if value.is_empty() {
                key.clone()
            } else {
                format!("{}={}", key, value)
            }
        })
        .collect::<Vec<_>>();
    format!("?{}", pairs.join("&"))
}

fn parse_query(query: &str) -> Params {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (!key.is_empty()).then(|| (key.to_string(), value.to_string()))
        })
        .collect()
}

/// Convert a path to its normalised fragment form.
pub fn to_hash(path: &str) -> String {
    Address::parse(path).to_hash()
}

/// Whether two paths or hashes name the same address.
///
/// Browsers report `location.hash` percent-encoded, so both sides are
/// compared in decoded form.
pub fn same_address(a: &str, b: &str) -> bool {
    decode_segment(&to_hash(a)) == decode_segment(&to_hash(b))
}

pub(crate) fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

pub(crate) fn decode_segment(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

/// The outcome of a successful navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    /// Normalised requested path.
    pub path: String,
    /// Position of the matched route in the table.
    pub route_index: usize,
    pub view: ViewId,
    pub name: Option<&'static str>,
    pub params: Params,
    pub query: Params,
    pub props_from_path: bool,
}

impl NavigationState {
    /// The view's input: bound parameters, only if the route forwards them.
    pub fn props(&self) -> Option<&Params> {
        self.props_from_path.then_some(&self.params)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn address(&self) -> Address {
        Address {
            path: self.path.clone(),
            query: self.query.clone(),
        }
    }

    pub fn to_hash(&self) -> String {
        self.address().to_hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_normalisation() {
        assert_eq!(Address::parse("").path, "/");
        assert_eq!(Address::parse("#").path, "/");
        assert_eq!(Address::parse("#/").path, "/");
        assert_eq!(Address::parse("/").path, "/");
        assert_eq!(Address::parse("platforms").path, "/platforms");
        assert_eq!(Address::parse("#/platforms/").path, "/platforms");
        assert_eq!(Address::parse("/Platform/Weibo").path, "/Platform/Weibo");
    }

    #[test]
    fn test_address_segments() {
        assert!(Address::parse("/").segments().is_empty());
        assert_eq!(
            Address::parse("/platform/acme-corp").segments(),
            vec!["platform", "acme-corp"]
        );
        // Only one trailing slash is dropped
        assert_eq!(Address::parse("/platform//").segments(), vec!["platform", ""]);
    }

    #[test]
    fn test_query_parsing() {
        let address = Address::parse("#/history?day=3&flag&=x&&q=a=b");
        assert_eq!(address.path, "/history");
        assert_eq!(address.query.get("day").map(String::as_str), Some("3"));
        assert_eq!(address.query.get("flag").map(String::as_str), Some(""));
        assert_eq!(address.query.get("q").map(String::as_str), Some("a=b"));
        assert_eq!(address.query.len(), 3);
    }

    #[test]
    fn test_to_hash() {
        assert_eq!(to_hash("/"), "#/");
        assert_eq!(to_hash(""), "#/");
        assert_eq!(to_hash("/platform/zhihu"), "#/platform/zhihu");
        assert_eq!(to_hash("history/"), "#/history");
        assert_eq!(to_hash("/history?day=3&all"), "#/history?all&day=3");
    }

    #[test]
    fn test_props_only_when_forwarded() {
        let mut params = Params::new();
        params.insert("name".to_string(), "weibo".to_string());
        let mut state = NavigationState {
            path: "/platform/weibo".to_string(),
            route_index: 2,
            view: ViewId::PlatformDetail,
            name: Some("PlatformDetail"),
            params,
            query: Params::new(),
            props_from_path: true,
        };
        assert_eq!(state.props().and_then(|p| p.get("name")).map(String::as_str), Some("weibo"));
        assert_eq!(state.to_hash(), "#/platform/weibo");

        state.query.insert("day".to_string(), "3".to_string());
        assert_eq!(state.to_hash(), "#/platform/weibo?day=3");
        assert_eq!(state.address(), Address::parse("/platform/weibo?day=3"));

        state.props_from_path = false;
        assert!(state.props().is_none());
        assert_eq!(state.param("name"), Some("weibo"));
    }

    #[test]
    fn test_same_address_ignores_encoding() {
        assert!(same_address("#/platform/%E5%BE%AE%E5%8D%9A", "/platform/微博"));
        assert!(same_address("#/platforms/", "/platforms"));
        assert!(same_address("", "/"));
        assert!(!same_address("#/platform/weibo", "/platform/zhihu"));
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(encode_segment("a/b?c#d%e f"), "a%2Fb%3Fc%23d%25e%20f");
        assert_eq!(encode_segment("微"), "%E5%BE%AE");
        assert_eq!(decode_segment("a%2Fb%3Fc%23d%25e%20f"), "a/b?c#d%e f");
    }
}
