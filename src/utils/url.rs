//! URL encoding/decoding utilities

use std::collections::HashMap;

use url::{Host, Url};

/// Percent-encode a link component (credentials, query values, names).
///
/// ```
/// use subprobe::utils::url::url_encode;
///
/// assert_eq!(url_encode("HK 01/ws"), "HK%2001%2Fws");
/// ```
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Percent-decode a link component, `None` when the bytes are not UTF-8.
pub fn try_url_decode(input: &str) -> Option<String> {
    urlencoding::decode(input).ok().map(|cow| cow.into_owned())
}

/// Percent-decode credentials, keeping the input as-is if it does not decode.
///
/// ```
/// use subprobe::utils::url::url_decode;
///
/// assert_eq!(url_decode("p%40ss"), "p@ss");
/// assert_eq!(url_decode("%E9%A6"), "%E9%A6");
/// ```
pub fn url_decode(input: &str) -> String {
    try_url_decode(input).unwrap_or_else(|| input.to_string())
}

/// Collects the query string of a URL, keeping the first value of repeated keys.
pub fn query_params(url: &Url) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for (key, value) in url.query_pairs() {
        params
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    params
}

/// Non-empty value of a query parameter.
pub fn query_value<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

/// Decoded fragment of a URL.
///
/// Empty when there is none or it does not decode, so the node falls back to
/// its default name.
pub fn fragment_text(url: &Url) -> String {
    url.fragment().and_then(try_url_decode).unwrap_or_default()
}

/// Host of a URL without the brackets IPv6 literals carry in the authority.
pub fn host_text(url: &Url) -> Option<String> {
    match url.host()? {
        Host::Domain(domain) if domain.is_empty() => None,
        Host::Domain(domain) => Some(domain.to_string()),
        Host::Ipv4(addr) => Some(addr.to_string()),
        Host::Ipv6(addr) => Some(addr.to_string()),
    }
}
