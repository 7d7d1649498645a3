use crate::models::ProxyNode;
use crate::parser::ParseError;
use crate::utils::base64::base64_decode;
use crate::utils::url::{fragment_text, host_text, url_decode};
use url::Url;

/// Parse a Shadowsocks link into a ProxyNode
///
/// Format: `ss://method:password@hostname:port#remark`, where the userinfo
/// may also be given as `base64(method:password)` (SIP002).
pub fn explode_ss(ss: &str) -> Result<ProxyNode, ParseError> {
    if !ss.starts_with("ss://") {
        return Err(ParseError::UnsupportedScheme(ss.to_string()));
    }

    let url = Url::parse(ss)?;

    let host = host_text(&url).ok_or(ParseError::MissingHost)?;
    let port = url.port().unwrap_or(0);

    let user_info = user_info(&url);
    if user_info.is_empty() {
        return Err(ParseError::MissingField("method"));
    }
    let (method, password) = split_user_info(&user_info)?;

    let remark = fragment_text(&url);

    Ok(ProxyNode::ss_construct(
        &remark, &host, port, method, password,
    ))
}

/// Decoded `method:password` part of the link.
fn user_info(url: &Url) -> String {
    // The url crate splits a plain `method:password` into username and password
    let plain = match url.password() {
        Some(password) => format!("{}:{}", url.username(), password),
        None => url.username().to_string(),
    };
    let plain = url_decode(&plain);

    if plain.contains(':') {
        return plain;
    }

    // SIP002 carries the credentials base64 encoded
    match base64_decode(&plain) {
        Ok(decoded) if decoded.contains(':') => decoded,
        _ => plain,
    }
}

fn split_user_info(user_info: &str) -> Result<(&str, &str), ParseError> {
    match user_info.split_once(':') {
        Some(("", _)) => Err(ParseError::MissingField("method")),
        Some((method, password)) => Ok((method, password)),
        None => Err(ParseError::MissingField("password")),
    }
}
