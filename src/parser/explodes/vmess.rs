use crate::models::ProxyNode;
use crate::parser::ParseError;
use crate::utils::base64::base64_decode;
use serde_json::{Map, Value};

/// Parse a VMess link into a ProxyNode
///
/// Format: `vmess://base64(json)` where the JSON object carries the v2rayN
/// share fields (`add`, `port`, `id`, `aid`, `scy`, `net`, `path`, `host`,
/// `tls`, `sni`, `ps`).
pub fn explode_vmess(vmess: &str) -> Result<ProxyNode, ParseError> {
    let encoded = vmess
        .strip_prefix("vmess://")
        .ok_or_else(|| ParseError::UnsupportedScheme(vmess.to_string()))?;

    let decoded = base64_decode(encoded)?;
    let json = match serde_json::from_str::<Value>(&decoded)? {
        Value::Object(map) => map,
        _ => return Err(ParseError::NotAnObject),
    };

    let add = json_str(&json, "add").unwrap_or_default();
    let port = json_u16(&json, "port").unwrap_or(0);
    let id = json_str(&json, "id").unwrap_or_default();
    let aid = json_u16(&json, "aid").unwrap_or(0);
    let scy = json_str(&json, "scy").unwrap_or_else(|| "auto".to_string());
    let net = json_str(&json, "net").unwrap_or_else(|| "tcp".to_string());
    let path = json_str(&json, "path").unwrap_or_default();
    let host = json_str(&json, "host").unwrap_or_default();
    let tls = json_str(&json, "tls").is_some_and(|t| t == "tls");

    // Fall back to the host header when no explicit SNI is given
    let sni = json_str(&json, "sni").or_else(|| json_str(&json, "host"));

    let remark = json_str(&json, "ps").unwrap_or_default();

    Ok(ProxyNode::vmess_construct(
        &remark, &add, port, &id, aid, &scy, &net, &path, &host, tls, sni,
    ))
}

/// Non-empty scalar at `key`, rendered as text.
///
/// Empty strings and nulls count as absent. Numbers and booleans are
/// stringified since share links disagree on how they quote them.
fn json_str(json: &Map<String, Value>, key: &str) -> Option<String> {
    match json.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Numeric field at `key`, given either as a JSON number or a numeric string.
fn json_u16(json: &Map<String, Value>, key: &str) -> Option<u16> {
    match json.get(key)? {
        Value::Number(n) => n.as_u64().and_then(|p| u16::try_from(p).ok()),
        Value::String(s) => s.trim().parse::<u16>().ok(),
        _ => None,
    }
}
