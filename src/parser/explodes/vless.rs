use crate::models::ProxyNode;
use crate::parser::ParseError;
use crate::utils::url::{fragment_text, host_text, query_params, query_value, url_decode};
use url::Url;

/// Parse a VLESS link into a ProxyNode
///
/// Format: `vless://uuid@hostname:port?security=tls&type=ws&path=/ws&host=xxx&sni=yyy#remark`
pub fn explode_vless(vless: &str) -> Result<ProxyNode, ParseError> {
    if !vless.starts_with("vless://") {
        return Err(ParseError::UnsupportedScheme(vless.to_string()));
    }

    let url = Url::parse(vless)?;

    let host = host_text(&url).ok_or(ParseError::MissingHost)?;
    // A missing port is kept as 0 rather than rejected
    let port = url.port().unwrap_or(0);
    let uuid = url_decode(url.username());

    let params = query_params(&url);
    let flow = query_value(&params, "flow").unwrap_or("");
    let security = query_value(&params, "security").unwrap_or("none");
    let network = query_value(&params, "type").unwrap_or("tcp");
    let path = query_value(&params, "path").unwrap_or("");
    let host_header = query_value(&params, "host").unwrap_or("");
    let sni = query_value(&params, "sni")
        .or_else(|| query_value(&params, "host"))
        .map(str::to_string);

    let remark = fragment_text(&url);

    Ok(ProxyNode::vless_construct(
        &remark,
        &host,
        port,
        &uuid,
        flow,
        security,
        network,
        path,
        host_header,
        sni,
    ))
}
