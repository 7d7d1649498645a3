use crate::models::{ProxyNode, ProxyType};
use crate::utils::url::url_encode;
use base64::{engine::general_purpose, Engine as _};
use serde_json::json;

/// Convert a node back to the share link of its type
///
/// Only the fields the link format can carry are written, so decoding the
/// result yields the same node for anything the decoders produced. SSR links
/// have no room for a name.
pub fn proxy_to_link(node: &ProxyNode) -> String {
    let server = authority_host(&node.server);

    match node.proxy_type {
        ProxyType::VMess => {
            // Format: vmess://BASE64(JSON)
            let tls = if node.tls { "tls" } else { "" };
            let mut vmess_json = json!({
                "v": "2",
                "ps": node.name,
                "add": node.server,
                "port": node.port,
                "id": node.uuid.as_deref().unwrap_or(""),
                "aid": node.alter_id.unwrap_or(0),
                "scy": node.security.as_deref().unwrap_or("auto"),
                "net": node.network.as_deref().unwrap_or("tcp"),
                "path": node.ws_path.as_deref().unwrap_or(""),
                "host": header_host(node),
                "tls": tls
            });

            if let Some(sni) = node.sni.as_deref().filter(|s| !s.is_empty()) {
                vmess_json["sni"] = json!(sni);
            }

            format!(
                "vmess://{}",
                general_purpose::STANDARD.encode(vmess_json.to_string())
            )
        }
        ProxyType::Vless => {
            // Format: vless://uuid@server:port?security=tls&type=ws&path=/ws&host=xxx&sni=yyy#remark
            let mut params = Vec::new();
            push_param(&mut params, "flow", node.flow.as_deref());
            push_param(&mut params, "security", node.security.as_deref());
            push_param(&mut params, "type", node.network.as_deref());
            push_param(&mut params, "path", node.ws_path.as_deref());
            push_param(&mut params, "host", Some(header_host(node)));
            push_param(&mut params, "sni", node.sni.as_deref());

            let mut uri = format!(
                "vless://{}@{}:{}",
                url_encode(node.uuid.as_deref().unwrap_or("")),
                server,
                node.port
            );
            if !params.is_empty() {
                uri.push_str(&format!("?{}", params.join("&")));
            }
            uri.push_str(&format!("#{}", url_encode(&node.name)));
            uri
        }
        ProxyType::Trojan => {
            // Format: trojan://password@server:port?sni=sni#remark
            let mut uri = format!(
                "trojan://{}@{}:{}",
                url_encode(node.password.as_deref().unwrap_or("")),
                server,
                node.port
            );

            let mut params = Vec::new();
            push_param(&mut params, "sni", node.sni.as_deref());
            if !params.is_empty() {
                uri.push_str(&format!("?{}", params.join("&")));
            }

            uri.push_str(&format!("#{}", url_encode(&node.name)));
            uri
        }
        ProxyType::Shadowsocks => {
            // Format: ss://BASE64URL(method:password)@server:port#remark
            let user_info = format!(
                "{}:{}",
                node.method.as_deref().unwrap_or(""),
                node.password.as_deref().unwrap_or("")
            );
            format!(
                "ss://{}@{}:{}#{}",
                general_purpose::URL_SAFE_NO_PAD.encode(user_info),
                server,
                node.port,
                url_encode(&node.name)
            )
        }
        ProxyType::ShadowsocksR => {
            // Format: ssr://BASE64URL(server:port:protocol:method:obfs:password)
            let plain_text = format!(
                "{}:{}:{}:{}:{}:{}",
                node.server,
                node.port,
                node.protocol.as_deref().unwrap_or(""),
                node.method.as_deref().unwrap_or(""),
                node.obfs.as_deref().unwrap_or(""),
                node.password.as_deref().unwrap_or("")
            );
            format!(
                "ssr://{}",
                general_purpose::URL_SAFE_NO_PAD.encode(plain_text)
            )
        }
    }
}

/// IPv6 literals need brackets inside an authority.
fn authority_host(server: &str) -> String {
    if server.contains(':') {
        format!("[{}]", server)
    } else {
        server.to_string()
    }
}

fn header_host(node: &ProxyNode) -> &str {
    node.ws_headers
        .as_ref()
        .and_then(|headers| headers.get("Host"))
        .map(String::as_str)
        .unwrap_or("")
}

fn push_param(params: &mut Vec<String>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        params.push(format!("{}={}", key, url_encode(value)));
    }
}
