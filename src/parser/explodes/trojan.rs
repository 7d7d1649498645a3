use crate::models::ProxyNode;
use crate::parser::ParseError;
use crate::utils::url::{fragment_text, host_text, query_params, query_value, url_decode};
use url::Url;

/// Parse a Trojan link into a ProxyNode
///
/// Format: `trojan://password@hostname:port?sni=xxx#remark`
pub fn explode_trojan(trojan: &str) -> Result<ProxyNode, ParseError> {
    if !trojan.starts_with("trojan://") {
        return Err(ParseError::UnsupportedScheme(trojan.to_string()));
    }

    let url = Url::parse(trojan)?;

    let password = url_decode(url.username());
    let host = host_text(&url).ok_or(ParseError::MissingHost)?;
    let port = url.port().unwrap_or(0);

    let params = query_params(&url);

    // Without an explicit SNI the server name doubles as one
    let sni = query_value(&params, "sni").unwrap_or(&host).to_string();

    let remark = fragment_text(&url);

    Ok(ProxyNode::trojan_construct(
        &remark, &host, port, &password, &sni,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProxyType;

    #[test]
    fn test_explode_trojan() {
        let link = "trojan://p%40ss@trojan.example.com:443?sni=front.example.com&type=tcp#JP%20Tokyo";
        let node = explode_trojan(link).unwrap();

        assert_eq!(node.proxy_type, ProxyType::Trojan);
        assert_eq!(node.server, "trojan.example.com");
        assert_eq!(node.port, 443);
        assert_eq!(node.password.as_deref(), Some("p@ss"));
        assert_eq!(node.sni.as_deref(), Some("front.example.com"));
        assert_eq!(node.name, "JP Tokyo");
        assert_eq!(node.uuid, None);
        assert_eq!(node.network, None);
    }

    #[test]
    fn test_explode_trojan_sni_falls_back_to_hostname() {
        let node = explode_trojan("trojan://secret@trojan.example.com:8443").unwrap();

        assert_eq!(node.sni.as_deref(), Some("trojan.example.com"));
        assert_eq!(node.port, 8443);
        assert_eq!(node.name, "Trojan节点");
    }

    #[test]
    fn test_explode_trojan_undecodable_name_uses_default() {
        let node = explode_trojan("trojan://p@h.com:1#%E9%A6").unwrap();
        assert_eq!(node.name, "Trojan节点");
    }

    #[test]
    fn test_explode_trojan_invalid_prefix() {
        assert!(matches!(
            explode_trojan("trojan-go://secret@example.com:443"),
            Err(ParseError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_explode_trojan_invalid_port() {
        assert!(matches!(
            explode_trojan("trojan://secret@example.com:70000"),
            Err(ParseError::Url(_))
        ));
    }
}
