use subprobe::generator::proxy_to_link;
use subprobe::utils::base64::base64_encode;
use subprobe::{explode, explode_all, ProxyNode, ProxyType};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod explode_tests {
    use super::*;

    #[test]
    fn test_every_scheme_yields_matching_type() {
        init_logger();

        let vmess = format!(
            "vmess://{}",
            base64_encode(r#"{"add":"vm.example.com","port":"443","id":"id-1","ps":"VM"}"#)
        );
        let ssr = format!(
            "ssr://{}",
            base64_encode("ssr.example.com:8989:origin:aes-256-cfb:plain:pw")
        );
        let cases = [
            (vmess.as_str(), ProxyType::VMess, "vm.example.com", 443),
            ("vless://u@vl.example.com:8443", ProxyType::Vless, "vl.example.com", 8443),
            ("trojan://p@tj.example.com:443", ProxyType::Trojan, "tj.example.com", 443),
            ("ss://aes-128-gcm:p@ss.example.com:8388", ProxyType::Shadowsocks, "ss.example.com", 8388),
            (ssr.as_str(), ProxyType::ShadowsocksR, "ssr.example.com", 8989),
        ];

        for (link, proxy_type, server, port) in cases {
            let node = explode(link).unwrap_or_else(|| panic!("failed to parse {}", link));
            assert_eq!(node.proxy_type, proxy_type);
            assert_eq!(node.server, server);
            assert_eq!(node.port, port);
            assert!(node.is_valid());
        }
    }

    #[test]
    fn test_unrecognized_links_yield_none() {
        init_logger();

        for link in [
            "",
            "http://example.com",
            "hysteria2://pw@example.com:443",
            "Vmess://abc",
            " just text ",
            "ssr:/missing-slash",
        ] {
            assert_eq!(explode(link), None, "{}", link);
        }
    }

    #[test]
    fn test_vmess_with_invalid_json_yields_none() {
        init_logger();

        let link = format!("vmess://{}", base64_encode("{\"add\": \"a.com\","));
        assert_eq!(explode(&link), None);
    }

    #[test]
    fn test_vless_scenario() {
        let node = explode(
            "vless://uuid-123@example.com:443?security=tls&type=ws&path=/ws&host=cdn.example.com&sni=real.example.com#MyNode",
        )
        .unwrap();

        let expected = serde_json::json!({
            "type": "vless",
            "server": "example.com",
            "port": 443,
            "name": "MyNode",
            "uuid": "uuid-123",
            "flow": "",
            "security": "tls",
            "network": "ws",
            "wsPath": "/ws",
            "wsHeaders": {"Host": "cdn.example.com"},
            "tls": true,
            "sni": "real.example.com"
        });
        assert_eq!(serde_json::to_value(&node).unwrap(), expected);
    }

    #[test]
    fn test_ss_without_user_info_does_not_break_batch() {
        init_logger();

        let nodes = explode_all([
            "ss://example.com:8388#Test",
            "trojan://pw@example.com:443#Good",
        ]);

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "Good");
    }

    #[test]
    fn test_round_trip_per_scheme() {
        let nodes = [
            explode(&format!(
                "vmess://{}",
                base64_encode(
                    r#"{"add":"vm.example.com","port":443,"id":"id-1","aid":"2","scy":"none","net":"ws","path":"/v","host":"h.example.com","tls":"tls","ps":"香港 VM"}"#
                )
            ))
            .unwrap(),
            explode("vless://u-1@vl.example.com:443?flow=xtls-rprx-vision&security=tls&type=grpc&sni=s.example.com#VL%201")
                .unwrap(),
            explode("trojan://p%23w@tj.example.com:443?sni=s.example.com#TJ").unwrap(),
            explode("ss://chacha20-ietf-poly1305:p%40ss@ss.example.com:8388#SS%20Home").unwrap(),
            explode(&format!(
                "ssr://{}",
                base64_encode("ssr.example.com:8989:auth_chain_a:none:tls1.2_ticket_auth:cGFzcw")
            ))
            .unwrap(),
        ];

        for node in nodes {
            let link = proxy_to_link(&node);
            assert_eq!(explode(&link).as_ref(), Some(&node), "{}", link);
        }
    }

    #[test]
    fn test_nodes_serialize_and_deserialize() {
        let node = explode("trojan://pw@example.com:443").unwrap();
        let json = serde_json::to_string(&node).unwrap();

        assert!(json.contains("\"type\":\"trojan\""));
        assert!(!json.contains("uuid"));
        let back: ProxyNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
