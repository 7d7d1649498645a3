//! Proxy model definitions
//!
//! Contains the normalized node record every link decoder produces.

use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// Represents the type of a proxy.
/// This is the discriminant consumers check before reading any type-specific field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProxyType {
    #[serde(rename = "vmess")]
    VMess,
    #[serde(rename = "vless")]
    Vless,
    #[serde(rename = "trojan")]
    Trojan,
    #[serde(rename = "ss")]
    Shadowsocks,
    #[serde(rename = "ssr")]
    ShadowsocksR,
}

impl ProxyType {
    /// Scheme name as it appears before `://`.
    pub fn scheme(self) -> &'static str {
        match self {
            ProxyType::VMess => "vmess",
            ProxyType::Vless => "vless",
            ProxyType::Trojan => "trojan",
            ProxyType::Shadowsocks => "ss",
            ProxyType::ShadowsocksR => "ssr",
        }
    }

    /// Display name used when a link carries no name of its own.
    pub fn default_name(self) -> &'static str {
        match self {
            ProxyType::VMess => VMESS_DEFAULT_NAME,
            ProxyType::Vless => VLESS_DEFAULT_NAME,
            ProxyType::Trojan => TROJAN_DEFAULT_NAME,
            ProxyType::Shadowsocks => SS_DEFAULT_NAME,
            ProxyType::ShadowsocksR => SSR_DEFAULT_NAME,
        }
    }
}

impl std::fmt::Display for ProxyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.scheme())
    }
}

/// Header name to value, in insertion order.
pub type WsHeaders = LinkedHashMap<String, String>;

/// A proxy node decoded from a single link.
///
/// Only `proxy_type`, `server`, `port` and `name` are meaningful for every
/// type. The remaining fields are filled by the decoder of the matching type
/// and stay `None` (or default) otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyNode {
    #[serde(rename = "type")]
    pub proxy_type: ProxyType,
    pub server: String,
    /// `0` when the link carried no usable port.
    pub port: u16,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alter_id: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub security: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ws_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ws_headers: Option<WsHeaders>,
    #[serde(default)]
    pub tls: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sni: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub obfs: Option<String>,
}

impl ProxyNode {
    /// Bare node of the given type with every optional field unset.
    fn base(proxy_type: ProxyType, server: &str, port: u16, name: &str) -> Self {
        let name = if name.is_empty() {
            proxy_type.default_name().to_string()
        } else {
            name.to_string()
        };

        ProxyNode {
            proxy_type,
            server: server.to_string(),
            port,
            name,
            uuid: None,
            password: None,
            method: None,
            alter_id: None,
            flow: None,
            security: None,
            network: None,
            ws_path: None,
            ws_headers: None,
            tls: false,
            sni: None,
            protocol: None,
            obfs: None,
        }
    }

    /// Whether the node names a usable endpoint.
    ///
    /// Decoders never reject a node on these grounds, so callers that go on
    /// to probe a node should check this first.
    pub fn is_valid(&self) -> bool {
        !self.server.is_empty() && self.port != 0
    }

    #[allow(clippy::too_many_arguments)]
    pub fn vmess_construct(
        name: &str,
        server: &str,
        port: u16,
        uuid: &str,
        alter_id: u16,
        security: &str,
        network: &str,
        ws_path: &str,
        host: &str,
        tls: bool,
        sni: Option<String>,
    ) -> Self {
        let mut node = Self::base(ProxyType::VMess, server, port, name);
        node.uuid = Some(uuid.to_string());
        node.alter_id = Some(alter_id);
        node.security = Some(security.to_string());
        node.network = Some(network.to_string());
        node.ws_path = Some(ws_path.to_string());
        node.ws_headers = Some(host_headers(host));
        node.tls = tls;
        node.sni = sni;
        node
    }

    #[allow(clippy::too_many_arguments)]
    pub fn vless_construct(
        name: &str,
        server: &str,
        port: u16,
        uuid: &str,
        flow: &str,
        security: &str,
        network: &str,
        ws_path: &str,
        host: &str,
        sni: Option<String>,
    ) -> Self {
        let mut node = Self::base(ProxyType::Vless, server, port, name);
        node.uuid = Some(uuid.to_string());
        node.flow = Some(flow.to_string());
        node.tls = security == "tls";
        node.security = Some(security.to_string());
        node.network = Some(network.to_string());
        node.ws_path = Some(ws_path.to_string());
        node.ws_headers = Some(host_headers(host));
        node.sni = sni;
        node
    }

    pub fn trojan_construct(name: &str, server: &str, port: u16, password: &str, sni: &str) -> Self {
        let mut node = Self::base(ProxyType::Trojan, server, port, name);
        node.password = Some(password.to_string());
        node.sni = Some(sni.to_string());
        node
    }

    pub fn ss_construct(name: &str, server: &str, port: u16, method: &str, password: &str) -> Self {
        let mut node = Self::base(ProxyType::Shadowsocks, server, port, name);
        node.method = Some(method.to_string());
        node.password = Some(password.to_string());
        node
    }

    pub fn ssr_construct(
        server: &str,
        port: u16,
        protocol: &str,
        method: &str,
        obfs: &str,
        password: &str,
    ) -> Self {
        // SSR links are never inspected for a name
        let mut node = Self::base(ProxyType::ShadowsocksR, server, port, "");
        node.protocol = Some(protocol.to_string());
        node.method = Some(method.to_string());
        node.obfs = Some(obfs.to_string());
        node.password = Some(password.to_string());
        node
    }
}

/// `{Host: host}` for a non-empty host, otherwise an empty map.
fn host_headers(host: &str) -> WsHeaders {
    let mut headers = WsHeaders::new();
    if !host.is_empty() {
        headers.insert("Host".to_string(), host.to_string());
    }
    headers
}

/// Default node names as constants.
pub const VMESS_DEFAULT_NAME: &str = "VMess节点";
pub const VLESS_DEFAULT_NAME: &str = "VLess节点";
pub const TROJAN_DEFAULT_NAME: &str = "Trojan节点";
pub const SS_DEFAULT_NAME: &str = "Shadowsocks节点";
pub const SSR_DEFAULT_NAME: &str = "SSR节点";
