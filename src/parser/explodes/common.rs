use crate::models::ProxyNode;
use crate::parser::ParseError;
use crate::utils::base64::base64_decode;
use log::{debug, error};

/// Link schemes the decoders understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    VMess,
    Vless,
    Trojan,
    Shadowsocks,
    ShadowsocksR,
}

impl Scheme {
    /// Prefix literals, matched case-sensitively.
    const PREFIXES: [(&'static str, Scheme); 5] = [
        ("vmess://", Scheme::VMess),
        ("vless://", Scheme::Vless),
        ("trojan://", Scheme::Trojan),
        ("ss://", Scheme::Shadowsocks),
        ("ssr://", Scheme::ShadowsocksR),
    ];

    /// Detect the scheme of a link from its prefix.
    pub fn from_link(link: &str) -> Option<Scheme> {
        Self::PREFIXES
            .iter()
            .find(|(prefix, _)| link.starts_with(prefix))
            .map(|(_, scheme)| *scheme)
    }

    /// Run the decoder belonging to this scheme.
    pub fn decode(self, link: &str) -> Result<ProxyNode, ParseError> {
        match self {
            Scheme::VMess => super::vmess::explode_vmess(link),
            Scheme::Vless => super::vless::explode_vless(link),
            Scheme::Trojan => super::trojan::explode_trojan(link),
            Scheme::Shadowsocks => super::ss::explode_ss(link),
            Scheme::ShadowsocksR => super::ssr::explode_ssr(link),
        }
    }
}

/// Explode a proxy link into a ProxyNode, keeping the reason it failed
pub fn try_explode(link: &str) -> Result<ProxyNode, ParseError> {
    let link = link.trim();

    match Scheme::from_link(link) {
        Some(scheme) => scheme.decode(link),
        None => Err(ParseError::UnsupportedScheme(
            link.split("://").next().unwrap_or_default().to_string(),
        )),
    }
}

/// Explode a proxy link into a ProxyNode
///
/// This function detects the type of proxy link and calls the appropriate
/// decoder. Links that cannot be decoded yield `None`; the reason is only
/// logged, since a subscription routinely carries a few broken entries.
pub fn explode(link: &str) -> Option<ProxyNode> {
    match try_explode(link) {
        Ok(node) => Some(node),
        Err(ParseError::UnsupportedScheme(scheme)) => {
            debug!("Skipping link with unsupported scheme: {}", scheme);
            None
        }
        Err(e) => {
            error!("Failed to parse proxy link: {}", e);
            None
        }
    }
}

/// Explode a batch of links, dropping the ones that fail
pub fn explode_all<I, S>(links: I) -> Vec<ProxyNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    links
        .into_iter()
        .filter_map(|link| explode(link.as_ref()))
        .collect()
}

/// Explode a subscription content into a vector of ProxyNode objects
///
/// The content is either one link per line, or that same list base64 encoded
/// as a whole.
pub fn explode_sub(sub: &str) -> Vec<ProxyNode> {
    let sub = sub.trim();
    if sub.is_empty() {
        return Vec::new();
    }

    let content = if sub.contains("://") {
        sub.to_string()
    } else {
        match base64_decode(sub) {
            Ok(decoded) => decoded,
            Err(e) => {
                error!("Failed to decode subscription content: {}", e);
                return Vec::new();
            }
        }
    };

    explode_all(content.lines().map(str::trim).filter(|line| !line.is_empty()))
}
