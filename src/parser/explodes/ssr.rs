use crate::models::ProxyNode;
use crate::parser::ParseError;
use crate::utils::base64::base64_decode;

/// Field names of the colon separated main part, in link order.
const SSR_FIELDS: [&str; 6] = ["server", "port", "protocol", "method", "obfs", "password"];

/// Parse a ShadowsocksR link into a ProxyNode
///
/// Format: `ssr://base64(server:port:protocol:method:obfs:password/?params)`.
/// Only the main part before the first `/` is read; the trailing parameters
/// (remarks, group, obfs/protocol params) are ignored and the node always
/// gets the default name.
pub fn explode_ssr(ssr: &str) -> Result<ProxyNode, ParseError> {
    let encoded = ssr
        .strip_prefix("ssr://")
        .ok_or_else(|| ParseError::UnsupportedScheme(ssr.to_string()))?;

    let decoded = base64_decode(encoded)?;
    let main_part = decoded.split('/').next().unwrap_or("");

    let mut parts = main_part.split(':');
    let mut fields = [""; 6];
    for (slot, name) in fields.iter_mut().zip(SSR_FIELDS) {
        *slot = parts.next().ok_or(ParseError::MissingField(name))?;
    }
    let [server, port, protocol, method, obfs, password] = fields;

    let port = port.parse::<u16>().unwrap_or(0);

    Ok(ProxyNode::ssr_construct(
        server, port, protocol, method, obfs, password,
    ))
}
