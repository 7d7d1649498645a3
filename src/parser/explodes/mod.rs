//! Link decoders, one per supported scheme, and the dispatcher that picks between them.

mod common;
pub mod ss;
pub mod ssr;
pub mod trojan;
pub mod vless;
pub mod vmess;

pub use common::{explode, explode_all, explode_sub, try_explode, Scheme};
