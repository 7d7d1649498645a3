//! Core data models for the crate
//!
//! This module contains the primary data structures used throughout the crate,
//! separated from the logic that produces them.
//!
//! # Usage
//!
//! Nodes come out of the link decoders, but can be built directly too:
//!
//! ```rust
//! use subprobe::models::{ProxyNode, ProxyType};
//!
//! let node = ProxyNode::trojan_construct("", "example.com", 443, "secret", "example.com");
//! assert_eq!(node.proxy_type, ProxyType::Trojan);
//! assert_eq!(node.name, "Trojan节点");
//! ```
//!
//! # Working with Option fields
//!
//! Type-specific fields are wrapped in `Option`. Check `proxy_type` before
//! relying on any of them:
//!
//! ```rust
//! use subprobe::{explode, ProxyType};
//!
//! let node = explode("ss://aes-256-gcm:pass@example.com:8388#Home").unwrap();
//! if node.proxy_type == ProxyType::Shadowsocks {
//!     let method = node.method.as_deref().unwrap_or("none");
//!     assert_eq!(method, "aes-256-gcm");
//! }
//! ```

pub mod latency;
mod proxy;

pub use latency::{get_latency_color_class, get_latency_level, LatencyLevel};
pub use proxy::*;
