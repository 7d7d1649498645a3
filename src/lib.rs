pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the main node types for easier access
pub use models::{get_latency_color_class, get_latency_level, LatencyLevel};
pub use models::{ProxyNode, ProxyType};

// Re-export the decoding entry points
pub use parser::{explode, explode_all, explode_sub, try_explode, ParseError};

pub use settings::TestConfig;
