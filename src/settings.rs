//! Latency test configuration
//!
//! Holds the knobs shared by the retry helper and whatever drives the actual
//! probes. A process-wide copy lives behind [`TestConfig::current`]; it starts
//! out with the built-in defaults and can be replaced from a TOML file.

use std::path::Path;
use std::sync::{Arc, LazyLock, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration for latency testing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestConfig {
    /// Overall probe timeout in milliseconds
    pub timeout: u64,
    /// Connection timeout in milliseconds
    pub connect_timeout: u64,
    pub test_urls: Vec<String>,
    pub max_retries: u32,
    /// Pause between retries in milliseconds
    pub retry_delay: u64,
    /// Suggested number of probes in flight; not enforced here
    pub max_concurrent: usize,
    pub user_agents: Vec<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        TestConfig {
            timeout: 10_000,
            connect_timeout: 5_000,
            test_urls: vec![
                "http://www.google.com/generate_204".to_string(),
                "https://httpbin.org/delay/1".to_string(),
                "https://www.cloudflare.com/cdn-cgi/trace".to_string(),
                "https://www.baidu.com/favicon.ico".to_string(),
            ],
            max_retries: 2,
            retry_delay: 1_000,
            max_concurrent: 5,
            user_agents: vec![
                "MiSub-Proxy-Test/1.0".to_string(),
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
                "Clash for Windows/0.20.39".to_string(),
            ],
        }
    }
}

static CURRENT: LazyLock<RwLock<Arc<TestConfig>>> =
    LazyLock::new(|| RwLock::new(Arc::new(TestConfig::default())));

impl TestConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Get the process-wide configuration.
    pub fn current() -> Arc<TestConfig> {
        match CURRENT.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the process-wide configuration.
    pub fn set_current(config: TestConfig) {
        let mut guard = match CURRENT.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Arc::new(config);
    }
}
