// Connection defaults, wire constants and the optional JSON config file
use std::path::Path;

use serde::Deserialize;

// Default crawler endpoint
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

// Native actuation scale: 100% maps to 480, the max duty cycle of the
// Pololu Dual MC33926 motor driver on the crawler
pub const NATIVE_SCALE: f64 = 4.8;

// Percentage bounds (closed intervals)
pub const PERCENT_MIN: i32 = -100;
pub const PERCENT_MAX: i32 = 100;

// Wire labels shared with the crawler firmware, must stay byte-stable
pub const HEADER_LITERAL: &str = "[header]";
pub const ID_LITERAL: &str = "[id]";
pub const VALUE_LITERAL: &str = "[value]";
pub const COMMAND_HEADER: &str = "command";
pub const ABSENT_VALUE: &str = "None";

// Serial link
pub const DEFAULT_SERIAL_PORT: &str = "/dev/ttyUSB0";
pub const DEFAULT_BAUDRATE: u32 = 115_200;
pub const SERIAL_TIMEOUT_MS: u64 = 100;

// Zenoh key expression the crawler subscribes to
pub const DEFAULT_TOPIC: &str = "crawler/cmd";

// Teleop loop
pub const TELEOP_POLL_MS: u64 = 20; // 50Hz
pub const TELEOP_IDLE_TIMEOUT_MS: u64 = 100;

/// Which transport carries packets to the crawler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    #[default]
    Tcp,
    Serial,
    Zenoh,
}

/// Settings read from a JSON file, every field optional
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    pub host: String,
    pub port: u16,
    pub transport: Transport,
    pub serial_port: String,
    pub baud_rate: u32,
    pub topic: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            transport: Transport::Tcp,
            serial_port: DEFAULT_SERIAL_PORT.to_string(),
            baud_rate: DEFAULT_BAUDRATE,
            topic: DEFAULT_TOPIC.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl CrawlerConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// `host:port` for socket transports
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
