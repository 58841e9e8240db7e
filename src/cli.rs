use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ConfigError, CrawlerConfig, Transport};
use crate::packet::Value;

#[derive(Parser, Debug, Clone)]
#[command(name = "crawler", about = "Remote control for the crawler")]
pub struct Cli {
    #[command(flatten)]
    pub link: LinkOpts,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Cmd {
    /// Drive with signed speed in percent [-100, 100]
    Drive {
        #[arg(allow_hyphen_values = true)]
        speed: i32,
    },
    /// Drive forward, speed in percent [0, 100]
    Forward { speed: i32 },
    /// Drive backward, speed in percent [0, 100]
    Backward { speed: i32 },
    /// Steer in percent [-100, 100], positive is right
    Steer {
        #[arg(allow_hyphen_values = true)]
        steering: i32,
    },
    /// Make the crawler speak
    Speak { text: String },
    /// Enable motor control
    Enable,
    /// Disable motor control
    Disable,
    /// Send any registered command by name
    Raw {
        name: String,
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// Print the command registry
    List,
    /// Interactive keyboard control
    Teleop,
}

#[derive(Args, Debug, Clone, Default)]
pub struct LinkOpts {
    /// JSON config file, flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Crawler host
    #[arg(long)]
    pub host: Option<String>,
    /// Crawler command port
    #[arg(long)]
    pub port: Option<u16>,
    /// Transport used to reach the crawler
    #[arg(long, value_enum)]
    pub transport: Option<Transport>,
    /// Serial device path
    #[arg(long)]
    pub serial_port: Option<String>,
    /// Serial baud rate
    #[arg(long)]
    pub baud: Option<u32>,
    /// Zenoh key expression
    #[arg(long)]
    pub topic: Option<String>,
}

impl LinkOpts {
    /// Config file (or defaults) with command-line overrides applied
    pub fn resolve(&self) -> Result<CrawlerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => CrawlerConfig::load(path)?,
            None => CrawlerConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(transport) = self.transport {
            config.transport = transport;
        }
        if let Some(serial_port) = &self.serial_port {
            config.serial_port = serial_port.clone();
        }
        if let Some(baud) = self.baud {
            config.baud_rate = baud;
        }
        if let Some(topic) = &self.topic {
            config.topic = topic.clone();
        }
        Ok(config)
    }
}

/// Integers go on the wire as numbers, anything else as text
pub fn parse_value(raw: &str) -> Value {
    match raw.parse::<i32>() {
        Ok(v) => Value::Int(v),
        Err(_) => Value::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_drive_parses() {
        let cli = Cli::try_parse_from(["crawler", "drive", "-40"]).unwrap();
        assert!(matches!(cli.cmd, Cmd::Drive { speed: -40 }));
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "crawler",
            "--host",
            "192.168.1.20",
            "--transport",
            "zenoh",
            "enable",
        ])
        .unwrap();
        let config = cli.link.resolve().unwrap();
        assert_eq!(config.host, "192.168.1.20");
        assert_eq!(config.transport, Transport::Zenoh);
        assert_eq!(config.port, crate::config::DEFAULT_PORT);
    }

    #[test]
    fn test_raw_without_value() {
        let cli = Cli::try_parse_from(["crawler", "raw", "disable_motor_control"]).unwrap();
        match cli.cmd {
            Cmd::Raw { name, value } => {
                assert_eq!(name, "disable_motor_control");
                assert!(value.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("-12"), Value::Int(-12));
        assert_eq!(parse_value("hello"), Value::Text("hello".to_string()));
    }
}
