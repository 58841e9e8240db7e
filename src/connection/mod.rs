// Transports carrying packets to the crawler
//
// Provides:
// - TCP socket client (default)
// - Serial link client
// - Zenoh publisher
//
// The controller only sees the Connection trait and never retries or
// inspects failures; they are handed back to the caller as-is.

mod pubsub;
mod serial;
mod tcp;

pub use pubsub::ZenohClient;
pub use serial::SerialClient;
pub use tcp::TcpClient;

use crate::config::{CrawlerConfig, Transport};

/// Transport failures
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("Not connected to {target}")]
    NotConnected { target: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("Zenoh error: {0}")]
    Zenoh(String),
}

pub type Result<T> = std::result::Result<T, ConnectionError>;

/// Point-to-point link to the crawler
pub trait Connection {
    /// Establish the link. Calling it on an open link is a no-op.
    fn connect_to_host(&mut self) -> Result<()>;

    /// Transmit one encoded packet
    fn send_package(&mut self, data: &str) -> Result<()>;

    fn is_connected(&self) -> bool;
}

impl<C: Connection + ?Sized> Connection for Box<C> {
    fn connect_to_host(&mut self) -> Result<()> {
        (**self).connect_to_host()
    }

    fn send_package(&mut self, data: &str) -> Result<()> {
        (**self).send_package(data)
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}

/// Build the (unconnected) transport selected by the config
pub fn open_connection(config: &CrawlerConfig) -> Box<dyn Connection> {
    match config.transport {
        Transport::Tcp => Box::new(TcpClient::new(&config.host, config.port)),
        Transport::Serial => Box::new(SerialClient::with_baudrate(
            &config.serial_port,
            config.baud_rate,
        )),
        Transport::Zenoh => Box::new(ZenohClient::new(&config.topic)),
    }
}
