// TCP socket client for the crawler's command port

use std::io::Write;
use std::net::TcpStream;
use tracing::{debug, info};

use super::{Connection, ConnectionError, Result};

pub struct TcpClient {
    host: String,
    port: u16,
    stream: Option<TcpStream>,
}

impl TcpClient {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
            stream: None,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Connection for TcpClient {
    fn connect_to_host(&mut self) -> Result<()> {
        if self.stream.is_some() {
            debug!("Already connected to {}", self.address());
            return Ok(());
        }

        info!("Connecting to crawler at {}", self.address());
        let stream = TcpStream::connect((self.host.as_str(), self.port))?;
        // packets are tiny, don't let Nagle hold them back
        stream.set_nodelay(true)?;
        self.stream = Some(stream);
        info!("Connected to {}", self.address());
        Ok(())
    }

    fn send_package(&mut self, data: &str) -> Result<()> {
        let target = self.address();
        let stream = self
            .stream
            .as_mut()
            .ok_or(ConnectionError::NotConnected { target })?;

        stream.write_all(data.as_bytes())?;
        stream.flush()?;
        debug!("Wrote {} bytes", data.len());
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}
