// Serial link to the crawler
//
// Each packet is written as one '\n' terminated line so the firmware can
// split the byte stream.

use serialport::{self, SerialPort};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

use super::{Connection, ConnectionError, Result};
use crate::config::{DEFAULT_BAUDRATE, SERIAL_TIMEOUT_MS};

pub struct SerialClient {
    port_name: String,
    baudrate: u32,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialClient {
    pub fn new(port_name: &str) -> Self {
        Self::with_baudrate(port_name, DEFAULT_BAUDRATE)
    }

    pub fn with_baudrate(port_name: &str, baudrate: u32) -> Self {
        Self {
            port_name: port_name.to_string(),
            baudrate,
            port: None,
        }
    }

    fn frame(data: &str) -> Vec<u8> {
        let mut line = Vec::with_capacity(data.len() + 1);
        line.extend_from_slice(data.as_bytes());
        line.push(b'\n');
        line
    }
}

impl Connection for SerialClient {
    fn connect_to_host(&mut self) -> Result<()> {
        if self.port.is_some() {
            debug!("Serial port {} already open", self.port_name);
            return Ok(());
        }

        info!("Opening {} at {} baud", self.port_name, self.baudrate);
        let port = serialport::new(&self.port_name, self.baudrate)
            .timeout(Duration::from_millis(SERIAL_TIMEOUT_MS))
            .open()?;
        self.port = Some(port);
        Ok(())
    }

    fn send_package(&mut self, data: &str) -> Result<()> {
        let port = self.port.as_mut().ok_or_else(|| ConnectionError::NotConnected {
            target: self.port_name.clone(),
        })?;

        port.write_all(&Self::frame(data))?;
        port.flush()?;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.port.is_some()
    }
}
