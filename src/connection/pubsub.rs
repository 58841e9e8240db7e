// Zenoh publisher: each packet is put on the crawler's command key expression

use tracing::{debug, info};
use zenoh::pubsub::Publisher;
use zenoh::{Session, Wait};

use super::{Connection, ConnectionError, Result};

pub struct ZenohClient {
    topic: String,
    link: Option<(Publisher<'static>, Session)>,
}

impl ZenohClient {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            link: None,
        }
    }
}

fn zenoh_err(e: zenoh::Error) -> ConnectionError {
    ConnectionError::Zenoh(e.to_string())
}

impl Connection for ZenohClient {
    fn connect_to_host(&mut self) -> Result<()> {
        if self.link.is_some() {
            debug!("Zenoh session already open");
            return Ok(());
        }

        info!("Opening Zenoh session...");
        let session = zenoh::open(zenoh::Config::default()).wait().map_err(zenoh_err)?;
        let publisher = session
            .declare_publisher(self.topic.clone())
            .wait()
            .map_err(zenoh_err)?;
        info!("Publishing to: {}", self.topic);

        self.link = Some((publisher, session));
        Ok(())
    }

    fn send_package(&mut self, data: &str) -> Result<()> {
        let (publisher, _) = self.link.as_ref().ok_or_else(|| ConnectionError::NotConnected {
            target: self.topic.clone(),
        })?;

        publisher.put(data.to_string()).wait().map_err(zenoh_err)
    }

    fn is_connected(&self) -> bool {
        self.link.is_some()
    }
}
