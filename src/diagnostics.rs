// Diagnostic sink injected into the controller

use tracing::{debug, warn};

use crate::controller::Rejection;
use crate::packet::Packet;

/// Receives controller diagnostics. Must never fail the call that reports.
pub trait DiagnosticSink {
    /// A call was rejected and nothing was sent
    fn rejected(&mut self, rejection: &Rejection);

    /// A packet was handed to the connection
    fn packet_sent(&mut self, packet: &Packet);
}

/// Default sink: forwards to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn rejected(&mut self, rejection: &Rejection) {
        warn!("{}", rejection);
    }

    fn packet_sent(&mut self, packet: &Packet) {
        debug!("Command package [{}] sent!", packet);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn rejected(&mut self, rejection: &Rejection) {
        (**self).rejected(rejection)
    }

    fn packet_sent(&mut self, packet: &Packet) {
        (**self).packet_sent(packet)
    }
}
