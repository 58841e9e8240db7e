// High-level crawler controller
//
// Validates caller input, scales percentages to the motor driver's native
// range and sends one packet per accepted call. Invalid calls are reported
// to the diagnostic sink and returned as Outcome::Rejected; they never
// reach the connection.

use crate::commands::{Command, Commands};
use crate::config::{NATIVE_SCALE, PERCENT_MAX, PERCENT_MIN};
use crate::connection::{Connection, ConnectionError};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::packet::{Packet, Value};

/// Why a call was dropped without sending anything
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Invalid command argument '{name}': registered command expected!")]
    InvalidCommand { name: String },

    #[error("Command {command} needs a value specified to be sent! No value provided!")]
    MissingValue { command: &'static str },

    #[error(
        "Invalid {parameter} value {value} specified in {operation}! Integer in range [{min}, {max}] expected!"
    )]
    OutOfRange {
        operation: &'static str,
        parameter: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// Result of a controller call that did not hit a transport error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sent(Packet),
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Outcome::Sent(_))
    }

    pub fn packet(&self) -> Option<&Packet> {
        match self {
            Outcome::Sent(packet) => Some(packet),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Sent(_) => None,
            Outcome::Rejected(rejection) => Some(rejection),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConnectionError>;

/// Percentage -> native actuation value, truncated toward zero
fn scale(percent: i32, factor: f64) -> i32 {
    (percent as f64 * factor) as i32
}

fn check_range(
    operation: &'static str,
    parameter: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> std::result::Result<i32, Rejection> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(Rejection::OutOfRange {
            operation,
            parameter,
            value,
            min,
            max,
        })
    }
}

pub struct CrawlerController<C, S = TracingSink> {
    connection: C,
    commands: Commands,
    sink: S,
}

impl<C: Connection> CrawlerController<C> {
    /// Controller reporting through `tracing`
    pub fn new(connection: C) -> Self {
        Self::with_sink(connection, TracingSink)
    }
}

impl<C: Connection, S: DiagnosticSink> CrawlerController<C, S> {
    pub fn with_sink(connection: C, sink: S) -> Self {
        Self {
            connection,
            commands: Commands::new(),
            sink,
        }
    }

    pub fn commands(&self) -> &Commands {
        &self.commands
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Open the link to the crawler. Safe to call again on an open link.
    pub fn connect_to_crawler(&mut self) -> Result<()> {
        self.connection.connect_to_host()
    }

    fn reject(&mut self, rejection: Rejection) -> Result<Outcome> {
        self.sink.rejected(&rejection);
        Ok(Outcome::Rejected(rejection))
    }

    /// Send a registry command with an optional value
    pub fn send_command(&mut self, command: &Command, value: Option<Value>) -> Result<Outcome> {
        if !self.commands.contains(command) {
            return self.reject(Rejection::InvalidCommand {
                name: command.name().to_string(),
            });
        }

        if command.value_required() && value.is_none() {
            return self.reject(Rejection::MissingValue {
                command: command.name(),
            });
        }

        let packet = Packet::new(command, value);
        self.connection.send_package(&packet.encode())?;
        self.sink.packet_sent(&packet);

        Ok(Outcome::Sent(packet))
    }

    /// Send a command looked up by its registry name
    pub fn send_named(&mut self, name: &str, value: Option<Value>) -> Result<Outcome> {
        match self.commands.by_name(name).copied() {
            Some(command) => self.send_command(&command, value),
            None => self.reject(Rejection::InvalidCommand {
                name: name.to_string(),
            }),
        }
    }

    fn send_scaled(
        &mut self,
        command: Command,
        checked: std::result::Result<i32, Rejection>,
        factor: f64,
    ) -> Result<Outcome> {
        match checked {
            Ok(percent) => self.send_command(&command, Some(Value::Int(scale(percent, factor)))),
            Err(rejection) => self.reject(rejection),
        }
    }

    /// Drive forward, `speed` in [0, 100] percent
    pub fn drive_forward(&mut self, speed: i32) -> Result<Outcome> {
        let checked = check_range("drive_forward", "speed", speed, 0, PERCENT_MAX);
        let drive = *self.commands.drive();
        self.send_scaled(drive, checked, NATIVE_SCALE)
    }

    /// Drive backward, `speed` in [0, 100] percent
    pub fn drive_backward(&mut self, speed: i32) -> Result<Outcome> {
        let checked = check_range("drive_backward", "speed", speed, 0, PERCENT_MAX);
        let drive = *self.commands.drive();
        self.send_scaled(drive, checked, -NATIVE_SCALE)
    }

    /// Drive with signed `speed` in [-100, 100] percent, positive is forward
    pub fn drive(&mut self, speed: i32) -> Result<Outcome> {
        let checked = check_range("drive", "speed", speed, PERCENT_MIN, PERCENT_MAX);
        let drive = *self.commands.drive();
        self.send_scaled(drive, checked, NATIVE_SCALE)
    }

    /// Steer with `steering` in [-100, 100] percent, positive is right
    pub fn steer(&mut self, steering: i32) -> Result<Outcome> {
        let checked = check_range("steer", "steering", steering, PERCENT_MIN, PERCENT_MAX);
        let steer = *self.commands.steer();
        self.send_scaled(steer, checked, NATIVE_SCALE)
    }

    /// Have the crawler say `speech`
    pub fn speak(&mut self, speech: Option<&str>) -> Result<Outcome> {
        let speak = *self.commands.speak();
        self.send_command(&speak, speech.map(Value::from))
    }

    pub fn enable_motor_control(&mut self) -> Result<Outcome> {
        let enable = *self.commands.enable_motor_control();
        self.send_command(&enable, None)
    }

    pub fn disable_motor_control(&mut self) -> Result<Outcome> {
        let disable = *self.commands.disable_motor_control();
        self.send_command(&disable, None)
    }
}
