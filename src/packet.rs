// Packet sent from controller -> crawler
//
// Wire layout (single line, no terminator):
//   [header]command[id]<id>[value]<value>

use std::fmt;

use crate::commands::Command;
use crate::config::{ABSENT_VALUE, COMMAND_HEADER, HEADER_LITERAL, ID_LITERAL, VALUE_LITERAL};

/// Command payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i32),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// One encoded command, built fresh for every send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub header: &'static str,
    pub id: u8,
    pub value: Option<Value>,
}

impl Packet {
    pub fn new(command: &Command, value: Option<Value>) -> Self {
        Self {
            header: COMMAND_HEADER,
            id: command.id(),
            value,
        }
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}{}", HEADER_LITERAL, self.header, ID_LITERAL, self.id, VALUE_LITERAL)?;
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => f.write_str(ABSENT_VALUE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Commands;

    #[test]
    fn test_encode_int_value() {
        let commands = Commands::new();
        let packet = Packet::new(commands.drive(), Some(Value::Int(-240)));
        assert_eq!(packet.encode(), "[header]command[id]1[value]-240");
    }

    #[test]
    fn test_encode_text_value_verbatim() {
        let commands = Commands::new();
        let packet = Packet::new(commands.speak(), Some("hello there".into()));
        assert_eq!(packet.encode(), "[header]command[id]3[value]hello there");
    }

    #[test]
    fn test_encode_absent_value() {
        let commands = Commands::new();
        let packet = Packet::new(commands.enable_motor_control(), None);
        assert_eq!(packet.encode(), "[header]command[id]4[value]None");
    }

    #[test]
    fn test_absent_and_text_none_are_distinct_values() {
        let commands = Commands::new();
        let absent = Packet::new(commands.speak(), None);
        let text = Packet::new(commands.speak(), Some("None".into()));
        assert_ne!(absent, text);
    }
}
