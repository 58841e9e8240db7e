// Fixed catalog of commands understood by the crawler firmware
//
// Ids are part of the wire format and must never be reassigned.

use std::fmt;

/// A remote action with a stable id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command {
    id: u8,
    name: &'static str,
    value_required: bool,
}

impl Command {
    pub const fn new(id: u8, name: &'static str, value_required: bool) -> Self {
        Self {
            id,
            name,
            value_required,
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True when the command is meaningless without a payload
    pub fn value_required(&self) -> bool {
        self.value_required
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id {})", self.name, self.id)
    }
}

/// Catalog entries
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Drive = 1,
    Steer = 2,
    Speak = 3,
    EnableMotorControl = 4,
    DisableMotorControl = 5,
}

impl CommandKind {
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Drive,
        CommandKind::Steer,
        CommandKind::Speak,
        CommandKind::EnableMotorControl,
        CommandKind::DisableMotorControl,
    ];

    const fn definition(self) -> Command {
        match self {
            CommandKind::Drive => Command::new(self as u8, "drive", true),
            CommandKind::Steer => Command::new(self as u8, "steer", true),
            CommandKind::Speak => Command::new(self as u8, "speak", true),
            CommandKind::EnableMotorControl => {
                Command::new(self as u8, "enable_motor_control", false)
            }
            CommandKind::DisableMotorControl => {
                Command::new(self as u8, "disable_motor_control", false)
            }
        }
    }
}

/// Read-only command registry, built once per controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commands {
    entries: [Command; 5],
}

impl Commands {
    pub fn new() -> Self {
        Self {
            entries: CommandKind::ALL.map(CommandKind::definition),
        }
    }

    pub fn command(&self, kind: CommandKind) -> &Command {
        // entries follow CommandKind::ALL, ids start at 1
        &self.entries[kind as usize - 1]
    }

    pub fn drive(&self) -> &Command {
        self.command(CommandKind::Drive)
    }

    pub fn steer(&self) -> &Command {
        self.command(CommandKind::Steer)
    }

    pub fn speak(&self) -> &Command {
        self.command(CommandKind::Speak)
    }

    pub fn enable_motor_control(&self) -> &Command {
        self.command(CommandKind::EnableMotorControl)
    }

    pub fn disable_motor_control(&self) -> &Command {
        self.command(CommandKind::DisableMotorControl)
    }

    /// Look up a command by its wire id
    pub fn get(&self, id: u8) -> Option<&Command> {
        self.entries.iter().find(|c| c.id == id)
    }

    /// Look up a command by its diagnostic name
    pub fn by_name(&self, name: &str) -> Option<&Command> {
        self.entries.iter().find(|c| c.name == name)
    }

    /// True only for commands that are entries of this registry
    pub fn contains(&self, command: &Command) -> bool {
        self.get(command.id) == Some(command)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.entries.iter()
    }
}

impl Default for Commands {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let commands = Commands::new();
        let ids: HashSet<u8> = commands.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_fixed_catalog() {
        let commands = Commands::new();
        assert_eq!(commands.drive().id(), 1);
        assert_eq!(commands.steer().id(), 2);
        assert_eq!(commands.speak().id(), 3);
        assert_eq!(commands.enable_motor_control().id(), 4);
        assert_eq!(commands.disable_motor_control().id(), 5);
        assert_eq!(commands.enable_motor_control().name(), "enable_motor_control");
    }

    #[test]
    fn test_value_required_flags() {
        let commands = Commands::new();
        assert!(commands.drive().value_required());
        assert!(commands.steer().value_required());
        assert!(commands.speak().value_required());
        assert!(!commands.enable_motor_control().value_required());
        assert!(!commands.disable_motor_control().value_required());
    }

    #[test]
    fn test_rebuilt_registry_keeps_ids() {
        assert_eq!(Commands::new(), Commands::new());
    }

    #[test]
    fn test_lookup() {
        let commands = Commands::new();
        assert_eq!(commands.by_name("steer"), Some(commands.steer()));
        assert_eq!(commands.get(3), Some(commands.speak()));
        assert!(commands.by_name("fly").is_none());
        assert!(commands.get(0).is_none());
    }

    #[test]
    fn test_contains_rejects_foreign_commands() {
        let commands = Commands::new();
        assert!(commands.contains(commands.drive()));
        // unknown id
        assert!(!commands.contains(&Command::new(42, "jump", false)));
        // known id, different definition
        assert!(!commands.contains(&Command::new(1, "drive", false)));
    }
}
