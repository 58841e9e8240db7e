// Keyboard teleop: W/S drive, A/D steer, R/F speed, E/X motor control, Q quit
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::time::{Duration, Instant};
use tracing::info;

use crate::config::{TELEOP_IDLE_TIMEOUT_MS, TELEOP_POLL_MS};
use crate::connection::Connection;
use crate::controller::CrawlerController;
use crate::diagnostics::DiagnosticSink;

const SPEEDS: [i32; 3] = [25, 50, 100]; // percent
const SPEED_LABELS: [&str; 3] = ["LOW", "MED", "HIGH"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    EnableMotors,
    DisableMotors,
    Quit,
}

/// Key handling and idle stop, independent of the terminal
pub struct Teleop {
    speed_idx: usize,
    drive: i32,
    steer: i32,
    last_movement_input: Instant,
    sent_drive: i32,
    sent_steer: i32,
}

impl Teleop {
    pub fn new(now: Instant) -> Self {
        Self {
            speed_idx: 0,
            drive: 0,
            steer: 0,
            last_movement_input: now,
            sent_drive: 0,
            sent_steer: 0,
        }
    }

    pub fn speed(&self) -> i32 {
        SPEEDS[self.speed_idx]
    }

    pub fn on_key(&mut self, code: KeyCode, now: Instant) -> KeyAction {
        let speed = self.speed();
        match code {
            KeyCode::Char('w') => self.drive = speed,
            KeyCode::Char('s') => self.drive = -speed,
            KeyCode::Char('a') => self.steer = -speed,
            KeyCode::Char('d') => self.steer = speed,

            KeyCode::Char('r') => {
                self.speed_idx = (self.speed_idx + 1).min(SPEEDS.len() - 1);
                info!("Speed: {}", SPEED_LABELS[self.speed_idx]);
                return KeyAction::Continue;
            }
            KeyCode::Char('f') => {
                self.speed_idx = self.speed_idx.saturating_sub(1);
                info!("Speed: {}", SPEED_LABELS[self.speed_idx]);
                return KeyAction::Continue;
            }

            KeyCode::Char('e') => return KeyAction::EnableMotors,
            KeyCode::Char('x') => return KeyAction::DisableMotors,
            KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,

            _ => return KeyAction::Continue,
        }
        self.last_movement_input = now;
        KeyAction::Continue
    }

    /// Drive and steer values that changed since the last call.
    /// Movement falls back to zero once input has been idle too long.
    pub fn pending(&mut self, now: Instant) -> (Option<i32>, Option<i32>) {
        if now.duration_since(self.last_movement_input)
            > Duration::from_millis(TELEOP_IDLE_TIMEOUT_MS)
        {
            self.drive = 0;
            self.steer = 0;
        }

        let drive = (self.drive != self.sent_drive).then_some(self.drive);
        let steer = (self.steer != self.sent_steer).then_some(self.steer);
        self.sent_drive = self.drive;
        self.sent_steer = self.steer;
        (drive, steer)
    }
}

pub fn run<C: Connection, S: DiagnosticSink>(
    controller: &mut CrawlerController<C, S>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Controls: W/S=drive, A/D=steer, R/F=speed, E/X=motors on/off, Q=quit");
    info!("Speed: {}", SPEED_LABELS[0]);

    enable_raw_mode()?;
    let result = run_teleop(controller);
    disable_raw_mode()?;

    // leave the crawler stopped whatever happened in the loop
    controller.drive(0)?;
    controller.steer(0)?;
    controller.disable_motor_control()?;
    result
}

fn run_teleop<C: Connection, S: DiagnosticSink>(
    controller: &mut CrawlerController<C, S>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut teleop = Teleop::new(Instant::now());

    loop {
        if event::poll(Duration::from_millis(TELEOP_POLL_MS))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                let pressed = kind == KeyEventKind::Press || kind == KeyEventKind::Repeat;
                if pressed {
                    match teleop.on_key(code, Instant::now()) {
                        KeyAction::Continue => {}
                        KeyAction::EnableMotors => {
                            controller.enable_motor_control()?;
                        }
                        KeyAction::DisableMotors => {
                            controller.disable_motor_control()?;
                        }
                        KeyAction::Quit => break,
                    }
                }
            }
        }

        let (drive, steer) = teleop.pending(Instant::now());
        if let Some(speed) = drive {
            controller.drive(speed)?;
        }
        if let Some(steering) = steer {
            controller.steer(steering)?;
        }
    }

    Ok(())
}
