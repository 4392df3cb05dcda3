//! Dice-related types and components
//!
//! This module contains all types related to dice: the Die component, the
//! face table, DiceCount, DiceResults, RollState, and the roll messages.

use std::fmt::Write as _;
use std::time::Duration;

use bevy::prelude::*;

/// One face of a die: the outward normal in die-local space and the value
/// printed on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DieFace {
    pub normal: Vec3,
    pub value: u32,
}

impl DieFace {
    pub const fn new(normal: Vec3, value: u32) -> Self {
        Self { normal, value }
    }
}

/// Face table of the six-sided die. Opposite faces sum to 7.
pub const D6_FACES: [DieFace; 6] = [
    DieFace::new(Vec3::X, 1),
    DieFace::new(Vec3::NEG_X, 6),
    DieFace::new(Vec3::Y, 2),
    DieFace::new(Vec3::NEG_Y, 5),
    DieFace::new(Vec3::Z, 3),
    DieFace::new(Vec3::NEG_Z, 4),
];

/// Component attached to each die entity
#[derive(Component, Clone, Debug)]
pub struct Die {
    /// Position in the throw, starting at 0
    pub index: usize,
    pub faces: Vec<DieFace>,
}

/// How many dice a throw spawns
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiceCount(u8);

impl DiceCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 2;

    /// Counts offered by the selector buttons
    pub const SELECTABLE: [DiceCount; 2] = [DiceCount(1), DiceCount(2)];

    pub fn new(count: u8) -> Result<Self, String> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(format!(
                "Invalid dice count: {}. Choose between {} and {}",
                count,
                Self::MIN,
                Self::MAX
            ))
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        let count: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid dice count: {}", s.trim()))?;
        Self::new(count)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for DiceCount {
    fn default() -> Self {
        Self(1)
    }
}

/// Resource storing the face values of the last settled roll, in throw order
#[derive(Resource, Default, Clone, Debug, PartialEq)]
pub struct DiceResults {
    pub results: Vec<u32>,
}

impl DiceResults {
    pub fn total(&self) -> u32 {
        self.results.iter().sum()
    }

    /// One-line summary, e.g. `Final Results: Dice 1: 4  Dice 2: 6  `
    pub fn summary(&self) -> String {
        let mut line = String::from("Final Results: ");
        for (i, value) in self.results.iter().enumerate() {
            let _ = write!(line, "Dice {}: {}  ", i + 1, value);
        }
        line
    }
}

/// Resource tracking the current roll state
#[derive(Resource, Debug)]
pub struct RollState {
    pub rolling: bool,
    /// Repeating timer gating the settle check
    pub poll_timer: Timer,
    /// Seconds since the throw (for timeout detection)
    pub roll_timer: f32,
}

impl Default for RollState {
    fn default() -> Self {
        Self {
            rolling: false,
            poll_timer: Timer::new(Duration::from_millis(200), TimerMode::Repeating),
            roll_timer: 0.0,
        }
    }
}

impl RollState {
    /// Begin a fresh roll, dropping any settle poll still in flight
    pub fn start(&mut self, poll_interval: Duration) {
        self.rolling = true;
        self.poll_timer = Timer::new(poll_interval, TimerMode::Repeating);
        self.roll_timer = 0.0;
    }

    pub fn finish(&mut self) {
        self.rolling = false;
        self.poll_timer.reset();
    }
}

/// Ask for a new throw. Any dice on the table are cleared first.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ThrowDiceRequest;

/// Fired when a roll has settled (or timed out) and face values are known.
#[derive(Message, Clone, Debug, Default)]
pub struct DiceRollCompleted {
    pub results: Vec<DieRollOutcome>,
    pub timed_out: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct DieRollOutcome {
    pub entity: Entity,
    pub index: usize,
    pub value: u32,
}
