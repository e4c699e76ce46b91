//! Players, teams, and path authoring

use serde::{Deserialize, Serialize};

use super::path::{Destination, Path};
use crate::consts::{DEFAULT_RUN_SPEED, TEAM_SIZE};

/// Which team a player belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Offence,
    Defence,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Offence => "offence",
            Side::Defence => "defence",
        }
    }
}

/// Identifies one player: a side plus a roster slot.
///
/// Only handed out by [`Team`], so the index is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerRef {
    side: Side,
    index: usize,
}

impl PlayerRef {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.side.as_str(), self.index)
    }
}

/// A player and the path they will run
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: PlayerRef,
    pub path: Path,
}

impl Player {
    fn new(side: Side, index: usize) -> Self {
        Self {
            id: PlayerRef { side, index },
            path: Path::new(),
        }
    }

    /// Set the starting location; the start time is unchanged
    pub fn start_at(&mut self, x: f32, y: f32) -> &mut Self {
        let first = *self.path.first();
        self.path.set_start(Destination::new(x, y, first.t));
        self
    }

    /// Stand still for `seconds`
    pub fn wait(&mut self, seconds: f32) -> &mut Self {
        let last = *self.path.last();
        self.path
            .add_destination(Destination::new(last.x, last.y, last.t + seconds));
        self
    }

    /// Run `(dx, dy)` from the last destination at the default speed
    pub fn run(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.run_at_speed(dx, dy, DEFAULT_RUN_SPEED)
    }

    /// Run `(dx, dy)` from the last destination at `speed` units/second.
    /// Arrival time is derived from the distance covered.
    pub fn run_at_speed(&mut self, dx: f32, dy: f32, speed: f32) -> &mut Self {
        let last = *self.path.last();
        let dist = (dx * dx + dy * dy).sqrt();
        self.path.add_destination(Destination::new(
            last.x + dx,
            last.y + dy,
            last.t + dist / speed,
        ));
        self
    }
}

/// The seven players on one side
#[derive(Debug, Clone, Serialize)]
pub struct Team {
    pub side: Side,
    pub players: [Player; TEAM_SIZE],
}

impl Team {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            players: std::array::from_fn(|i| Player::new(side, i)),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// True once every player has finished their path
    pub fn is_done(&self, t: f32) -> bool {
        self.players.iter().all(|p| p.path.is_done(t))
    }

    /// Latest final-destination time across the roster
    pub fn end_time(&self) -> f32 {
        self.players
            .iter()
            .map(|p| p.path.end_time())
            .fold(0.0, f32::max)
    }
}
