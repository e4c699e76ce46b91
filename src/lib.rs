//! Playmaker - animated set plays for ultimate
//!
//! Core modules:
//! - `sim`: Paths, players, disc possession, and the play clock
//! - `animator`: Shared timer loop driving every running play
//! - `renderer`: Field and play drawing over a 2D surface
//! - `platform`: Timer and canvas bindings for browser/native
//! - `settings`: Field geometry and colours

pub mod animator;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use animator::{Animator, PlayHandle};
pub use error::PlayError;
pub use settings::{FieldGeometry, Palette, Settings};
pub use sim::{Destination, Disc, Path, Play, Player, PlayerRef, Side, Team};

/// Playback constants
pub mod consts {
    /// Animation timer interval; each tick advances plays by this much
    pub const TIME_STEP_MS: u32 = 20;

    /// Players per side
    pub const TEAM_SIZE: usize = 7;

    /// Running speed used when none is given (field units per second)
    pub const DEFAULT_RUN_SPEED: f32 = 7.0;

    /// Drawn radius of players and the disc, in field units
    pub const PLAYER_RADIUS: f32 = 0.5;
    /// Disc is drawn this far right of and above its position
    pub const DISC_OFFSET: f32 = 0.5;
}
