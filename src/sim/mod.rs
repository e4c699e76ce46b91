//! Play simulation
//!
//! Motion, possession, and the play clock. Pure and single-threaded:
//! - Time only moves through `Play::advance`
//! - Actions fire in registration order
//! - No platform dependencies; drawing goes through `renderer::Surface`

pub mod action;
pub mod disc;
pub mod path;
pub mod play;
pub mod player;

pub use action::{Action, ScheduledAction};
pub use disc::{Disc, Possession};
pub use path::{Destination, Path};
pub use play::Play;
pub use player::{Player, PlayerRef, Side, Team};
