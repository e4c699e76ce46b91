//! The disc and its possession state
//!
//! The disc is either loose (before anyone is given it), held by a player,
//! or in flight toward a receiver. While held its path is a single point
//! rewritten on every hand-off; a throw appends the receiver's next
//! destination so the disc flies in a straight line to where they will be.

use glam::Vec2;
use serde::Serialize;

use super::path::{Destination, Path};
use super::player::{Player, PlayerRef};

/// Who has the disc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Possession {
    /// Not yet given to anyone
    #[default]
    Loose,
    Held(PlayerRef),
    InFlight(PlayerRef),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Disc {
    path: Path,
    possession: Possession,
    /// Player holding the disc at t = 0; restored on reset
    start_player: Option<PlayerRef>,
}

impl Disc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn possession(&self) -> Possession {
        self.possession
    }

    pub fn holder(&self) -> Option<PlayerRef> {
        match self.possession {
            Possession::Held(p) => Some(p),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<PlayerRef> {
        match self.possession {
            Possession::InFlight(p) => Some(p),
            _ => None,
        }
    }

    pub fn start_player(&self) -> Option<PlayerRef> {
        self.start_player
    }

    pub fn in_flight(&self) -> bool {
        matches!(self.possession, Possession::InFlight(_))
    }

    pub fn position(&self, t: f32) -> Vec2 {
        self.path.position(t)
    }

    /// Put the disc in `player`'s hands at time `t`.
    ///
    /// Any remaining flight path is discarded. The first player given the
    /// disc at t = 0 becomes the start player; later gives at t = 0 don't
    /// replace them.
    pub fn give_to(&mut self, player: &Player, t: f32) {
        let pos = player.path.position(t);
        self.possession = Possession::Held(player.id);
        self.path.set_start(Destination::new(pos.x, pos.y, t));
        self.path.truncate_to_start();

        if t == 0.0 && self.start_player.is_none() {
            self.start_player = Some(player.id);
        }
    }

    /// Throw from the current holder to `receiver` at time `t`.
    ///
    /// Ignored unless someone holds the disc. `lookup` resolves the holder.
    pub fn throw_to<'a, F>(&mut self, receiver: &Player, t: f32, lookup: F)
    where
        F: FnOnce(PlayerRef) -> &'a Player,
    {
        let Some(holder) = self.holder() else {
            log::debug!("throw to {} ignored, disc not held", receiver.id);
            return;
        };

        let from = lookup(holder).path.position(t);
        let to = receiver.path.destination_after(t);
        self.path.set_start(Destination::new(from.x, from.y, t));
        self.path.truncate_to_start();
        self.path.add_destination(to);
        self.possession = Possession::InFlight(receiver.id);
        log::debug!("{} throws to {} at t={:.2}, arriving t={:.2}", holder, receiver.id, t, to.t);
    }

    /// True when a throw has reached the end of its flight path at `t`
    pub fn catch_due(&self, t: f32) -> bool {
        self.in_flight() && self.path.is_done(t)
    }

    /// Return to the untouched state (loose at the origin, no start player)
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
