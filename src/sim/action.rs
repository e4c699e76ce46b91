//! Timed actions scripted into a play

use serde::Serialize;

use super::play::Play;
use super::player::PlayerRef;

/// Something that happens to the disc at a scripted time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    /// Throw from the current holder to this player
    ThrowTo(PlayerRef),
    /// Hand the disc straight to this player (e.g. a pick-up)
    GiveTo(PlayerRef),
}

impl Action {
    /// Apply the action as if it happened at time `t`
    pub fn apply(&self, play: &mut Play, t: f32) {
        match *self {
            Action::ThrowTo(target) => play.throw_now(target, t),
            Action::GiveTo(player) => play.give_disc_at_time(player, t),
        }
    }
}

/// An action bound to a simulated time, fired at most once per run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledAction {
    pub t: f32,
    pub fired: bool,
    pub action: Action,
}

impl ScheduledAction {
    pub fn new(t: f32, action: Action) -> Self {
        Self {
            t,
            fired: false,
            action,
        }
    }

    /// Not yet fired and due at `now`
    #[inline]
    pub fn is_due(&self, now: f32) -> bool {
        !self.fired && self.t <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_due() {
        let play = Play::new("test");
        let target = play.offence.players[1].id;
        let mut action = ScheduledAction::new(2.0, Action::ThrowTo(target));
        assert!(!action.is_due(1.99));
        assert!(action.is_due(2.0));
        assert!(action.is_due(3.0));
        action.fired = true;
        assert!(!action.is_due(3.0));
    }

    #[test]
    fn test_apply_give() {
        let mut play = Play::new("test");
        play.offence.players[3].start_at(5.0, 6.0);
        let id = play.offence.players[3].id;
        Action::GiveTo(id).apply(&mut play, 0.0);
        assert_eq!(play.disc.holder(), Some(id));
        assert_eq!(play.disc.position(0.0), glam::Vec2::new(5.0, 6.0));
    }
}
