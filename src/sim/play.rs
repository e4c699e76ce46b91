//! A scripted set play: two teams, a disc, a clock, and timed actions

use super::action::{Action, ScheduledAction};
use super::disc::Disc;
use super::player::{Player, PlayerRef, Side, Team};
use crate::renderer::{Surface, draw_play};
use crate::settings::Settings;

/// One animated play.
///
/// Paths are authored once through `offence`/`defence`, passes through
/// [`Play::give_disc`] and [`Play::throw_disc`]; the clock then replays them.
pub struct Play {
    id: String,
    pub offence: Team,
    pub defence: Team,
    pub disc: Disc,
    /// Field geometry and colours, fixed for the play's lifetime
    pub settings: Settings,
    current_time: f32,
    is_paused: bool,
    /// Registration order, not time order
    actions: Vec<ScheduledAction>,
    surface: Option<Box<dyn Surface>>,
}

/// Resolve a player through the team that owns it
fn roster<'a>(offence: &'a Team, defence: &'a Team, r: PlayerRef) -> &'a Player {
    match r.side() {
        Side::Offence => &offence.players[r.index()],
        Side::Defence => &defence.players[r.index()],
    }
}

impl Play {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_settings(id, Settings::default())
    }

    pub fn with_settings(id: impl Into<String>, settings: Settings) -> Self {
        Self {
            id: id.into(),
            offence: Team::new(Side::Offence),
            defence: Team::new(Side::Defence),
            disc: Disc::new(),
            settings,
            current_time: 0.0,
            is_paused: false,
            actions: Vec::new(),
            surface: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Simulated time in seconds
    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn actions(&self) -> &[ScheduledAction] {
        &self.actions
    }

    pub fn player(&self, r: PlayerRef) -> &Player {
        roster(&self.offence, &self.defence, r)
    }

    pub fn player_mut(&mut self, r: PlayerRef) -> &mut Player {
        match r.side() {
            Side::Offence => &mut self.offence.players[r.index()],
            Side::Defence => &mut self.defence.players[r.index()],
        }
    }

    /// Attach the surface this play renders to
    pub fn set_surface(&mut self, surface: Box<dyn Surface>) {
        self.surface = Some(surface);
    }

    pub fn clear_surface(&mut self) {
        self.surface = None;
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Give the disc to a player right now
    pub fn give_disc(&mut self, player: PlayerRef) {
        self.give_disc_at_time(player, self.current_time);
    }

    /// Schedule a hand-off at time `t`
    pub fn give_disc_at(&mut self, t: f32, player: PlayerRef) {
        self.actions
            .push(ScheduledAction::new(t, Action::GiveTo(player)));
    }

    /// Schedule a throw to `target` at time `t`
    pub fn throw_disc(&mut self, t: f32, target: PlayerRef) {
        self.actions
            .push(ScheduledAction::new(t, Action::ThrowTo(target)));
    }

    pub(crate) fn give_disc_at_time(&mut self, player: PlayerRef, t: f32) {
        let player = roster(&self.offence, &self.defence, player);
        self.disc.give_to(player, t);
    }

    pub(crate) fn throw_now(&mut self, target: PlayerRef, t: f32) {
        let (offence, defence) = (&self.offence, &self.defence);
        let receiver = roster(offence, defence, target);
        self.disc
            .throw_to(receiver, t, |r| roster(offence, defence, r));
    }

    /// Fire every unfired action whose time has come, in registration order
    pub fn perform_actions(&mut self) {
        let now = self.current_time;
        for i in 0..self.actions.len() {
            if self.actions[i].is_due(now) {
                let (t, action) = (self.actions[i].t, self.actions[i].action);
                action.apply(self, t);
                self.actions[i].fired = true;
            }
        }
    }

    /// Rewind to t = 0 with the disc back in the start player's hands.
    /// Paths are kept as authored.
    pub fn reset(&mut self) {
        self.current_time = 0.0;
        self.is_paused = false;
        match self.disc.start_player() {
            Some(start) => self.give_disc(start),
            None => self.disc.clear(),
        }
        for action in &mut self.actions {
            action.fired = false;
        }
        log::debug!("play '{}' reset", self.id);
    }

    pub fn pause(&mut self) {
        self.is_paused = true;
    }

    pub fn resume(&mut self) {
        self.is_paused = false;
    }

    /// Move the clock forward unless paused
    pub fn advance(&mut self, dt: f32) {
        if !self.is_paused {
            self.current_time += dt;
        }
    }

    /// Render the current frame, then complete any catch that is due.
    /// Without a surface nothing is drawn but catches still settle.
    pub fn draw(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            draw_play(surface.as_mut(), self);
            self.surface = Some(surface);
        }
        self.settle_catch();
    }

    fn settle_catch(&mut self) {
        if !self.disc.catch_due(self.current_time) {
            return;
        }
        if let Some(target) = self.disc.target() {
            log::debug!(
                "play '{}': {} catches at t={:.2}",
                self.id,
                target,
                self.current_time
            );
            self.give_disc(target);
        }
    }

    /// One frame: advance, fire due actions, draw
    pub fn tick(&mut self, dt: f32) {
        self.advance(dt);
        self.perform_actions();
        self.draw();
    }

    /// True once every offensive player has finished their path.
    /// The defence is not waited on.
    pub fn is_done(&self) -> bool {
        self.offence.is_done(self.current_time)
    }

    /// Time at which the offence finishes moving
    pub fn end_time(&self) -> f32 {
        self.offence.end_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, Recorder};
    use crate::sim::disc::Possession;
    use glam::Vec2;

    /// Handler with the disc, cutter clearing deep, throw at t = 2
    fn two_player_play() -> Play {
        let mut play = Play::new("field");
        play.offence.players[0].start_at(20.0, 60.0);
        play.offence.players[1]
            .start_at(20.0, 40.0)
            .wait(2.0)
            .run_at_speed(0.0, -14.0, 7.0);
        let (handler, cutter) = (play.offence.players[0].id, play.offence.players[1].id);
        play.give_disc(handler);
        play.throw_disc(2.0, cutter);
        play
    }

    #[test]
    fn test_new_play() {
        let play = Play::new("field");
        assert_eq!(play.id(), "field");
        assert_eq!(play.current_time(), 0.0);
        assert!(!play.is_paused());
        assert_eq!(play.disc.possession(), Possession::Loose);
        assert!(play.actions().is_empty());
        assert!(!play.has_surface());
    }

    #[test]
    fn test_give_disc_sets_start_player() {
        let play = two_player_play();
        let handler = play.offence.players[0].id;
        assert_eq!(play.disc.holder(), Some(handler));
        assert_eq!(play.disc.start_player(), Some(handler));
        assert_eq!(play.disc.position(0.0), Vec2::new(20.0, 60.0));
    }

    #[test]
    fn test_throw_fires_when_due() {
        let mut play = two_player_play();
        let cutter = play.offence.players[1].id;

        play.advance(1.5);
        play.perform_actions();
        assert!(!play.disc.in_flight());
        assert!(!play.actions()[0].fired);

        play.advance(1.0);
        play.perform_actions();
        assert!(play.disc.in_flight());
        assert_eq!(play.disc.target(), Some(cutter));
        assert!(play.actions()[0].fired);
        // Thrown from where the handler stood at t = 2
        assert_eq!(*play.disc.path().first(), crate::sim::Destination::new(20.0, 60.0, 2.0));
    }

    #[test]
    fn test_actions_fire_once() {
        let mut play = Play::new("field");
        let (a, b) = (play.offence.players[0].id, play.offence.players[1].id);
        play.give_disc(a);
        play.give_disc_at(1.0, b);
        play.advance(1.0);
        play.perform_actions();
        assert_eq!(play.disc.holder(), Some(b));

        play.give_disc(a);
        play.advance(1.0);
        play.perform_actions();
        assert_eq!(play.disc.holder(), Some(a));
    }

    #[test]
    fn test_actions_fire_in_registration_order() {
        let mut play = Play::new("field");
        let (a, b, c) = (
            play.offence.players[0].id,
            play.offence.players[1].id,
            play.offence.players[2].id,
        );
        // Registered later but due earlier; both fire in the same pass
        play.give_disc_at(1.0, b);
        play.give_disc_at(0.5, c);
        play.give_disc(a);
        play.advance(1.0);
        play.perform_actions();
        assert!(play.actions().iter().all(|a| a.fired));
        assert_eq!(play.disc.holder(), Some(c));
    }

    #[test]
    fn test_catch_completes_on_draw() {
        let mut play = two_player_play();
        let cutter = play.offence.players[1].id;
        play.advance(2.5);
        play.perform_actions();
        // Cutter arrives at t = 4
        play.draw();
        assert!(play.disc.in_flight());

        play.advance(1.6);
        play.draw();
        assert!(!play.disc.in_flight());
        assert_eq!(play.disc.holder(), Some(cutter));
        assert_eq!(play.disc.position(play.current_time()), Vec2::new(20.0, 26.0));
    }

    #[test]
    fn test_reset_rewinds_clock_and_actions() {
        let mut play = two_player_play();
        let (handler, cutter) = (play.offence.players[0].id, play.offence.players[1].id);
        play.advance(2.5);
        play.perform_actions();
        play.pause();

        play.reset();
        assert_eq!(play.current_time(), 0.0);
        assert!(!play.is_paused());
        assert_eq!(play.disc.holder(), Some(handler));
        assert_eq!(play.disc.start_player(), Some(handler));
        assert!(!play.actions()[0].fired);

        play.advance(2.5);
        play.perform_actions();
        assert_eq!(play.disc.target(), Some(cutter));
    }

    #[test]
    fn test_reset_without_start_player_leaves_disc_loose() {
        let mut play = Play::new("field");
        play.advance(1.0);
        play.give_disc(play.offence.players[0].id);
        play.reset();
        assert_eq!(play.disc.possession(), Possession::Loose);
    }

    #[test]
    fn test_pause_freezes_clock() {
        let mut play = two_player_play();
        play.tick(0.5);
        play.pause();
        play.tick(0.5);
        play.tick(0.5);
        assert_eq!(play.current_time(), 0.5);
        play.resume();
        play.tick(0.5);
        assert_eq!(play.current_time(), 1.0);
    }

    #[test]
    fn test_is_done_checks_offence_only() {
        let mut play = two_player_play();
        play.defence.players[0].wait(100.0);
        assert_eq!(play.end_time(), 4.0);
        play.advance(4.0);
        assert!(!play.is_done());
        play.advance(0.1);
        assert!(play.is_done());
    }

    #[test]
    fn test_player_lookup() {
        let mut play = Play::new("field");
        let d = play.defence.players[6].id;
        play.player_mut(d).start_at(1.0, 2.0);
        assert_eq!(play.player(d).path.position(0.0), Vec2::new(1.0, 2.0));
        assert_eq!(play.player(d).id.side(), Side::Defence);
    }

    #[test]
    fn test_draw_uses_surface() {
        let mut play = two_player_play();
        let recorder = Recorder::new();
        play.set_surface(Box::new(recorder.clone()));
        play.tick(0.02);
        let commands = recorder.take();
        assert!(matches!(commands.first(), Some(DrawCommand::SetSize { .. })));
        assert!(commands.iter().any(|c| matches!(c, DrawCommand::Arc { .. })));
    }
}
