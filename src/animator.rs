//! Shared animation loop for running plays
//!
//! One timer drives every registered play. The timer is started by the first
//! registration and cancelled when the last play leaves, so an idle animator
//! costs nothing. All access is single-threaded: the host calls [`Animator::tick`]
//! from its timer callback and nothing else runs during a tick.

use std::cell::RefCell;
use std::rc::Rc;

use crate::consts::TIME_STEP_MS;
use crate::platform::{Timer, TimerHandle};
use crate::sim::Play;

/// A play shared between its author and the animator
pub type PlayHandle = Rc<RefCell<Play>>;

/// Registry of running plays plus the one shared timer
pub struct Animator<T: Timer> {
    active: Vec<PlayHandle>,
    timer: T,
    handle: Option<TimerHandle>,
    interval_ms: u32,
}

impl<T: Timer> Animator<T> {
    pub fn new(timer: T) -> Self {
        Self::with_interval(timer, TIME_STEP_MS)
    }

    pub fn with_interval(timer: T, interval_ms: u32) -> Self {
        Self {
            active: Vec::new(),
            timer,
            handle: None,
            interval_ms,
        }
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// True while the shared timer is scheduled
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_active(&self, play: &PlayHandle) -> bool {
        self.active.iter().any(|p| Rc::ptr_eq(p, play))
    }

    /// Unpause a play and add it to the loop. Already-running plays are
    /// unpaused but not added twice.
    pub fn start_game(&mut self, play: &PlayHandle) {
        play.borrow_mut().resume();

        if self.is_active(play) {
            log::debug!("play '{}' already running", play.borrow().id());
            return;
        }
        self.active.push(Rc::clone(play));
        log::info!("Started play '{}'", play.borrow().id());

        if self.handle.is_none() {
            self.handle = self.timer.schedule(self.interval_ms);
            match self.handle {
                Some(_) => log::info!("Animation timer started ({} ms)", self.interval_ms),
                None => log::warn!("Animation timer could not be scheduled"),
            }
        }
    }

    /// Remove a play from the loop. Returns whether it was running.
    pub fn stop_game(&mut self, play: &PlayHandle) -> bool {
        let before = self.active.len();
        self.active.retain(|p| !Rc::ptr_eq(p, play));
        let removed = self.active.len() != before;
        if !removed {
            log::debug!("stop ignored, play not running");
        }

        if self.active.is_empty() {
            self.stop_timer();
        }
        removed
    }

    /// One frame for every running play, then drop the ones that finished
    pub fn tick(&mut self) {
        let dt = self.interval_ms as f32 / 1000.0;

        for play in &self.active {
            play.borrow_mut().tick(dt);
        }

        // Collected first; stopping mutates the registry
        let done: Vec<PlayHandle> = self
            .active
            .iter()
            .filter(|p| p.borrow().is_done())
            .cloned()
            .collect();
        for play in done {
            log::info!("Play '{}' finished", play.borrow().id());
            self.stop_game(&play);
        }
    }

    /// Drop every play and cancel the timer
    pub fn shutdown(&mut self) {
        self.active.clear();
        self.stop_timer();
    }

    fn stop_timer(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.timer.cancel(handle);
            log::info!("Animation timer stopped");
        }
    }
}

impl<T: Timer> Drop for Animator<T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
