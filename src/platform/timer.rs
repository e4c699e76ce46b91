//! Periodic timer abstraction
//!
//! The animator owns exactly one outstanding schedule. What the timer calls
//! back into is wired by the host when the timer is built; the trait only
//! starts and stops the repetition.

/// Opaque id for a running schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

/// A host facility that fires a callback every `interval_ms`
pub trait Timer {
    /// Start repeating. `None` if the host refused.
    fn schedule(&mut self, interval_ms: u32) -> Option<TimerHandle>;
    fn cancel(&mut self, handle: TimerHandle);
}

/// Timer driven by hand: the host calls `Animator::tick` itself.
///
/// Keeps a log of schedules and cancellations for inspection.
#[derive(Debug, Default)]
pub struct ManualTimer {
    next_id: i32,
    active: Option<TimerHandle>,
    interval_ms: Option<u32>,
    pub scheduled: u32,
    pub cancelled: u32,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The schedule currently running, if any
    pub fn active(&self) -> Option<TimerHandle> {
        self.active
    }

    /// Interval of the running schedule
    pub fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }
}

impl Timer for ManualTimer {
    fn schedule(&mut self, interval_ms: u32) -> Option<TimerHandle> {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.active = Some(handle);
        self.interval_ms = Some(interval_ms);
        self.scheduled += 1;
        Some(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.active == Some(handle) {
            self.active = None;
            self.interval_ms = None;
        }
        self.cancelled += 1;
    }
}
