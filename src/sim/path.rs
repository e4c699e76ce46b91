//! Time-parameterized waypoint paths
//!
//! A path is a list of destinations, each a position to occupy at a given
//! simulated time. Positions between destinations are linearly interpolated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::PlayError;

/// A position on the field to be occupied at time `t` (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Destination {
    pub x: f32,
    pub y: f32,
    pub t: f32,
}

impl Destination {
    pub fn new(x: f32, y: f32, t: f32) -> Self {
        Self { x, y, t }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Ordered waypoints for one actor.
///
/// The first destination is stored apart from the rest so a path always has
/// at least one entry. Destinations must be appended in non-decreasing time
/// order; the path never sorts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Destination>", into = "Vec<Destination>")]
pub struct Path {
    start: Destination,
    rest: Vec<Destination>,
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl Path {
    /// A stationary path at the origin, starting at t = 0
    pub fn new() -> Self {
        Self::starting_at(Destination::default())
    }

    pub fn starting_at(start: Destination) -> Self {
        Self {
            start,
            rest: Vec::new(),
        }
    }

    /// Build a path from a complete waypoint list
    pub fn from_destinations(destinations: Vec<Destination>) -> Result<Self, PlayError> {
        let mut iter = destinations.into_iter();
        let start = iter.next().ok_or(PlayError::EmptyPath)?;
        Ok(Self {
            start,
            rest: iter.collect(),
        })
    }

    /// Iterate destinations in stored order
    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        std::iter::once(&self.start).chain(self.rest.iter())
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> &Destination {
        &self.start
    }

    pub fn last(&self) -> &Destination {
        self.rest.last().unwrap_or(&self.start)
    }

    /// Time of the final destination
    pub fn end_time(&self) -> f32 {
        self.last().t
    }

    pub fn add_destination(&mut self, d: Destination) {
        self.rest.push(d);
    }

    /// Interpolated position at time `t`
    pub fn position(&self, t: f32) -> Vec2 {
        if self.rest.is_empty() {
            return self.start.pos();
        }

        let mut start = None;
        let mut end = None;
        for d in self.iter() {
            if d.t == t {
                // Exact hit; also avoids dividing by a zero-length leg
                return d.pos();
            } else if d.t < t {
                start = Some(d);
            } else {
                end = Some(d);
                break;
            }
        }

        match (start, end) {
            (Some(s), Some(e)) => {
                let fraction = (t - s.t) / (e.t - s.t);
                s.pos() + fraction * (e.pos() - s.pos())
            }
            // Past the last destination: the actor has stopped
            (Some(s), None) => s.pos(),
            // Before the path starts: hold the starting position
            (None, _) => self.start.pos(),
        }
    }

    /// First destination strictly after `t`, or the final destination
    pub fn destination_after(&self, t: f32) -> Destination {
        self.iter()
            .find(|d| d.t > t)
            .copied()
            .unwrap_or(*self.last())
    }

    /// True once `t` is past the final destination
    pub fn is_done(&self, t: f32) -> bool {
        self.last().t < t
    }

    /// Replace the first destination, keeping the rest
    pub(crate) fn set_start(&mut self, d: Destination) {
        self.start = d;
    }

    /// Drop everything after the first destination
    pub(crate) fn truncate_to_start(&mut self) {
        self.rest.clear();
    }
}

impl TryFrom<Vec<Destination>> for Path {
    type Error = PlayError;

    fn try_from(destinations: Vec<Destination>) -> Result<Self, Self::Error> {
        Self::from_destinations(destinations)
    }
}

impl From<Path> for Vec<Destination> {
    fn from(path: Path) -> Self {
        let mut out = Vec::with_capacity(path.len());
        out.push(path.start);
        out.extend(path.rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_path() -> Path {
        let mut path = Path::starting_at(Destination::new(0.0, 0.0, 0.0));
        path.add_destination(Destination::new(7.0, 0.0, 1.0));
        path.add_destination(Destination::new(7.0, 0.0, 2.0));
        path.add_destination(Destination::new(7.0, 10.0, 4.0));
        path
    }

    #[test]
    fn test_single_destination_is_stationary() {
        let path = Path::starting_at(Destination::new(3.0, 4.0, 0.0));
        assert_eq!(path.position(0.0), Vec2::new(3.0, 4.0));
        assert_eq!(path.position(100.0), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_interpolates_between_destinations() {
        let path = sample_path();
        assert_eq!(path.position(0.5), Vec2::new(3.5, 0.0));
        assert_eq!(path.position(1.5), Vec2::new(7.0, 0.0));
        assert_eq!(path.position(3.0), Vec2::new(7.0, 5.0));
    }

    #[test]
    fn test_exact_time_returns_destination() {
        let mut path = sample_path();
        // Two destinations sharing a time must not divide by zero
        path.add_destination(Destination::new(20.0, 20.0, 4.0));
        let p = path.position(4.0);
        assert_eq!(p, Vec2::new(7.0, 10.0));
        assert!(p.is_finite());
    }

    #[test]
    fn test_stops_after_last_destination() {
        let path = sample_path();
        assert_eq!(path.position(4.01), Vec2::new(7.0, 10.0));
        assert_eq!(path.position(1000.0), Vec2::new(7.0, 10.0));
    }

    #[test]
    fn test_destination_after() {
        let path = sample_path();
        assert_eq!(path.destination_after(0.0), Destination::new(7.0, 0.0, 1.0));
        assert_eq!(path.destination_after(1.0), Destination::new(7.0, 0.0, 2.0));
        assert_eq!(path.destination_after(2.5), Destination::new(7.0, 10.0, 4.0));
        // Nothing later: the final destination
        assert_eq!(path.destination_after(9.0), Destination::new(7.0, 10.0, 4.0));
    }

    #[test]
    fn test_is_done() {
        let path = sample_path();
        assert!(!path.is_done(0.0));
        assert!(!path.is_done(4.0));
        assert!(path.is_done(4.001));
    }

    #[test]
    fn test_from_destinations_rejects_empty() {
        assert!(matches!(
            Path::from_destinations(Vec::new()),
            Err(PlayError::EmptyPath)
        ));
        let path = Path::from_destinations(vec![Destination::new(1.0, 2.0, 0.0)]).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.last(), path.first());
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<Path>("[]").is_err());
        let path: Path = serde_json::from_str(r#"[{"x":1.0,"y":2.0,"t":0.0},{"x":3.0,"y":2.0,"t":1.0}]"#)
            .unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.position(0.5), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_truncate_keeps_start() {
        let mut path = sample_path();
        path.set_start(Destination::new(1.0, 1.0, 3.0));
        path.truncate_to_start();
        assert_eq!(path.len(), 1);
        assert_eq!(*path.last(), Destination::new(1.0, 1.0, 3.0));
    }

    /// Paths built from relative legs, so times are non-decreasing
    fn arb_path() -> impl Strategy<Value = Path> {
        prop::collection::vec((-20.0f32..20.0, -20.0f32..20.0, 0.1f32..5.0), 1..6).prop_map(
            |legs| {
                let mut path = Path::new();
                for (dx, dy, dt) in legs {
                    let last = *path.last();
                    path.add_destination(Destination::new(last.x + dx, last.y + dy, last.t + dt));
                }
                path
            },
        )
    }

    proptest! {
        #[test]
        fn prop_matches_waypoints_exactly(path in arb_path()) {
            for d in path.iter() {
                prop_assert_eq!(path.position(d.t), d.pos());
            }
        }

        #[test]
        fn prop_stationary_after_end(path in arb_path(), extra in 0.001f32..100.0) {
            let last = *path.last();
            prop_assert_eq!(path.position(last.t + extra), last.pos());
        }

        #[test]
        fn prop_is_done_monotonic(path in arb_path(), t in 0.0f32..40.0, dt in 0.0f32..40.0) {
            if path.is_done(t) {
                prop_assert!(path.is_done(t + dt));
            }
        }

        #[test]
        fn prop_position_is_continuous(path in arb_path(), t in 0.0f32..30.0) {
            // Legs move at most ~28.3 units in 0.1 s, i.e. < 283 units/s
            let eps = 1e-3;
            let a = path.position(t);
            let b = path.position(t + eps);
            prop_assert!(a.distance(b) < 0.5);
        }
    }
}
