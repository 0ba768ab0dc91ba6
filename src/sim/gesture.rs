//! Blade gesture path
//!
//! Pointer samples collected while the player is cutting. Input handlers only
//! push or clear; the tick trims and reads.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Recent pointer samples, newest last
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GesturePath {
    points: Vec<Vec2>,
    /// A gesture is in progress (pointer held down)
    active: bool,
}

impl GesturePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new gesture at `point`, discarding any previous samples
    pub fn begin(&mut self, point: Vec2) {
        self.points.clear();
        self.active = true;
        self.points.push(point);
    }

    /// Append a sample if a gesture is in progress. Returns whether it was recorded.
    pub fn extend(&mut self, point: Vec2) -> bool {
        if !self.active {
            return false;
        }
        self.points.push(point);
        true
    }

    /// End the gesture and clear all samples
    pub fn end(&mut self) {
        self.active = false;
        self.points.clear();
    }

    /// Drop the oldest samples until at most `max_len` remain
    pub fn trim_to(&mut self, max_len: usize) {
        if self.points.len() > max_len {
            let excess = self.points.len() - max_len;
            self.points.drain(..excess);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// The sample used for hit-testing, once the path can represent a motion
    pub fn blade_tip(&self) -> Option<Vec2> {
        if self.points.len() < 2 {
            return None;
        }
        self.points.last().copied()
    }

    /// Trail segments `(from, to, alpha)` for rendering, oldest first.
    /// Alpha grows with recency: segment `i` gets `i / len`.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2, f32)> + '_ {
        let len = self.points.len() as f32;
        self.points
            .windows(2)
            .enumerate()
            .map(move |(i, w)| (w[0], w[1], i as f32 / len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extend_requires_active_gesture() {
        let mut path = GesturePath::new();
        assert!(!path.extend(Vec2::new(1.0, 1.0)));
        assert!(path.is_empty());

        path.begin(Vec2::ZERO);
        assert!(path.extend(Vec2::new(1.0, 1.0)));
        assert_eq!(path.len(), 2);

        path.end();
        assert!(path.is_empty());
        assert!(!path.is_active());
    }

    #[test]
    fn test_begin_clears_previous_gesture() {
        let mut path = GesturePath::new();
        path.begin(Vec2::ZERO);
        path.extend(Vec2::ONE);
        path.begin(Vec2::new(5.0, 5.0));
        assert_eq!(path.points(), &[Vec2::new(5.0, 5.0)]);
    }

    #[test]
    fn test_blade_tip_needs_two_points() {
        let mut path = GesturePath::new();
        path.begin(Vec2::ZERO);
        assert_eq!(path.blade_tip(), None);
        path.extend(Vec2::new(3.0, 4.0));
        assert_eq!(path.blade_tip(), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn test_segments_fade_toward_oldest() {
        let mut path = GesturePath::new();
        path.begin(Vec2::ZERO);
        for i in 1..4 {
            path.extend(Vec2::splat(i as f32));
        }
        let alphas: Vec<f32> = path.segments().map(|(_, _, a)| a).collect();
        assert_eq!(alphas, vec![0.0, 0.25, 0.5]);
    }

    proptest! {
        #[test]
        fn prop_trim_keeps_newest(n in 1usize..64, cap in 1usize..32) {
            let mut path = GesturePath::new();
            path.begin(Vec2::ZERO);
            for i in 1..n {
                path.extend(Vec2::new(i as f32, 0.0));
            }
            path.trim_to(cap);
            prop_assert_eq!(path.len(), n.min(cap));
            prop_assert_eq!(path.points().last().map(|p| p.x), Some((n - 1) as f32));
        }
    }
}
