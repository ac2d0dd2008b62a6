//! Point chains that chase the pointer.
//!
//! Each tube keeps an ordered sequence of control points. The head lerps
//! toward the pointer's world position and every trailing point lerps toward
//! its predecessor, so the chain whips behind the cursor. Later tubes use a
//! smaller head coefficient and lag further back.

use crate::constants::{HEAD_LERP_BASE, HEAD_LERP_MIN, HEAD_LERP_STEP, TRAIL_FOLLOW, TUBE_POINTS};
use glam::Vec3;
use smallvec::SmallVec;

pub struct TrailChain {
    points: SmallVec<[Vec3; TUBE_POINTS]>,
    head_lerp: f32,
}

impl TrailChain {
    /// All points start at the origin. `len` must cover a head and at least
    /// one follower.
    pub fn new(len: usize, head_lerp: f32) -> Self {
        assert!(len >= 2, "a trail needs a head and at least one follower");
        Self {
            points: (0..len).map(|_| Vec3::ZERO).collect(),
            head_lerp,
        }
    }

    /// Head coefficient for the tube at `index`.
    #[inline]
    pub fn head_lerp_for(index: usize) -> f32 {
        (HEAD_LERP_BASE - HEAD_LERP_STEP * index as f32).max(HEAD_LERP_MIN)
    }

    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    #[inline]
    pub fn head_lerp(&self) -> f32 {
        self.head_lerp
    }

    /// Advance the chain one frame toward `target`.
    ///
    /// The head only chases in x/y; the chain lives on the z = 0 plane the
    /// pointer is unprojected onto. Point count is invariant.
    pub fn step(&mut self, target: Vec3) {
        let head = &mut self.points[0];
        head.x += (target.x - head.x) * self.head_lerp;
        head.y += (target.y - head.y) * self.head_lerp;

        for i in (1..self.points.len()).rev() {
            let ahead = self.points[i - 1];
            self.points[i] = self.points[i].lerp(ahead, TRAIL_FOLLOW);
        }
    }
}
