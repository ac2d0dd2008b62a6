// Host-side tests for the trail chain interpolation.

use aurora_core::constants::{HEAD_LERP_BASE, HEAD_LERP_MIN, TUBE_POINTS};
use aurora_core::trail::TrailChain;
use glam::Vec3;

fn make_chain() -> TrailChain {
    TrailChain::new(TUBE_POINTS, TrailChain::head_lerp_for(0))
}

#[test]
fn point_count_is_invariant_across_frames() {
    let mut chain = make_chain();
    let target = Vec3::new(2.0, -1.0, 0.0);
    for _ in 0..500 {
        chain.step(target);
        assert_eq!(chain.points().len(), TUBE_POINTS);
    }
}

#[test]
fn stationary_target_converges_monotonically() {
    let mut chain = make_chain();
    let target = Vec3::new(2.0, 1.0, 0.0);

    let mut prev: Vec<f32> = chain
        .points()
        .iter()
        .map(|p| p.distance(target))
        .collect();
    for frame in 0..300 {
        chain.step(target);
        let dist: Vec<f32> = chain
            .points()
            .iter()
            .map(|p| p.distance(target))
            .collect();
        for (i, (d, pd)) in dist.iter().zip(&prev).enumerate() {
            assert!(
                *d <= pd + 1e-5,
                "point {i} moved away from the target on frame {frame}: {pd} -> {d}"
            );
        }
        prev = dist;
    }
    // after enough frames the whole chain has collapsed onto the target
    for (i, d) in prev.iter().enumerate() {
        assert!(*d < 1e-2, "point {i} still {d} away after 300 frames");
    }
}

#[test]
fn step_at_target_is_a_noop() {
    let mut chain = make_chain();
    let target = Vec3::ZERO;
    let before: Vec<Vec3> = chain.points().to_vec();
    chain.step(target);
    assert_eq!(chain.points(), &before[..]);
}

#[test]
fn head_lerp_decreases_with_tube_index_and_stays_positive() {
    let mut prev = f32::MAX;
    for i in 0..8 {
        let l = TrailChain::head_lerp_for(i);
        assert!(l > 0.0 && l <= HEAD_LERP_BASE);
        assert!(l <= prev, "head lerp must not grow with tube index");
        assert!(l >= HEAD_LERP_MIN);
        prev = l;
    }
    assert!(TrailChain::head_lerp_for(1) < TrailChain::head_lerp_for(0));
}

#[test]
fn later_tubes_trail_behind_earlier_ones() {
    let target = Vec3::new(3.0, 0.0, 0.0);
    let mut lead = TrailChain::new(TUBE_POINTS, TrailChain::head_lerp_for(0));
    let mut lag = TrailChain::new(TUBE_POINTS, TrailChain::head_lerp_for(2));
    for _ in 0..30 {
        lead.step(target);
        lag.step(target);
    }
    let lead_d = lead.points()[0].distance(target);
    let lag_d = lag.points()[0].distance(target);
    assert!(
        lag_d > lead_d,
        "tube with the smaller head lerp should be farther out ({lag_d} <= {lead_d})"
    );
}

#[test]
#[should_panic(expected = "head and at least one follower")]
fn chain_rejects_degenerate_length() {
    let _ = TrailChain::new(1, 0.1);
}
