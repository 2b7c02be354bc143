// Host-side tests for dead-letter motion, spawn ranges and fading.

use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;
use typefall_core::*;

fn spawn_one(seed: u64) -> DeadLetter {
    let mut rng = StdRng::seed_from_u64(seed);
    DeadLetter::spawn('a', Vec2::ZERO, &SpawnRanges::default(), &mut rng)
}

fn within((min, max): (f32, f32), v: f32) -> bool {
    v >= min && v <= max
}

#[test]
fn spawn_samples_stay_in_closed_ranges() {
    let ranges = SpawnRanges::default();
    for seed in 0..500u64 {
        let l = spawn_one(seed);
        assert!(within(ranges.velocity_x, l.velocity.x), "vx {} (seed {})", l.velocity.x, seed);
        assert!(within(ranges.velocity_y, l.velocity.y), "vy {} (seed {})", l.velocity.y, seed);
        assert!(
            within(ranges.angular_velocity, l.angular_velocity),
            "spin {} (seed {})",
            l.angular_velocity,
            seed
        );
        assert_eq!(l.position, Vec2::ZERO);
        assert_eq!(l.angle, 0.0);
        assert_eq!(l.time_alive, 0.0);
    }
}

#[test]
fn degenerate_range_pins_the_sample() {
    let ranges = SpawnRanges {
        velocity_x: (1.0, 1.0),
        velocity_y: (-2.0, -2.0),
        angular_velocity: (0.0, 0.0),
    };
    let mut rng = StdRng::seed_from_u64(7);
    let (v, spin) = ranges.sample(&mut rng);
    assert_eq!(v, Vec2::new(1.0, -2.0));
    assert_eq!(spin, 0.0);
}

#[test]
fn scaled_dt_uses_time_scale() {
    let params = PhysicsParams::default();
    let dt = scaled_dt(Duration::from_millis(16), &params);
    assert!((dt - 1.6).abs() < 1e-5, "16 ms should be 1.6 units, got {}", dt);
    assert_eq!(scaled_dt(Duration::ZERO, &params), 0.0);
}

#[test]
fn vertical_velocity_strictly_increases_under_gravity() {
    let params = PhysicsParams::default();
    let mut letters = vec![spawn_one(3)];
    let mut prev_vy = letters[0].velocity.y;
    for ms in [1u64, 16, 33, 5, 100, 16, 16, 2] {
        step_dead_letters(&mut letters, Duration::from_millis(ms), &params);
        let vy = letters[0].velocity.y;
        assert!(vy > prev_vy, "vy did not grow after {} ms: {} -> {}", ms, prev_vy, vy);
        prev_vy = vy;
    }
}

#[test]
fn euler_step_moves_then_accelerates() {
    let mut l = DeadLetter {
        character: 'x',
        position: Vec2::new(10.0, 20.0),
        velocity: Vec2::new(2.0, -4.0),
        angle: 0.5,
        angular_velocity: -0.1,
        time_alive: 0.0,
    };
    l.step(2.0, 0.5);
    assert_eq!(l.position, Vec2::new(14.0, 12.0));
    assert_eq!(l.velocity, Vec2::new(2.0, -3.0));
    assert!((l.angle - 0.3).abs() < 1e-6);
    assert_eq!(l.time_alive, 2.0);
}

#[test]
fn alpha_fades_linearly_and_clamps_at_zero() {
    let mut l = spawn_one(1);
    assert_eq!(l.alpha(FADE_RATE), 1.0);
    l.time_alive = 62.5;
    assert!((l.alpha(FADE_RATE) - 0.5).abs() < 1e-6);
    assert!(!l.is_faded(FADE_RATE));
    l.time_alive = 130.0;
    assert!(l.is_faded(FADE_RATE));
    l.time_alive = 1000.0;
    assert_eq!(l.alpha(FADE_RATE), 0.0);
}

#[test]
fn letters_are_kept_without_a_cap() {
    let params = PhysicsParams::default();
    let mut letters: Vec<DeadLetter> = (0..10).map(spawn_one).collect();
    // 2 s of wall clock is 200 units, far past full fade.
    step_dead_letters(&mut letters, Duration::from_secs(2), &params);
    assert_eq!(letters.len(), 10);
    assert!(letters.iter().all(|l| l.is_faded(params.fade_rate)));
}

#[test]
fn cap_prunes_only_faded_letters() {
    let params = PhysicsParams {
        max_dead_letters: Some(3),
        ..PhysicsParams::default()
    };
    let mut letters: Vec<DeadLetter> = (0..5).map(spawn_one).collect();
    for l in letters.iter_mut().take(4) {
        l.time_alive = 500.0;
    }
    step_dead_letters(&mut letters, Duration::from_millis(16), &params);
    assert_eq!(letters.len(), 1, "faded letters over the cap should go");
    assert!(!letters[0].is_faded(params.fade_rate));

    // Under the cap nothing is pruned, faded or not.
    let mut few: Vec<DeadLetter> = (0..3).map(spawn_one).collect();
    few[0].time_alive = 500.0;
    step_dead_letters(&mut few, Duration::from_millis(16), &params);
    assert_eq!(few.len(), 3);
}
