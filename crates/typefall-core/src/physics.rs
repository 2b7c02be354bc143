//! Ejected ("dead") letter simulation.
//!
//! Letters are plain kinematic sprites: Euler-integrated position, gravity on
//! the vertical velocity, constant spin and a linear fade. There is no
//! collision. Screen space is y-down, so gravity makes `velocity.y` grow.

use crate::constants::*;
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct PhysicsParams {
    pub time_scale: f32,
    pub gravity: f32,
    pub fade_rate: f32,
    /// When set, fully faded letters are pruned once the list grows past it.
    pub max_dead_letters: Option<usize>,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            time_scale: TIME_SCALE,
            gravity: GRAVITY,
            fade_rate: FADE_RATE,
            max_dead_letters: None,
        }
    }
}

/// Closed ranges the spawn velocities are drawn from, uniformly.
#[derive(Clone, Debug)]
pub struct SpawnRanges {
    pub velocity_x: (f32, f32),
    pub velocity_y: (f32, f32),
    pub angular_velocity: (f32, f32),
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self {
            velocity_x: SPAWN_VELOCITY_X,
            velocity_y: SPAWN_VELOCITY_Y,
            angular_velocity: SPAWN_ANGULAR_VELOCITY,
        }
    }
}

impl SpawnRanges {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (Vec2, f32) {
        let vx = rng.gen_range(self.velocity_x.0..=self.velocity_x.1);
        let vy = rng.gen_range(self.velocity_y.0..=self.velocity_y.1);
        let spin = rng.gen_range(self.angular_velocity.0..=self.angular_velocity.1);
        (Vec2::new(vx, vy), spin)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeadLetter {
    pub character: char,
    /// Top-left of the glyph, relative to the cursor anchor.
    pub position: Vec2,
    pub velocity: Vec2,
    pub angle: f32,
    pub angular_velocity: f32,
    /// Accumulated simulation time (scaled units).
    pub time_alive: f32,
}

impl DeadLetter {
    pub fn spawn<R: Rng + ?Sized>(
        character: char,
        origin: Vec2,
        ranges: &SpawnRanges,
        rng: &mut R,
    ) -> Self {
        let (velocity, angular_velocity) = ranges.sample(rng);
        Self {
            character,
            position: origin,
            velocity,
            angle: 0.0,
            angular_velocity,
            time_alive: 0.0,
        }
    }

    /// Advance by `dt` simulation units.
    #[inline]
    pub fn step(&mut self, dt: f32, gravity: f32) {
        self.position += self.velocity * dt;
        self.velocity.y += gravity * dt;
        self.angle += self.angular_velocity * dt;
        self.time_alive += dt;
    }

    #[inline]
    pub fn alpha(&self, fade_rate: f32) -> f32 {
        (1.0 - self.time_alive * fade_rate).max(0.0)
    }

    #[inline]
    pub fn is_faded(&self, fade_rate: f32) -> bool {
        self.alpha(fade_rate) <= 0.0
    }
}

/// Simulation units covered by a frame that took `frame_dt` of wall clock.
#[inline]
pub fn scaled_dt(frame_dt: Duration, params: &PhysicsParams) -> f32 {
    frame_dt.as_secs_f32() * 1000.0 * params.time_scale
}

pub fn step_dead_letters(letters: &mut Vec<DeadLetter>, frame_dt: Duration, params: &PhysicsParams) {
    let dt = scaled_dt(frame_dt, params);
    for letter in letters.iter_mut() {
        letter.step(dt, params.gravity);
    }
    if let Some(cap) = params.max_dead_letters {
        if letters.len() > cap {
            letters.retain(|l| !l.is_faded(params.fade_rate));
        }
    }
}
