//! G. Reusable burst particle pool.
//!
//! Unlike the other groups this one integrates state tick by tick: each
//! tick adds velocity to position and gravity to velocity. A trigger puts
//! every particle back at the origin with its original velocity, so a new
//! burst always supersedes the one in flight.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::draw::{Blend, DrawList, SHAPE_SQUARE};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

pub struct BurstEmitter {
    base_velocities: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    active: bool,
    elapsed: f32,
    opacity: f32,
}

impl BurstEmitter {
    pub fn new(config: &SceneConfig, rng: &mut impl Rng) -> Self {
        let n = config.burst_pool;
        let base_velocities: Vec<Vec3> = (0..n)
            .map(|_| {
                let spd = 0.06 + rng.gen::<f32>() * 0.18;
                let th = rng.gen::<f32>() * TAU;
                let ph = rng.gen::<f32>() * PI;
                Vec3::new(
                    ph.sin() * th.cos() * spd,
                    ph.sin() * th.sin() * spd + 0.02,
                    ph.cos() * spd,
                )
            })
            .collect();
        Self::from_velocities(base_velocities)
    }

    /// Pool with explicit launch velocities, hidden until the first trigger.
    pub fn from_velocities(base_velocities: Vec<Vec3>) -> Self {
        let n = base_velocities.len();
        Self {
            colors: (0..n).map(|i| ACCENT_RGB[i % ACCENT_RGB.len()]).collect(),
            positions: vec![BURST_HIDDEN; n],
            velocities: base_velocities.clone(),
            base_velocities,
            active: false,
            elapsed: 0.0,
            opacity: 0.0,
        }
    }

    /// Random origin near the middle of the scene, as used by section crossings.
    pub fn random_origin(rng: &mut impl Rng) -> Vec3 {
        Vec3::new(
            (rng.gen::<f32>() - 0.5) * BURST_ORIGIN_SPREAD_X,
            (rng.gen::<f32>() - 0.5) * BURST_ORIGIN_SPREAD_Y,
            0.0,
        )
    }

    pub fn trigger(&mut self, origin: Vec3) {
        self.positions.fill(origin);
        self.velocities.copy_from_slice(&self.base_velocities);
        self.active = true;
        self.elapsed = 0.0;
        self.opacity = BURST_START_OPACITY;
        log::trace!(
            "[burst] trigger at ({:.2},{:.2},{:.2})",
            origin.x,
            origin.y,
            origin.z
        );
    }

    /// Advance one fixed tick. No-op while inactive.
    pub fn step(&mut self) {
        if !self.active {
            return;
        }
        self.elapsed += BURST_TICK_SECS;
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            *p += *v;
            v.y -= BURST_GRAVITY;
        }
        self.opacity = (BURST_START_OPACITY - self.elapsed * BURST_FADE_PER_SEC).max(0.0);
        if self.elapsed > BURST_LIFETIME_SECS {
            self.active = false;
            self.opacity = 0.0;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn base_velocities(&self) -> &[Vec3] {
        &self.base_velocities
    }

    pub fn emit(&self, out: &mut DrawList) {
        if self.opacity <= 0.0 {
            return;
        }
        let size = BURST_POINT_SIZE * POINT_SIZE_TO_WORLD;
        for (p, c) in self.positions.iter().zip(&self.colors) {
            out.sprite(*p, size, *c, self.opacity, SHAPE_SQUARE, Blend::Additive);
        }
    }
}
