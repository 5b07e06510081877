//! A. Spiral particle field.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::draw::{Blend, DrawList, SHAPE_SQUARE};
use glam::{Mat4, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GalaxyState {
    pub rotation_y: f32,
    pub opacity: f32,
}

pub struct Galaxy {
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    point_size: f32,
    pub state: GalaxyState,
}

impl Galaxy {
    pub fn new(config: &SceneConfig, rng: &mut impl Rng) -> Self {
        let n = config.galaxy_points;
        let mut positions = Vec::with_capacity(n);
        let mut colors = Vec::with_capacity(n);
        for i in 0..n {
            let arm = i % GALAXY_ARMS;
            let radius = 1.5 + rng.gen::<f32>().powf(0.6) * 38.0;
            let spin = radius * 0.45;
            let spread = (rng.gen::<f32>() - 0.5) * (radius * 0.08);
            let angle = arm as f32 / GALAXY_ARMS as f32 * TAU + spin + spread;

            let x = angle.cos() * radius + (rng.gen::<f32>() - 0.5) * 1.5;
            let y = (rng.gen::<f32>() - 0.5) * 3.5;
            let z = angle.sin() * radius + (rng.gen::<f32>() - 0.5) * 1.5 - 8.0;
            positions.push(Vec3::new(x, y, z));

            let c = ACCENT_RGB[arm % ACCENT_RGB.len()];
            let b = 0.5 + rng.gen::<f32>() * 0.5;
            colors.push([c[0] * b, c[1] * b, c[2] * b]);
        }
        Self {
            positions,
            colors,
            point_size: config.galaxy_point_size,
            state: GalaxyState::default(),
        }
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

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn animate(&mut self, t: f32) {
        self.state = GalaxyState {
            rotation_y: t * 0.05,
            opacity: 0.65 + (t * 0.2).sin() * 0.1,
        };
    }

    pub fn emit(&self, out: &mut DrawList) {
        let model = Mat4::from_rotation_y(self.state.rotation_y);
        let size = self.point_size * POINT_SIZE_TO_WORLD;
        out.sprites.reserve(self.positions.len());
        for (p, c) in self.positions.iter().zip(&self.colors) {
            out.sprite(
                model.transform_point3(*p),
                size,
                *c,
                self.state.opacity,
                SHAPE_SQUARE,
                Blend::Additive,
            );
        }
    }
}
