//! D. Concentric tilted energy rings.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::draw::DrawList;
use crate::geometry::{self, Wireframe};
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub radius: f32,
    pub tilt_x: f32,
    pub tilt_z: f32,
    /// Radians per reference frame around Y and Z.
    pub spin_y: f32,
    pub spin_z: f32,
    pub pulse_offset: f32,
    pub color: [f32; 3],
}

/// `opacity` is left unclamped: the oscillation dips to -0.02. The draw
/// list clamps it when emitting.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RingState {
    pub rotation: Vec3,
    pub opacity: f32,
    pub scale: f32,
}

pub struct RingSet {
    rings: Vec<Ring>,
    outlines: Vec<Wireframe>,
    pub states: Vec<RingState>,
}

impl RingSet {
    pub fn new(config: &SceneConfig) -> Self {
        let count = config.ring_count;
        let rings: Vec<Ring> = (0..count)
            .map(|i| {
                let fi = i as f32;
                Ring {
                    radius: 4.0 + fi * 2.8,
                    tilt_x: PI * 0.42 + fi * 0.18,
                    tilt_z: fi * 0.22,
                    spin_y: 0.004 + fi * 0.003,
                    spin_z: 0.001 + fi * 0.001,
                    pulse_offset: fi * (TAU / count as f32),
                    color: accent(i),
                }
            })
            .collect();
        let outlines = rings
            .iter()
            .map(|r| geometry::circle(r.radius, RING_SEGMENTS))
            .collect();
        let states = rings
            .iter()
            .map(|r| RingState {
                rotation: Vec3::new(r.tilt_x, 0.0, r.tilt_z),
                opacity: 0.14,
                scale: 1.0,
            })
            .collect();
        Self {
            rings,
            outlines,
            states,
        }
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn animate(&mut self, t: f32) {
        let frames = t * REFERENCE_FPS;
        for (r, s) in self.rings.iter().zip(self.states.iter_mut()) {
            s.rotation = Vec3::new(r.tilt_x, r.spin_y * frames, r.tilt_z + r.spin_z * frames);
            s.opacity = 0.07 + (t * 0.55 + r.pulse_offset).sin() * 0.09;
            s.scale = 1.0 + (t * 0.28 + r.pulse_offset).sin() * 0.04;
        }
    }

    pub fn emit(&self, out: &mut DrawList) {
        for ((r, s), outline) in self.rings.iter().zip(&self.states).zip(&self.outlines) {
            let model = Mat4::from_translation(RING_GROUP_ORIGIN)
                * Mat4::from_scale_rotation_translation(
                    Vec3::splat(s.scale),
                    Quat::from_euler(EulerRot::XYZ, s.rotation.x, s.rotation.y, s.rotation.z),
                    Vec3::ZERO,
                );
            out.segments(&model, outline, r.color, s.opacity);
        }
    }
}
