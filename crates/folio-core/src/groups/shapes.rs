//! C. Floating wireframe polyhedra.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::draw::DrawList;
use crate::geometry::{self, Wireframe};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    TorusKnot { radius: f32, tube: f32, tubular: usize, radial: usize },
    Icosahedron { radius: f32, detail: u32 },
    Torus { radius: f32, tube: f32, radial: usize, tubular: usize },
    Octahedron { radius: f32 },
}

impl ShapeKind {
    pub fn wireframe(&self) -> Wireframe {
        match *self {
            ShapeKind::TorusKnot { radius, tube, tubular, radial } => {
                geometry::torus_knot(radius, tube, tubular, radial)
            }
            ShapeKind::Icosahedron { radius, detail } => geometry::icosahedron(radius, detail),
            ShapeKind::Torus { radius, tube, radial, tubular } => {
                geometry::torus(radius, tube, radial, tubular)
            }
            ShapeKind::Octahedron { radius } => geometry::octahedron(radius),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeDef {
    pub kind: ShapeKind,
    pub position: Vec3,
}

/// Desktop uses all of these; mobile takes the first `SHAPES_MOBILE`.
pub const SHAPE_DEFS: [ShapeDef; 6] = [
    ShapeDef {
        kind: ShapeKind::TorusKnot { radius: 1.3, tube: 0.35, tubular: 80, radial: 10 },
        position: Vec3::new(16.0, 4.0, -8.0),
    },
    ShapeDef {
        kind: ShapeKind::Icosahedron { radius: 1.8, detail: 1 },
        position: Vec3::new(-18.0, -3.0, -6.0),
    },
    ShapeDef {
        kind: ShapeKind::Torus { radius: 1.6, tube: 0.45, radial: 10, tubular: 40 },
        position: Vec3::new(14.0, -8.0, -12.0),
    },
    ShapeDef {
        kind: ShapeKind::Octahedron { radius: 1.6 },
        position: Vec3::new(-15.0, 6.0, -10.0),
    },
    ShapeDef {
        kind: ShapeKind::Icosahedron { radius: 1.2, detail: 2 },
        position: Vec3::new(20.0, -1.0, -14.0),
    },
    ShapeDef {
        kind: ShapeKind::Torus { radius: 1.0, tube: 0.3, radial: 8, tubular: 24 },
        position: Vec3::new(-20.0, 8.0, -8.0),
    },
];

/// Fixed per-shape motion parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeMotion {
    pub base_position: Vec3,
    pub scale: f32,
    /// Radians per reference frame on each axis.
    pub spin: Vec3,
    pub float_amp: f32,
    pub float_speed: f32,
    pub float_offset: f32,
    pub pulse_offset: f32,
    pub base_opacity: f32,
    pub color: [f32; 3],
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShapeState {
    pub rotation: Vec3,
    pub y: f32,
    pub opacity: f32,
}

pub struct FloatingShapes {
    wireframes: Vec<Wireframe>,
    motions: Vec<ShapeMotion>,
    pub states: Vec<ShapeState>,
}

impl FloatingShapes {
    pub fn new(config: &SceneConfig, rng: &mut impl Rng) -> Self {
        let count = config.shape_count.min(SHAPE_DEFS.len());
        let mut wireframes = Vec::with_capacity(count);
        let mut motions = Vec::with_capacity(count);
        for (i, def) in SHAPE_DEFS.iter().take(count).enumerate() {
            wireframes.push(def.kind.wireframe());
            let scale = 0.7 + rng.gen::<f32>() * 0.9;
            let spin = Vec3::new(
                (rng.gen::<f32>() - 0.5) * 0.014,
                (rng.gen::<f32>() - 0.5) * 0.018,
                (rng.gen::<f32>() - 0.5) * 0.01,
            );
            motions.push(ShapeMotion {
                base_position: def.position,
                scale,
                spin,
                float_amp: 0.7 + rng.gen::<f32>() * 1.1,
                float_speed: 0.18 + rng.gen::<f32>() * 0.35,
                float_offset: rng.gen::<f32>() * TAU,
                pulse_offset: rng.gen::<f32>() * TAU,
                base_opacity: config.shape_opacity,
                color: accent(i),
            });
        }
        let states = motions
            .iter()
            .map(|m| ShapeState {
                rotation: Vec3::ZERO,
                y: m.base_position.y,
                opacity: m.base_opacity,
            })
            .collect();
        Self {
            wireframes,
            motions,
            states,
        }
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    pub fn motions(&self) -> &[ShapeMotion] {
        &self.motions
    }

    pub fn wireframes(&self) -> &[Wireframe] {
        &self.wireframes
    }

    pub fn animate(&mut self, t: f32) {
        let frames = t * REFERENCE_FPS;
        for (m, s) in self.motions.iter().zip(self.states.iter_mut()) {
            s.rotation = m.spin * frames;
            s.y = m.base_position.y + (t * m.float_speed + m.float_offset).sin() * m.float_amp;
            s.opacity = m.base_opacity * (0.65 + (t * 0.5 + m.pulse_offset).sin() * 0.35);
        }
    }

    pub fn emit(&self, out: &mut DrawList) {
        for ((m, s), wire) in self.motions.iter().zip(&self.states).zip(&self.wireframes) {
            let model = Mat4::from_scale_rotation_translation(
                Vec3::splat(m.scale),
                Quat::from_euler(EulerRot::XYZ, s.rotation.x, s.rotation.y, s.rotation.z),
                Vec3::new(m.base_position.x, s.y, m.base_position.z),
            );
            out.segments(&model, wire, m.color, s.opacity);
        }
    }
}
