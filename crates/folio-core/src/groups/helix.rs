//! B. Double helix of small spheres joined by rungs.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::draw::{Blend, DrawList, SHAPE_DISC};
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::PI;

/// One sphere on a strand. Its index in creation order drives the phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixNode {
    pub position: Vec3,
    pub radius: f32,
    pub color: [f32; 3],
    pub base_opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixRung {
    pub ends: [Vec3; 2],
    pub color: [f32; 3],
}

/// Derived values, kept as parallel arrays indexed like `nodes`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HelixState {
    pub rotation_y: f32,
    pub offset_x: f32,
    pub scales: Vec<f32>,
    pub opacities: Vec<f32>,
}

pub struct Helix {
    nodes: Vec<HelixNode>,
    rungs: Vec<HelixRung>,
    pub state: HelixState,
}

impl Helix {
    pub fn new(config: &SceneConfig) -> Self {
        let levels = config.helix_levels;
        let mut nodes = Vec::with_capacity(levels * 2);
        let mut rungs = Vec::new();
        for i in 0..levels {
            let theta = i as f32 / levels as f32 * HELIX_TURNS_RAD;
            let y = i as f32 / levels as f32 * HELIX_HEIGHT - HELIX_HEIGHT / 2.0;
            let strand = |phase: f32| {
                Vec3::new(
                    (theta + phase).cos() * HELIX_RADIUS,
                    y,
                    (theta + phase).sin() * HELIX_RADIUS + HELIX_Z,
                )
            };
            let ends = [strand(0.0), strand(PI)];
            let is_node = i % HELIX_NODE_EVERY == 0;
            for (si, p) in ends.iter().enumerate() {
                nodes.push(HelixNode {
                    position: *p,
                    radius: if is_node { 0.18 } else { 0.08 },
                    color: accent(i + si),
                    base_opacity: if is_node { 0.9 } else { 0.55 },
                });
            }
            if is_node {
                rungs.push(HelixRung {
                    ends,
                    color: accent(i),
                });
            }
        }
        let n = nodes.len();
        Self {
            nodes,
            rungs,
            state: HelixState {
                scales: vec![1.0; n],
                opacities: vec![0.0; n],
                ..Default::default()
            },
        }
    }

    pub fn nodes(&self) -> &[HelixNode] {
        &self.nodes
    }

    pub fn rungs(&self) -> &[HelixRung] {
        &self.rungs
    }

    pub fn animate(&mut self, t: f32) {
        self.state.rotation_y = t * 0.1;
        self.state.offset_x = (t * 0.07).sin() * 2.5;
        for (i, node) in self.nodes.iter().enumerate() {
            let fi = i as f32;
            self.state.scales[i] = 0.85 + (t * 1.8 + fi * 0.22).sin() * 0.18;
            self.state.opacities[i] = node.base_opacity * (0.55 + (t * 0.9 + fi * 0.3).sin() * 0.45);
        }
    }

    fn model(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            Quat::from_rotation_y(self.state.rotation_y),
            Vec3::new(self.state.offset_x, 0.0, 0.0),
        )
    }

    pub fn emit(&self, out: &mut DrawList) {
        let model = self.model();
        for rung in &self.rungs {
            out.segment(
                model.transform_point3(rung.ends[0]),
                model.transform_point3(rung.ends[1]),
                rung.color,
                HELIX_RUNG_OPACITY,
            );
        }
        for (i, node) in self.nodes.iter().enumerate() {
            out.sprite(
                model.transform_point3(node.position),
                node.radius * 2.0 * self.state.scales[i],
                node.color,
                self.state.opacities[i],
                SHAPE_DISC,
                Blend::Normal,
            );
        }
    }
}
