//! E. Floating node graph with static edges.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::draw::{Blend, DrawList, SHAPE_DISC};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Rest position and float parameters for one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeSeed {
    pub position: Vec3,
    pub float_speed: f32,
    pub float_offset: f32,
    pub float_amp: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphNode {
    pub seed: NodeSeed,
    pub radius: f32,
    pub base_opacity: f32,
    pub color: [f32; 3],
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeState {
    pub position: Vec3,
    pub opacity: f32,
}

/// Index pairs `(i, j)`, `i < j`, of nodes closer than `threshold`.
///
/// Strictly closer: a pair exactly `threshold` apart is not connected.
pub fn edges_within(positions: &[Vec3], threshold: f32) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            if positions[i].distance(positions[j]) < threshold {
                edges.push((i, j));
            }
        }
    }
    edges
}

pub struct NodeGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<(usize, usize)>,
    pub states: Vec<NodeState>,
}

impl NodeGraph {
    pub fn new(config: &SceneConfig, rng: &mut impl Rng) -> Self {
        let seeds = (0..config.node_count)
            .map(|_| {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 55.0,
                    (rng.gen::<f32>() - 0.5) * 32.0,
                    (rng.gen::<f32>() - 0.5) * 22.0 - 8.0,
                );
                NodeSeed {
                    position,
                    float_speed: 0.18 + rng.gen::<f32>() * 0.28,
                    float_offset: rng.gen::<f32>() * TAU,
                    float_amp: 0.4 + rng.gen::<f32>() * 0.9,
                }
            })
            .collect();
        Self::from_seeds(seeds)
    }

    /// Build from explicit node seeds; edges are computed once here.
    pub fn from_seeds(seeds: Vec<NodeSeed>) -> Self {
        let nodes: Vec<GraphNode> = seeds
            .into_iter()
            .enumerate()
            .map(|(i, seed)| {
                let hub = i % NODE_HUB_EVERY == 0;
                GraphNode {
                    seed,
                    radius: if hub { 0.22 } else { 0.1 },
                    base_opacity: if hub { 0.8 } else { 0.45 },
                    color: accent(i),
                }
            })
            .collect();
        let rest: Vec<Vec3> = nodes.iter().map(|n| n.seed.position).collect();
        let edges = edges_within(&rest, EDGE_DISTANCE);
        let states = nodes
            .iter()
            .map(|n| NodeState {
                position: n.seed.position,
                opacity: n.base_opacity,
            })
            .collect();
        Self {
            nodes,
            edges,
            states,
        }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn animate(&mut self, t: f32) {
        for (n, s) in self.nodes.iter().zip(self.states.iter_mut()) {
            let NodeSeed {
                position,
                float_speed: fs,
                float_offset: fo,
                float_amp: fa,
            } = n.seed;
            s.position = Vec3::new(
                position.x + (t * fs * 0.6 + fo).cos() * 0.35,
                position.y + (t * fs + fo).sin() * fa,
                position.z,
            );
            s.opacity = n.base_opacity * (0.5 + (t * 0.7 + fo).sin() * 0.5);
        }
    }

    /// Edges stay at the rest positions even while nodes drift.
    pub fn emit(&self, out: &mut DrawList) {
        let edge_rgb = hex_rgb(EDGE_COLOR_HEX);
        for &(i, j) in &self.edges {
            out.segment(
                self.nodes[i].seed.position,
                self.nodes[j].seed.position,
                edge_rgb,
                EDGE_OPACITY,
            );
        }
        for (n, s) in self.nodes.iter().zip(&self.states) {
            out.sprite(s.position, n.radius * 2.0, n.color, s.opacity, SHAPE_DISC, Blend::Normal);
        }
    }
}
