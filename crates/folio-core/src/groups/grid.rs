//! F. Slowly bobbing floor grid.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::draw::DrawList;
use crate::geometry::{self, Wireframe};
use glam::{Mat4, Vec3};

pub struct GridFloor {
    lines: Wireframe,
    center_lines: Wireframe,
    opacity: f32,
    pub y: f32,
}

impl GridFloor {
    pub fn new(config: &SceneConfig) -> Self {
        let (lines, center_lines) = geometry::floor_grid(GRID_SIZE, GRID_DIVISIONS);
        Self {
            lines,
            center_lines,
            opacity: config.grid_opacity,
            y: GRID_BASE_Y,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.lines.len() + self.center_lines.len()
    }

    pub fn animate(&mut self, t: f32) {
        self.y = GRID_BASE_Y + (t * 0.18).sin() * 0.8;
    }

    pub fn emit(&self, out: &mut DrawList) {
        let model = Mat4::from_translation(Vec3::new(0.0, self.y, 0.0));
        out.segments(&model, &self.lines, hex_rgb(GRID_LINE_HEX), self.opacity);
        out.segments(&model, &self.center_lines, hex_rgb(GRID_CENTER_HEX), self.opacity);
    }
}
