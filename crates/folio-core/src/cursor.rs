//! Custom cursor: a dot pinned to the pointer and a ring that lags behind.

use crate::constants::CURSOR_RING_SMOOTHING;
use glam::Vec2;

pub const DOT_SIZE_PX: f32 = 6.0;
pub const DOT_SIZE_HOVER_PX: f32 = 16.0;
pub const RING_SIZE_PX: f32 = 32.0;
pub const RING_SIZE_HOVER_PX: f32 = 54.0;
pub const RING_BORDER: &str = "rgba(255,214,10,.5)";
pub const RING_BORDER_HOVER: &str = "var(--acc2)";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFollower {
    pointer: Vec2,
    ring: Vec2,
    hovering: bool,
}

impl CursorFollower {
    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32) {
        self.pointer = Vec2::new(client_x, client_y);
    }

    /// One fixed-step frame of ring easing.
    pub fn step(&mut self) {
        self.ring += (self.pointer - self.ring) * CURSOR_RING_SMOOTHING;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn dot(&self) -> Vec2 {
        self.pointer
    }

    pub fn ring(&self) -> Vec2 {
        self.ring
    }

    pub fn dot_size(&self) -> f32 {
        if self.hovering {
            DOT_SIZE_HOVER_PX
        } else {
            DOT_SIZE_PX
        }
    }

    pub fn ring_size(&self) -> f32 {
        if self.hovering {
            RING_SIZE_HOVER_PX
        } else {
            RING_SIZE_PX
        }
    }

    pub fn ring_border(&self) -> &'static str {
        if self.hovering {
            RING_BORDER_HOVER
        } else {
            RING_BORDER
        }
    }
}
