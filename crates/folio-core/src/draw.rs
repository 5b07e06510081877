//! Flattened per-frame geometry and the seam to a rendering backend.
//!
//! Groups never talk to the GPU. Each frame they append billboards and line
//! segments to a [`DrawList`], and whatever implements [`Renderable`] turns
//! that into pixels. Records are `Pod` so a backend can upload them as-is.

use glam::{Mat4, Vec3};

/// Square point (matches an untextured `PointsMaterial`).
pub const SHAPE_SQUARE: f32 = 0.0;
/// Filled disc (stands in for a small sphere mesh).
pub const SHAPE_DISC: f32 = 1.0;

/// One camera-facing quad.
///
/// `size` is the full world-space width. `style[0]` selects the shape,
/// `style[1]` is 1.0 for additive blending and 0.0 for normal alpha.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub center: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
    pub style: [f32; 2],
}

/// Endpoint of a line segment; consecutive pairs form one segment.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    Normal,
    Additive,
}

impl Blend {
    fn flag(self) -> f32 {
        match self {
            Blend::Normal => 0.0,
            Blend::Additive => 1.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub sprites: Vec<SpriteInstance>,
    pub lines: Vec<LineVertex>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.sprites.clear();
        self.lines.clear();
    }

    pub fn segment_count(&self) -> usize {
        self.lines.len() / 2
    }

    /// Alpha is clamped to \[0, 1\]; some groups oscillate slightly below zero.
    pub fn sprite(&mut self, center: Vec3, size: f32, rgb: [f32; 3], alpha: f32, shape: f32, blend: Blend) {
        self.sprites.push(SpriteInstance {
            center: center.to_array(),
            size,
            color: [rgb[0], rgb[1], rgb[2], alpha.clamp(0.0, 1.0)],
            style: [shape, blend.flag()],
        });
    }

    pub fn segment(&mut self, a: Vec3, b: Vec3, rgb: [f32; 3], alpha: f32) {
        let color = [rgb[0], rgb[1], rgb[2], alpha.clamp(0.0, 1.0)];
        self.lines.push(LineVertex {
            position: a.to_array(),
            color,
        });
        self.lines.push(LineVertex {
            position: b.to_array(),
            color,
        });
    }

    /// Push local-space segments through `model`.
    pub fn segments(&mut self, model: &Mat4, local: &[[Vec3; 2]], rgb: [f32; 3], alpha: f32) {
        self.lines.reserve(local.len() * 2);
        for [a, b] in local {
            self.segment(model.transform_point3(*a), model.transform_point3(*b), rgb, alpha);
        }
    }
}

/// Everything a backend needs to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub draw: &'a DrawList,
    pub view_proj: Mat4,
    /// Camera basis in world space, used to orient billboards.
    pub camera_right: Vec3,
    pub camera_up: Vec3,
}

/// Minimal rendering backend interface: accept derived state, then present.
pub trait Renderable {
    type Error;

    fn update(&mut self, frame: &FrameView<'_>);

    fn submit(&mut self) -> Result<(), Self::Error>;
}
