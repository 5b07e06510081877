//! Viewport description and density selection.

use crate::constants::*;
use crate::error::SceneError;

/// CSS-pixel size of the drawing surface plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32, pixel_ratio: f64) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::EmptyViewport { width, height });
        }
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(SceneError::InvalidPixelRatio(pixel_ratio));
        }
        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Device pixel ratio, capped so high-density phones don't render 3x.
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio.min(MAX_PIXEL_RATIO)
    }

    /// Backing-store size in physical pixels.
    pub fn surface_size(&self) -> (u32, u32) {
        let pr = self.pixel_ratio();
        (
            ((self.width as f64 * pr) as u32).max(1),
            ((self.height as f64 * pr) as u32).max(1),
        )
    }

    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_MAX_WIDTH
    }
}

/// Generation density for every group, picked once at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub mobile: bool,
    pub galaxy_points: usize,
    pub galaxy_point_size: f32,
    pub helix_levels: usize,
    pub shape_count: usize,
    pub shape_opacity: f32,
    pub ring_count: usize,
    pub node_count: usize,
    pub grid_opacity: f32,
    pub burst_pool: usize,
}

impl SceneConfig {
    pub fn mobile() -> Self {
        Self {
            mobile: true,
            galaxy_points: GALAXY_COUNT_MOBILE,
            galaxy_point_size: GALAXY_POINT_SIZE_MOBILE,
            helix_levels: HELIX_LEVELS_MOBILE,
            shape_count: SHAPES_MOBILE,
            shape_opacity: SHAPE_OPACITY_MOBILE,
            ring_count: RINGS_MOBILE,
            node_count: NODES_MOBILE,
            grid_opacity: GRID_OPACITY_MOBILE,
            burst_pool: BURST_POOL,
        }
    }

    pub fn desktop() -> Self {
        Self {
            mobile: false,
            galaxy_points: GALAXY_COUNT_DESKTOP,
            galaxy_point_size: GALAXY_POINT_SIZE_DESKTOP,
            helix_levels: HELIX_LEVELS_DESKTOP,
            shape_count: crate::groups::shapes::SHAPE_DEFS.len(),
            shape_opacity: SHAPE_OPACITY_DESKTOP,
            ring_count: RINGS_DESKTOP,
            node_count: NODES_DESKTOP,
            grid_opacity: GRID_OPACITY_DESKTOP,
            burst_pool: BURST_POOL,
        }
    }

    pub fn for_width(width: u32) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Self::mobile()
        } else {
            Self::desktop()
        }
    }

    pub fn for_viewport(viewport: &Viewport) -> Self {
        Self::for_width(viewport.width())
    }
}
