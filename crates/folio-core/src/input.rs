use crate::constants::{SECTION_BAND_PX, TILT_BETA_RANGE_DEG, TILT_GAMMA_RANGE_DEG};
use smallvec::SmallVec;

/// Latest pointer and scroll sample.
///
/// Written by event handlers, read once per frame by the animator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInput {
    /// Horizontal pointer position, -1 (left) .. 1 (right).
    pub x: f32,
    /// Vertical pointer position, -1 (top) .. 1 (bottom).
    pub y: f32,
    /// Document scroll offset in CSS pixels.
    pub scroll_y: f32,
}

impl PointerInput {
    pub fn set_pointer(&mut self, [x, y]: [f32; 2]) {
        self.x = x;
        self.y = y;
    }
}

// ---------------- Normalization helpers ----------------
#[inline]
pub fn pointer_from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> [f32; 2] {
    if width <= 0.0 || height <= 0.0 {
        return [0.0, 0.0];
    }
    [
        ((client_x / width - 0.5) * 2.0) as f32,
        ((client_y / height - 0.5) * 2.0) as f32,
    ]
}

/// Device tilt to an approximate [-1, 1] range. A missing axis reads as 0.
#[inline]
pub fn pointer_from_tilt(gamma_deg: Option<f64>, beta_deg: Option<f64>) -> [f32; 2] {
    [
        (gamma_deg.unwrap_or(0.0) / TILT_GAMMA_RANGE_DEG) as f32,
        (beta_deg.unwrap_or(0.0) / TILT_BETA_RANGE_DEG) as f32,
    ]
}

/// Vertical extent of a tracked section relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

/// Fires once each time a different section reaches the band line.
#[derive(Clone, Debug)]
pub struct SectionBand {
    line_px: f64,
    last: Option<usize>,
}

impl Default for SectionBand {
    fn default() -> Self {
        Self::new(SECTION_BAND_PX)
    }
}

impl SectionBand {
    pub fn new(line_px: f64) -> Self {
        Self {
            line_px,
            last: None,
        }
    }

    pub fn last(&self) -> Option<usize> {
        self.last
    }

    /// Indices of sections that newly straddle the band, in document order.
    ///
    /// Two adjacent sections touching exactly at the line can both fire in
    /// one call; the later one becomes the remembered section.
    pub fn crossings<I>(&mut self, rects: I) -> SmallVec<[usize; 2]>
    where
        I: IntoIterator<Item = SectionRect>,
    {
        let mut fired = SmallVec::new();
        for (idx, r) in rects.into_iter().enumerate() {
            if r.top <= self.line_px && r.bottom >= self.line_px && self.last != Some(idx) {
                self.last = Some(idx);
                fired.push(idx);
            }
        }
        fired
    }
}
