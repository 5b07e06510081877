//! Parallax camera.
//!
//! The camera looks down -Z from its position (no look-at target) and only
//! ever translates plus a tiny roll. Position is the one piece of scene
//! state integrated frame to frame rather than derived from `t`.

use crate::constants::*;
use crate::input::PointerInput;
use glam::{Mat4, Quat, Vec3};

/// Right-handed perspective camera.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub roll: f32,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_REST_Z),
            roll: 0.0,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// World transform of the camera itself.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_z(self.roll), self.position)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn right(&self) -> Vec3 {
        Quat::from_rotation_z(self.roll) * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        Quat::from_rotation_z(self.roll) * Vec3::Y
    }

    /// Where the pointer and scroll offset want the camera to be.
    pub fn target_for(input: &PointerInput) -> Vec3 {
        Vec3::new(
            input.x * CAMERA_POINTER_X,
            -input.y * CAMERA_POINTER_Y,
            CAMERA_REST_Z - input.scroll_y * CAMERA_SCROLL_DEPTH,
        )
    }

    /// One fixed-step smoothing frame toward the pointer/scroll target.
    ///
    /// The factor is per frame, not per second: at 120 Hz the camera settles
    /// twice as fast as at 60 Hz.
    pub fn follow(&mut self, input: &PointerInput) {
        let target = Self::target_for(input);
        self.position += (target - self.position) * CAMERA_SMOOTHING;
    }

    pub fn sway(&mut self, t: f32) {
        self.roll = (t * CAMERA_ROLL_SPEED).sin() * CAMERA_ROLL_AMP;
    }
}
