use glam::Vec3;

// Shared scene tuning constants used by the animator and the web frontend.

// Palette (accent colors shared by every group)
pub const ACCENT_HEX: [u32; 5] = [0xFF3366, 0xFFD60A, 0x00F5D4, 0x7B61FF, 0x00E676];
pub const ACCENT_RGB: [[f32; 3]; 5] = [
    [1.0, 0.20, 0.40], // rose
    [1.0, 0.84, 0.04], // amber
    [0.0, 0.96, 0.83], // aqua
    [0.48, 0.38, 1.0], // violet
    [0.0, 0.90, 0.46], // green
];

// Density
pub const MOBILE_MAX_WIDTH: u32 = 768; // widths strictly below are "mobile"
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Fixed-step assumptions (tuned for ~60 Hz)
pub const REFERENCE_FPS: f32 = 60.0;
pub const CAMERA_SMOOTHING: f32 = 0.028;
pub const CURSOR_RING_SMOOTHING: f32 = 0.12;

// Device tilt: degrees that map to a full pointer deflection
pub const TILT_GAMMA_RANGE_DEG: f64 = 45.0;
pub const TILT_BETA_RANGE_DEG: f64 = 90.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_REST_Z: f32 = 30.0;
pub const CAMERA_POINTER_X: f32 = 4.0;
pub const CAMERA_POINTER_Y: f32 = 2.5;
pub const CAMERA_SCROLL_DEPTH: f32 = 0.005;
pub const CAMERA_ROLL_AMP: f32 = 0.004;
pub const CAMERA_ROLL_SPEED: f32 = 0.04;

// PointsMaterial sizes are screen-attenuated; this maps them to world-space
// billboard widths for a 60 degree vertical fov (tan(30deg)).
pub const POINT_SIZE_TO_WORLD: f32 = 0.577_350_3;

// A. Particle field
pub const GALAXY_COUNT_MOBILE: usize = 900;
pub const GALAXY_COUNT_DESKTOP: usize = 2800;
pub const GALAXY_ARMS: usize = 3;
pub const GALAXY_POINT_SIZE_MOBILE: f32 = 0.22;
pub const GALAXY_POINT_SIZE_DESKTOP: f32 = 0.15;

// B. Helix
pub const HELIX_LEVELS_MOBILE: usize = 48;
pub const HELIX_LEVELS_DESKTOP: usize = 90;
pub const HELIX_RADIUS: f32 = 2.8;
pub const HELIX_TURNS_RAD: f32 = std::f32::consts::PI * 9.0;
pub const HELIX_HEIGHT: f32 = 32.0;
pub const HELIX_Z: f32 = -18.0;
pub const HELIX_NODE_EVERY: usize = 5;
pub const HELIX_RUNG_OPACITY: f32 = 0.25;

// C. Floating shapes
pub const SHAPES_MOBILE: usize = 3;
pub const SHAPE_OPACITY_MOBILE: f32 = 0.12;
pub const SHAPE_OPACITY_DESKTOP: f32 = 0.17;

// D. Rings
pub const RINGS_MOBILE: usize = 3;
pub const RINGS_DESKTOP: usize = 5;
pub const RING_GROUP_ORIGIN: Vec3 = Vec3::new(0.0, 0.0, -20.0);
pub const RING_SEGMENTS: usize = 100;

// E. Node graph
pub const NODES_MOBILE: usize = 18;
pub const NODES_DESKTOP: usize = 35;
pub const NODE_HUB_EVERY: usize = 7;
pub const EDGE_DISTANCE: f32 = 13.0;
pub const EDGE_COLOR_HEX: u32 = 0x7B61FF;
pub const EDGE_OPACITY: f32 = 0.1;

// F. Grid floor
pub const GRID_SIZE: f32 = 100.0;
pub const GRID_DIVISIONS: usize = 32;
pub const GRID_CENTER_HEX: u32 = 0x0A0A1E;
pub const GRID_LINE_HEX: u32 = 0x0D0D22;
pub const GRID_BASE_Y: f32 = -14.0;
pub const GRID_OPACITY_MOBILE: f32 = 0.2;
pub const GRID_OPACITY_DESKTOP: f32 = 0.35;

// G. Burst
pub const BURST_POOL: usize = 250;
pub const BURST_GRAVITY: f32 = 0.0012; // per tick
pub const BURST_TICK_SECS: f32 = 0.017;
pub const BURST_START_OPACITY: f32 = 0.95;
pub const BURST_FADE_PER_SEC: f32 = 1.3;
pub const BURST_LIFETIME_SECS: f32 = 1.4;
pub const BURST_POINT_SIZE: f32 = 0.25;
pub const BURST_HIDDEN: Vec3 = Vec3::splat(9999.0);
pub const BURST_ORIGIN_SPREAD_X: f32 = 8.0;
pub const BURST_ORIGIN_SPREAD_Y: f32 = 4.0;

// Section band used to fire bursts while scrolling
pub const SECTION_BAND_PX: f64 = 120.0;

/// Convert a packed `0xRRGGBB` color to linear-ish `[r, g, b]` in 0..1.
#[inline]
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

/// Palette entry by index, wrapping around.
#[inline]
pub fn accent(i: usize) -> [f32; 3] {
    hex_rgb(ACCENT_HEX[i % ACCENT_HEX.len()])
}
