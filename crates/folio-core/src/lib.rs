pub mod camera;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod draw;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod groups;
pub mod input;
pub mod scene;

pub static BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use draw::*;
pub use error::*;
pub use input::*;
pub use scene::*;
