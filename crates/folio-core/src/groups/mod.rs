//! The decorative groups that make up the backdrop.
//!
//! Each group is built once from a [`SceneConfig`](crate::config::SceneConfig)
//! and keeps its rest geometry private. `animate(t)` rewrites only the
//! group's derived state; `emit` appends that frame's primitives to a
//! [`DrawList`](crate::draw::DrawList).

pub mod burst;
pub mod galaxy;
pub mod grid;
pub mod helix;
pub mod network;
pub mod rings;
pub mod shapes;

pub use burst::BurstEmitter;
pub use galaxy::{Galaxy, GalaxyState};
pub use grid::GridFloor;
pub use helix::{Helix, HelixNode, HelixRung, HelixState};
pub use network::{edges_within, GraphNode, NodeGraph, NodeSeed, NodeState};
pub use rings::{Ring, RingSet, RingState};
pub use shapes::{FloatingShapes, ShapeDef, ShapeKind, ShapeMotion, ShapeState, SHAPE_DEFS};
