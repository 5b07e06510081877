//! The scene animator: owns every group, advances them per frame and hands
//! the flattened result to a [`Renderable`].

use crate::camera::Camera;
use crate::config::{SceneConfig, Viewport};
use crate::draw::{DrawList, FrameView, Renderable};
use crate::groups::*;
use crate::input::PointerInput;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct SceneAnimator {
    config: SceneConfig,
    viewport: Viewport,
    pub galaxy: Galaxy,
    pub helix: Helix,
    pub shapes: FloatingShapes,
    pub rings: RingSet,
    pub network: NodeGraph,
    pub grid: GridFloor,
    pub burst: BurstEmitter,
    pub camera: Camera,
    draw: DrawList,
}

impl SceneAnimator {
    /// Build with density picked from the viewport width.
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        Self::with_config(SceneConfig::for_viewport(&viewport), viewport, seed)
    }

    pub fn with_config(config: SceneConfig, viewport: Viewport, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let galaxy = Galaxy::new(&config, &mut rng);
        let helix = Helix::new(&config);
        let shapes = FloatingShapes::new(&config, &mut rng);
        let rings = RingSet::new(&config);
        let network = NodeGraph::new(&config, &mut rng);
        let grid = GridFloor::new(&config);
        let burst = BurstEmitter::new(&config, &mut rng);
        log::debug!(
            "[scene] mobile={} points={} helix={} shapes={} rings={} nodes={} edges={} burst={}",
            config.mobile,
            galaxy.len(),
            helix.nodes().len(),
            shapes.len(),
            rings.len(),
            network.nodes().len(),
            network.edges().len(),
            burst.len()
        );
        Self {
            camera: Camera::new(viewport.aspect()),
            config,
            viewport,
            galaxy,
            helix,
            shapes,
            rings,
            network,
            grid,
            burst,
            draw: DrawList::default(),
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Recompute aspect and surface size. Group geometry is untouched and the
    /// density chosen at construction is kept.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }

    pub fn trigger_burst(&mut self, origin: Vec3) {
        self.burst.trigger(origin);
    }

    /// Advance all derived state to time `t` (seconds since start).
    ///
    /// Groups are posed as pure functions of `t`; the burst pool and the
    /// camera position take one fixed step each call.
    pub fn tick(&mut self, t: f32, input: &PointerInput) {
        self.galaxy.animate(t);
        self.helix.animate(t);
        self.shapes.animate(t);
        self.rings.animate(t);
        self.network.animate(t);
        self.grid.animate(t);
        self.burst.step();
        self.camera.follow(input);
        self.camera.sway(t);
    }

    /// Flatten the current derived state, in declared group order.
    pub fn build_draw_list(&self, out: &mut DrawList) {
        out.clear();
        self.galaxy.emit(out);
        self.helix.emit(out);
        self.shapes.emit(out);
        self.rings.emit(out);
        self.network.emit(out);
        self.grid.emit(out);
        self.burst.emit(out);
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw
    }

    /// Tick, flatten and submit one frame to `surface`.
    pub fn frame<R: Renderable>(
        &mut self,
        t: f32,
        input: &PointerInput,
        surface: &mut R,
    ) -> Result<(), R::Error> {
        self.tick(t, input);
        let mut draw = std::mem::take(&mut self.draw);
        self.build_draw_list(&mut draw);
        self.draw = draw;
        surface.update(&FrameView {
            draw: &self.draw,
            view_proj: self.camera.view_proj(),
            camera_right: self.camera.right(),
            camera_up: self.camera.up(),
        });
        surface.submit()
    }
}
