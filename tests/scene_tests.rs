// Host-side tests for the scene animator and its groups.

use folio_core::groups::{edges_within, BurstEmitter, NodeGraph, NodeSeed};
use folio_core::*;
use glam::Vec3;

const EPS: f32 = 1e-5;

fn desktop() -> Viewport {
    Viewport::new(1280, 800, 1.0).unwrap()
}

fn phone() -> Viewport {
    Viewport::new(390, 844, 3.0).unwrap()
}

#[derive(Default)]
struct Recorder {
    updates: usize,
    submits: usize,
    sprites: usize,
    segments: usize,
}

impl Renderable for Recorder {
    type Error = ();

    fn update(&mut self, frame: &FrameView<'_>) {
        self.updates += 1;
        self.sprites = frame.draw.sprites.len();
        self.segments = frame.draw.segment_count();
    }

    fn submit(&mut self) -> Result<(), ()> {
        self.submits += 1;
        Ok(())
    }
}

#[test]
fn desktop_density_counts() {
    let a = SceneAnimator::new(desktop(), 1);
    assert!(!a.config().mobile);
    assert_eq!(a.galaxy.len(), 2800);
    assert_eq!(a.helix.nodes().len(), 180);
    assert_eq!(a.shapes.len(), 6);
    assert_eq!(a.rings.len(), 5);
    assert_eq!(a.network.nodes().len(), 35);
    assert_eq!(a.burst.len(), 250);
}

#[test]
fn mobile_density_counts() {
    let a = SceneAnimator::new(phone(), 1);
    assert!(a.config().mobile);
    assert_eq!(a.galaxy.len(), 900);
    assert_eq!(a.helix.nodes().len(), 96);
    assert_eq!(a.shapes.len(), 3);
    assert_eq!(a.rings.len(), 3);
    assert_eq!(a.network.nodes().len(), 18);
    assert_eq!(a.burst.len(), 250);
}

#[test]
fn same_seed_generates_same_scene() {
    let a = SceneAnimator::new(desktop(), 42);
    let b = SceneAnimator::new(desktop(), 42);
    assert_eq!(a.galaxy.positions(), b.galaxy.positions());
    assert_eq!(a.shapes.motions(), b.shapes.motions());
    assert_eq!(a.network.edges(), b.network.edges());
    assert_eq!(a.burst.base_velocities(), b.burst.base_velocities());
}

#[test]
fn galaxy_stays_within_its_disc() {
    let a = SceneAnimator::new(desktop(), 3);
    for p in a.galaxy.positions() {
        // disc is centred 8 units behind the origin
        let r = (p.x * p.x + (p.z + 8.0) * (p.z + 8.0)).sqrt();
        assert!(r <= 39.5 + 1.1, "radius {r}");
        assert!(p.y.abs() <= 1.75);
    }
}

#[test]
fn group_poses_depend_only_on_time() {
    let mut a = SceneAnimator::new(desktop(), 9);
    let mut b = SceneAnimator::new(desktop(), 9);
    let still = PointerInput::default();
    let moving = PointerInput {
        x: 0.7,
        y: -0.3,
        scroll_y: 900.0,
    };
    for i in 0..50 {
        a.tick(i as f32 * 0.1, &moving);
    }
    a.tick(7.25, &moving);
    b.tick(7.25, &still);

    assert_eq!(a.galaxy.state, b.galaxy.state);
    assert_eq!(a.helix.state, b.helix.state);
    assert_eq!(a.shapes.states, b.shapes.states);
    assert_eq!(a.rings.states, b.rings.states);
    assert_eq!(a.network.states, b.network.states);
    assert_eq!(a.grid.y, b.grid.y);
}

fn close(actual: f32, expected: f32, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "{what}: got {actual}, expected {expected}"
    );
}

#[test]
fn group_poses_follow_update_formulas() {
    let t = 3.7_f32;
    let mut a = SceneAnimator::new(desktop(), 17);
    a.tick(t, &PointerInput::default());

    close(a.galaxy.state.rotation_y, 0.05 * t, "galaxy rotation");
    close(a.galaxy.state.opacity, 0.65 + 0.1 * (0.2 * t).sin(), "galaxy opacity");

    close(a.helix.state.rotation_y, 0.1 * t, "helix rotation");
    close(a.helix.state.offset_x, 2.5 * (0.07 * t).sin(), "helix offset");
    for (i, node) in a.helix.nodes().iter().enumerate() {
        let fi = i as f32;
        close(
            a.helix.state.scales[i],
            0.85 + 0.18 * (1.8 * t + 0.22 * fi).sin(),
            "helix scale",
        );
        close(
            a.helix.state.opacities[i],
            node.base_opacity * (0.55 + 0.45 * (0.9 * t + 0.3 * fi).sin()),
            "helix opacity",
        );
    }

    for (m, s) in a.shapes.motions().iter().zip(&a.shapes.states) {
        close(
            s.y,
            m.base_position.y + m.float_amp * (m.float_speed * t + m.float_offset).sin(),
            "shape y",
        );
        close(
            s.opacity,
            m.base_opacity * (0.65 + 0.35 * (0.5 * t + m.pulse_offset).sin()),
            "shape opacity",
        );
    }

    for (r, s) in a.rings.rings().iter().zip(&a.rings.states) {
        close(s.opacity, 0.07 + 0.09 * (0.55 * t + r.pulse_offset).sin(), "ring opacity");
        close(s.scale, 1.0 + 0.04 * (0.28 * t + r.pulse_offset).sin(), "ring scale");
    }

    for (n, s) in a.network.nodes().iter().zip(&a.network.states) {
        let NodeSeed {
            position,
            float_speed: fs,
            float_offset: fo,
            float_amp: fa,
        } = n.seed;
        close(s.position.x, position.x + 0.35 * (0.6 * fs * t + fo).cos(), "node x");
        close(s.position.y, position.y + fa * (fs * t + fo).sin(), "node y");
        close(s.position.z, position.z, "node z");
        close(s.opacity, n.base_opacity * (0.5 + 0.5 * (0.7 * t + fo).sin()), "node opacity");
    }

    close(a.grid.y, -14.0 + 0.8 * (0.18 * t).sin(), "grid y");
}

#[test]
fn galaxy_opacity_bounds() {
    let mut a = SceneAnimator::new(phone(), 5);
    let input = PointerInput::default();
    for i in 0..400 {
        a.tick(i as f32 * 0.137, &input);
        let o = a.galaxy.state.opacity;
        assert!((0.55 - EPS..=0.75 + EPS).contains(&o), "opacity {o}");
    }
}

#[test]
fn ring_opacity_is_raw_but_emitted_alpha_is_clamped() {
    let mut a = SceneAnimator::new(desktop(), 5);
    let input = PointerInput::default();
    let mut list = DrawList::default();
    let mut saw_negative = false;
    for i in 0..600 {
        a.tick(i as f32 * 0.05, &input);
        for s in &a.rings.states {
            assert!((-0.02 - EPS..=0.16 + EPS).contains(&s.opacity));
            saw_negative |= s.opacity < 0.0;
        }
        a.build_draw_list(&mut list);
        assert!(list.lines.iter().all(|v| (0.0..=1.0).contains(&v.color[3])));
        assert!(list.sprites.iter().all(|v| (0.0..=1.0).contains(&v.color[3])));
    }
    assert!(saw_negative);
}

#[test]
fn burst_expires_after_lifetime() {
    let mut a = SceneAnimator::new(desktop(), 11);
    assert!(!a.burst.is_active());
    a.trigger_burst(Vec3::new(1.0, 2.0, 0.0));
    assert!(a.burst.is_active());
    assert!((a.burst.opacity() - 0.95).abs() < EPS);

    let ticks = (1.5 / BURST_TICK_SECS).ceil() as usize;
    let input = PointerInput::default();
    for i in 0..ticks {
        a.tick(i as f32 / 60.0, &input);
    }
    assert!(!a.burst.is_active());
    assert_eq!(a.burst.opacity(), 0.0);
}

#[test]
fn burst_opacity_fades_linearly() {
    let mut b = BurstEmitter::from_velocities(vec![Vec3::X * 0.1; 4]);
    b.trigger(Vec3::ZERO);
    for _ in 0..10 {
        b.step();
    }
    let expected = 0.95 - 10.0 * BURST_TICK_SECS * 1.3;
    assert!((b.opacity() - expected).abs() < 1e-4);
    // gravity pulls every particle below its ballistic path
    for (p, v) in b.positions().iter().zip(b.velocities()) {
        assert!(v.y < 0.0);
        assert!((p.x - 1.0).abs() < 1e-4);
    }
}

#[test]
fn trigger_places_pool_at_given_origin() {
    let mut b = BurstEmitter::from_velocities(vec![Vec3::X; 3]);
    let origin = Vec3::new(3.0, -1.5, 0.0);
    b.trigger(origin);
    assert!(b.positions().iter().all(|p| *p == origin));
}

#[test]
fn inactive_burst_does_not_move() {
    let mut b = BurstEmitter::from_velocities(vec![Vec3::Y; 3]);
    b.step();
    assert_eq!(b.elapsed(), 0.0);
    assert!(b.positions().iter().all(|p| *p == BURST_HIDDEN));
    let mut list = DrawList::default();
    b.emit(&mut list);
    assert!(list.sprites.is_empty());
}

#[test]
fn retrigger_resets_positions_and_velocities() {
    let mut a = SceneAnimator::new(desktop(), 13);
    a.trigger_burst(Vec3::new(3.0, 1.0, 0.0));
    let input = PointerInput::default();
    for i in 0..30 {
        a.tick(i as f32 / 60.0, &input);
    }
    let origin = Vec3::new(-2.0, 0.5, 0.0);
    a.trigger_burst(origin);
    assert!(a.burst.positions().iter().all(|p| *p == origin));
    assert_eq!(a.burst.velocities(), a.burst.base_velocities());
    assert_eq!(a.burst.elapsed(), 0.0);
    assert!((a.burst.opacity() - 0.95).abs() < EPS);
}

#[test]
fn random_origin_stays_in_spread() {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(4);
    for _ in 0..200 {
        let o = BurstEmitter::random_origin(&mut rng);
        assert!(o.x.abs() <= 4.0 && o.y.abs() <= 2.0 && o.z == 0.0);
    }
}

fn seed(x: f32, y: f32, z: f32) -> NodeSeed {
    NodeSeed {
        position: Vec3::new(x, y, z),
        float_speed: 0.3,
        float_offset: 0.0,
        float_amp: 0.5,
    }
}

#[test]
fn node_graph_edges_match_hand_computed_pairs() {
    let graph = NodeGraph::from_seeds(vec![
        seed(0.0, 0.0, 0.0),
        seed(10.0, 0.0, 0.0),
        seed(0.0, 12.0, 0.0),
        seed(30.0, 0.0, 0.0),
        seed(22.0, 0.0, 0.0),
        // exactly 13 away from node 0: not connected
        seed(0.0, 0.0, -13.0),
    ]);
    assert_eq!(graph.edges(), &[(0, 1), (0, 2), (1, 4), (3, 4)]);
}

#[test]
fn edges_use_rest_positions_while_nodes_drift() {
    let mut graph = NodeGraph::from_seeds(vec![seed(0.0, 0.0, 0.0), seed(12.9, 0.0, 0.0)]);
    let before = graph.edges().to_vec();
    graph.animate(3.3);
    assert_eq!(graph.edges(), before.as_slice());
    assert_ne!(graph.states[0].position, Vec3::ZERO);
    let mut list = DrawList::default();
    graph.emit(&mut list);
    assert_eq!(list.segment_count(), 1);
    assert_eq!(list.lines[0].position, [0.0, 0.0, 0.0]);
    assert_eq!(list.lines[1].position, [12.9, 0.0, 0.0]);
}

#[test]
fn edges_within_is_empty_for_lone_node() {
    assert!(edges_within(&[Vec3::ZERO], 13.0).is_empty());
    assert!(edges_within(&[], 13.0).is_empty());
}

#[test]
fn resize_keeps_geometry_and_density() {
    let mut a = SceneAnimator::new(desktop(), 21);
    let positions = a.galaxy.positions().to_vec();
    let edges = a.network.edges().to_vec();
    a.resize(Viewport::new(400, 800, 2.0).unwrap());
    assert!((a.camera.aspect - 0.5).abs() < EPS);
    assert_eq!(a.viewport().width(), 400);
    assert_eq!(a.viewport().surface_size(), (800, 1600));
    assert!(!a.config().mobile);
    assert_eq!(a.galaxy.positions(), positions.as_slice());
    assert_eq!(a.network.edges(), edges.as_slice());
    assert_eq!(a.shapes.len(), 6);
}

#[test]
fn frame_updates_then_submits_once() {
    let mut a = SceneAnimator::new(phone(), 2);
    let mut rec = Recorder::default();
    a.frame(0.25, &PointerInput::default(), &mut rec).unwrap();
    assert_eq!(rec.updates, 1);
    assert_eq!(rec.submits, 1);
    assert_eq!(rec.sprites, a.draw_list().sprites.len());
    assert_eq!(rec.segments, a.draw_list().segment_count());
    let min_sprites = a.galaxy.len() + a.helix.nodes().len() + a.network.nodes().len();
    assert!(rec.sprites >= min_sprites);
    assert!(rec.segments >= a.grid.segment_count());
}

#[test]
fn triggered_burst_shows_up_in_draw_list() {
    let mut a = SceneAnimator::new(phone(), 2);
    let mut rec = Recorder::default();
    let input = PointerInput::default();
    a.frame(0.0, &input, &mut rec).unwrap();
    let quiet = rec.sprites;
    a.trigger_burst(Vec3::ZERO);
    a.frame(0.016, &input, &mut rec).unwrap();
    assert_eq!(rec.sprites, quiet + BURST_POOL);
}
