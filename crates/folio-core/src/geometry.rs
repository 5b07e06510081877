//! Wireframe generators for the decorative meshes.
//!
//! Every generator returns local-space line segments. Polyhedra are built
//! from triangles and reduced to unique edges so shared edges are drawn once.

use fnv::FnvHashSet;
use glam::Vec3;
use std::f32::consts::TAU;

pub type Wireframe = Vec<[Vec3; 2]>;

const WELD_EPSILON: f32 = 1e-4;

/// Collects triangles into a welded vertex table and a unique edge set.
#[derive(Default)]
struct EdgeSet {
    vertices: Vec<Vec3>,
    edges: FnvHashSet<(u32, u32)>,
    order: Vec<(u32, u32)>,
}

impl EdgeSet {
    fn weld(&mut self, p: Vec3) -> u32 {
        if let Some(i) = self
            .vertices
            .iter()
            .position(|v| v.distance_squared(p) < WELD_EPSILON * WELD_EPSILON)
        {
            return i as u32;
        }
        self.vertices.push(p);
        (self.vertices.len() - 1) as u32
    }

    fn edge(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        let key = (a.min(b), a.max(b));
        if self.edges.insert(key) {
            self.order.push(key);
        }
    }

    fn triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let (ia, ib, ic) = (self.weld(a), self.weld(b), self.weld(c));
        self.edge(ia, ib);
        self.edge(ib, ic);
        self.edge(ic, ia);
    }

    fn into_wireframe(self) -> Wireframe {
        self.order
            .iter()
            .map(|&(a, b)| [self.vertices[a as usize], self.vertices[b as usize]])
            .collect()
    }
}

const ICOSA_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosa_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Split one face into `(detail + 1)^2` triangles projected onto the sphere.
fn subdivide_face(out: &mut EdgeSet, a: Vec3, b: Vec3, c: Vec3, detail: u32, radius: f32) {
    let cols = detail as usize + 1;
    let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
    for i in 0..=cols {
        let f = i as f32 / cols as f32;
        let aj = a.lerp(c, f);
        let bj = b.lerp(c, f);
        let rows = cols - i;
        let row = (0..=rows)
            .map(|j| {
                if rows == 0 {
                    aj
                } else {
                    aj.lerp(bj, j as f32 / rows as f32)
                }
            })
            .collect();
        grid.push(row);
    }
    let project = |p: Vec3| p.normalize() * radius;
    for i in 0..cols {
        for j in 0..(2 * (cols - i) - 1) {
            let k = j / 2;
            if j % 2 == 0 {
                out.triangle(
                    project(grid[i][k + 1]),
                    project(grid[i + 1][k]),
                    project(grid[i][k]),
                );
            } else {
                out.triangle(
                    project(grid[i][k + 1]),
                    project(grid[i + 1][k + 1]),
                    project(grid[i + 1][k]),
                );
            }
        }
    }
}

pub fn icosahedron(radius: f32, detail: u32) -> Wireframe {
    let v = icosa_vertices();
    let mut set = EdgeSet::default();
    for [a, b, c] in ICOSA_FACES {
        subdivide_face(&mut set, v[a], v[b], v[c], detail, radius);
    }
    set.into_wireframe()
}

pub fn octahedron(radius: f32) -> Wireframe {
    let v = [Vec3::X, -Vec3::X, Vec3::Y, -Vec3::Y, Vec3::Z, -Vec3::Z].map(|p| p * radius);
    let mut out = Wireframe::with_capacity(12);
    for i in 0..v.len() {
        for j in (i + 1)..v.len() {
            // opposite poles are not connected
            if v[i].dot(v[j]) > -radius * radius * 0.5 {
                out.push([v[i], v[j]]);
            }
        }
    }
    out
}

/// Torus in the XY plane drawn as its parameter grid.
pub fn torus(radius: f32, tube: f32, radial_segments: usize, tubular_segments: usize) -> Wireframe {
    let point = |j: usize, i: usize| {
        let u = i as f32 / tubular_segments as f32 * TAU;
        let v = j as f32 / radial_segments as f32 * TAU;
        Vec3::new(
            (radius + tube * v.cos()) * u.cos(),
            (radius + tube * v.cos()) * u.sin(),
            tube * v.sin(),
        )
    };
    tube_grid(radial_segments, tubular_segments, point)
}

fn knot_curve(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let quo = q / p * u;
    let cs = quo.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * u.sin() * 0.5,
        radius * quo.sin() * 0.5,
    )
}

/// (2,3) torus knot swept with a circular tube, drawn as its parameter grid.
pub fn torus_knot(radius: f32, tube: f32, tubular_segments: usize, radial_segments: usize) -> Wireframe {
    let (p, q) = (2.0_f32, 3.0_f32);
    let point = |j: usize, i: usize| {
        let u = i as f32 / tubular_segments as f32 * p * TAU;
        let p1 = knot_curve(u, p, q, radius);
        let p2 = knot_curve(u + 0.01, p, q, radius);
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n);
        let n = b.cross(t).normalize();
        let b = b.normalize();
        let v = j as f32 / radial_segments as f32 * TAU;
        let cx = -tube * v.cos();
        let cy = tube * v.sin();
        p1 + n * cx + b * cy
    };
    tube_grid(radial_segments, tubular_segments, point)
}

fn tube_grid(radial: usize, tubular: usize, point: impl Fn(usize, usize) -> Vec3) -> Wireframe {
    let mut out = Wireframe::with_capacity(radial * tubular * 2);
    for j in 0..radial {
        for i in 0..tubular {
            let here = point(j, i);
            out.push([here, point(j, i + 1)]);
            out.push([here, point(j + 1, i)]);
        }
    }
    out
}

/// Closed circle in the XY plane.
pub fn circle(radius: f32, segments: usize) -> Wireframe {
    let at = |i: usize| {
        let a = i as f32 / segments as f32 * TAU;
        Vec3::new(a.cos() * radius, a.sin() * radius, 0.0)
    };
    (0..segments).map(|i| [at(i), at(i + 1)]).collect()
}

/// Square grid on the XZ plane, centered on the origin.
///
/// Returns the center lines separately so they can take their own color.
pub fn floor_grid(size: f32, divisions: usize) -> (Wireframe, Wireframe) {
    let half = size / 2.0;
    let step = size / divisions as f32;
    let center = divisions / 2;
    let mut lines = Wireframe::new();
    let mut center_lines = Wireframe::new();
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let pair = [
            [Vec3::new(-half, 0.0, k), Vec3::new(half, 0.0, k)],
            [Vec3::new(k, 0.0, -half), Vec3::new(k, 0.0, half)],
        ];
        if i == center {
            center_lines.extend(pair);
        } else {
            lines.extend(pair);
        }
    }
    (lines, center_lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octahedron_has_twelve_edges() {
        let w = octahedron(1.6);
        assert_eq!(w.len(), 12);
        for [a, b] in &w {
            assert!(((*a - *b).length() - 1.6 * 2.0_f32.sqrt()).abs() < 1e-4);
        }
    }

    #[test]
    fn icosahedron_edge_counts_follow_subdivision() {
        // Euler: E = 30 * (detail + 1)^2
        assert_eq!(icosahedron(1.0, 0).len(), 30);
        assert_eq!(icosahedron(1.8, 1).len(), 120);
        assert_eq!(icosahedron(1.2, 2).len(), 270);
    }

    #[test]
    fn icosahedron_vertices_lie_on_sphere() {
        for [a, b] in icosahedron(1.8, 1) {
            assert!((a.length() - 1.8).abs() < 1e-4);
            assert!((b.length() - 1.8).abs() < 1e-4);
        }
    }

    #[test]
    fn circle_closes() {
        let w = circle(4.0, 100);
        assert_eq!(w.len(), 100);
        assert!(w[99][1].distance(w[0][0]) < 1e-4);
    }

    #[test]
    fn floor_grid_splits_center_lines() {
        let (lines, center) = floor_grid(100.0, 32);
        assert_eq!(center.len(), 2);
        assert_eq!(lines.len(), 33 * 2 - 2);
        assert!(center[0][0].z.abs() < 1e-4);
    }
}
