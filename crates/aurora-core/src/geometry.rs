//! Swept tube meshes.
//!
//! A tube is rebuilt every frame from its trail chain: the chain is sampled
//! with a uniform Catmull-Rom spline, then a ring of vertices is swept along
//! the samples using parallel-transport frames so the ring orientation never
//! flips between neighboring segments.

use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct TubeMesh {
    pub vertices: Vec<TubeVertex>,
    pub indices: Vec<u32>,
}

/// Uniform Catmull-Rom interpolation between `p1` and `p2` at `t` in [0, 1].
#[inline]
pub fn catmull_rom_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - 3.0 * p2 + p3 - p0) * t3)
}

/// `segments + 1` spline samples through `points`, endpoints clamped.
pub fn sample_curve(points: &[Vec3], segments: usize) -> Vec<Vec3> {
    assert!(points.len() >= 2, "a curve needs at least two control points");
    assert!(segments >= 1);
    let n = points.len();
    (0..=segments)
        .map(|s| {
            let u = s as f32 / segments as f32 * (n - 1) as f32;
            let i = (u.floor() as usize).min(n - 2);
            let t = u - i as f32;
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(n - 1)];
            catmull_rom_point(p0, p1, p2, p3, t)
        })
        .collect()
}

/// Ring vertices for a tube of `radius` swept along the sampled curve.
///
/// `(segments + 1) * (radial + 1)` vertices; the seam vertex is duplicated so
/// the ring closes with continuous texture-free shading.
pub fn sweep_vertices(
    points: &[Vec3],
    segments: usize,
    radius: f32,
    radial: usize,
) -> Vec<TubeVertex> {
    let path = sample_curve(points, segments);
    let tangents = path_tangents(&path);

    let mut vertices = Vec::with_capacity((segments + 1) * (radial + 1));
    let mut normal = perpendicular_to(tangents[0]);
    for (&center, &tangent) in path.iter().zip(&tangents) {
        // transport the previous ring normal: strip the tangent component
        let flat = normal - tangent * normal.dot(tangent);
        normal = if flat.length_squared() > 1e-12 {
            flat.normalize()
        } else {
            perpendicular_to(tangent)
        };
        let binormal = tangent.cross(normal);

        for j in 0..=radial {
            let theta = (j % radial) as f32 / radial as f32 * TAU;
            let dir = normal * theta.cos() + binormal * theta.sin();
            vertices.push(TubeVertex {
                position: (center + dir * radius).to_array(),
                normal: dir.to_array(),
            });
        }
    }
    vertices
}

/// Index list for the fixed tube topology. Independent of the point data, so
/// callers can build it once and re-upload only vertices per frame.
pub fn tube_indices(segments: usize, radial: usize) -> Vec<u32> {
    let ring = (radial + 1) as u32;
    let mut indices = Vec::with_capacity(segments * radial * 6);
    for s in 0..segments as u32 {
        for j in 0..radial as u32 {
            let a = s * ring + j;
            let b = a + 1;
            let c = a + ring;
            let d = c + 1;
            indices.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }
    indices
}

pub fn build_tube(points: &[Vec3], segments: usize, radius: f32, radial: usize) -> TubeMesh {
    TubeMesh {
        vertices: sweep_vertices(points, segments, radius, radial),
        indices: tube_indices(segments, radial),
    }
}

fn path_tangents(path: &[Vec3]) -> Vec<Vec3> {
    let n = path.len();
    (0..n)
        .map(|i| {
            let ahead = path[(i + 1).min(n - 1)];
            let behind = path[i.saturating_sub(1)];
            let d = ahead - behind;
            if d.length_squared() > 1e-12 {
                d.normalize()
            } else {
                // degenerate chain (all points coincident): any axis works
                Vec3::Z
            }
        })
        .collect()
}

fn perpendicular_to(t: Vec3) -> Vec3 {
    // world axis least aligned with the tangent
    let axis = if t.x.abs() <= t.y.abs() && t.x.abs() <= t.z.abs() {
        Vec3::X
    } else if t.y.abs() <= t.z.abs() {
        Vec3::Y
    } else {
        Vec3::Z
    };
    let p = axis - t * axis.dot(t);
    if p.length_squared() > 1e-12 {
        p.normalize()
    } else {
        Vec3::X
    }
}
