//! Parametric solids: cylinders (prisms, cones, pyramids), spheres and boxes.
//!
//! All shapes are Y-up and centered on the origin, emit the
//! [`VertexAttributes::STANDARD`](crate::VertexAttributes::STANDARD) schema and
//! use counter-clockwise front faces. Angles follow the usual convention where
//! `theta = 0` points along +Z and increases towards +X.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::geometry::Geometry;

/// Parameters for [`cylinder`].
///
/// With six radial segments this is a hexagonal prism; with a zero top radius
/// it is a cone (or a pyramid for low segment counts).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderParams {
    /// Radius of the top ring.
    pub radius_top: f32,
    /// Radius of the bottom ring.
    pub radius_bottom: f32,
    /// Total height, split evenly above and below the origin.
    pub height: f32,
    /// Segments around the circumference (minimum 3).
    pub radial_segments: u32,
    /// Rows along the height (minimum 1).
    pub height_segments: u32,
    /// Skip the end caps.
    pub open_ended: bool,
    /// Start angle of the first segment, in radians.
    pub theta_start: f32,
    /// Angular extent, in radians.
    pub theta_length: f32,
}

impl CylinderParams {
    /// A closed shape with the given radii, height and radial segments.
    pub fn new(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Self {
        Self {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
            ..Default::default()
        }
    }

    /// Sets the start angle.
    pub fn with_theta_start(mut self, theta_start: f32) -> Self {
        self.theta_start = theta_start;
        self
    }
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius_top: 1.0,
            radius_bottom: 1.0,
            height: 1.0,
            radial_segments: 32,
            height_segments: 1,
            open_ended: false,
            theta_start: 0.0,
            theta_length: TAU,
        }
    }
}

/// Builds a cylinder, cone or prism.
pub fn cylinder(params: &CylinderParams) -> Geometry {
    let radial = params.radial_segments.max(3);
    let rows = params.height_segments.max(1);
    let half_height = params.height * 0.5;
    let mut geo = Geometry::new();

    // Zero-height columns are legal; keep their side normals horizontal.
    let slope = if params.height > 0.0 {
        (params.radius_bottom - params.radius_top) / params.height
    } else {
        0.0
    };

    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(rows as usize + 1);
    for y in 0..=rows {
        let v = y as f32 / rows as f32;
        let radius = v * (params.radius_bottom - params.radius_top) + params.radius_top;
        let mut row = Vec::with_capacity(radial as usize + 1);
        for x in 0..=radial {
            let u = x as f32 / radial as f32;
            let theta = u * params.theta_length + params.theta_start;
            let (sin, cos) = theta.sin_cos();
            let position = Vec3::new(radius * sin, -v * params.height + half_height, radius * cos);
            let normal = Vec3::new(sin, slope, cos).normalize_or_zero();
            row.push(geo.push_vertex(position, normal, [u, 1.0 - v]));
        }
        grid.push(row);
    }

    for x in 0..radial as usize {
        for y in 0..rows as usize {
            let a = grid[y][x];
            let b = grid[y + 1][x];
            let c = grid[y + 1][x + 1];
            let d = grid[y][x + 1];
            geo.push_triangle(a, b, d);
            geo.push_triangle(b, c, d);
        }
    }

    if !params.open_ended {
        if params.radius_top > 0.0 {
            push_cap(&mut geo, params, radial, true);
        }
        if params.radius_bottom > 0.0 {
            push_cap(&mut geo, params, radial, false);
        }
    }

    geo
}

fn push_cap(geo: &mut Geometry, params: &CylinderParams, radial: u32, top: bool) {
    let radius = if top {
        params.radius_top
    } else {
        params.radius_bottom
    };
    let sign = if top { 1.0 } else { -1.0 };
    let y = params.height * 0.5 * sign;
    let normal = Vec3::new(0.0, sign, 0.0);

    // One center vertex per segment so every wedge gets its own UV.
    let center_start = geo.vertex_count() as u32;
    for _ in 0..radial {
        geo.push_vertex(Vec3::new(0.0, y, 0.0), normal, [0.5, 0.5]);
    }
    let ring_start = geo.vertex_count() as u32;
    for x in 0..=radial {
        let u = x as f32 / radial as f32;
        let theta = u * params.theta_length + params.theta_start;
        let (sin, cos) = theta.sin_cos();
        geo.push_vertex(
            Vec3::new(radius * sin, y, radius * cos),
            normal,
            [cos * 0.5 + 0.5, sin * 0.5 * sign + 0.5],
        );
    }

    for x in 0..radial {
        let c = center_start + x;
        let i = ring_start + x;
        if top {
            geo.push_triangle(i, i + 1, c);
        } else {
            geo.push_triangle(i + 1, i, c);
        }
    }
}

/// Parameters for [`sphere`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereParams {
    pub radius: f32,
    /// Horizontal segments (minimum 3).
    pub width_segments: u32,
    /// Vertical segments (minimum 2).
    pub height_segments: u32,
    /// Horizontal start angle.
    pub phi_start: f32,
    /// Horizontal sweep.
    pub phi_length: f32,
    /// Vertical start angle, measured from the +Y pole.
    pub theta_start: f32,
    /// Vertical sweep.
    pub theta_length: f32,
}

impl SphereParams {
    /// A full sphere.
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self {
            radius,
            width_segments,
            height_segments,
            ..Default::default()
        }
    }
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 32,
            height_segments: 16,
            phi_start: 0.0,
            phi_length: TAU,
            theta_start: 0.0,
            theta_length: PI,
        }
    }
}

/// Builds a UV sphere, or a band of one when the theta range is partial.
pub fn sphere(params: &SphereParams) -> Geometry {
    let width = params.width_segments.max(3);
    let height = params.height_segments.max(2);
    let theta_end = (params.theta_start + params.theta_length).min(PI);
    let mut geo = Geometry::new();

    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(height as usize + 1);
    for iy in 0..=height {
        let v = iy as f32 / height as f32;

        // Pole vertices sit halfway across their segment in UV space.
        let u_offset = if iy == 0 && params.theta_start == 0.0 {
            0.5 / width as f32
        } else if iy == height && theta_end == PI {
            -0.5 / width as f32
        } else {
            0.0
        };

        let theta = params.theta_start + v * params.theta_length;
        let mut row = Vec::with_capacity(width as usize + 1);
        for ix in 0..=width {
            let u = ix as f32 / width as f32;
            let phi = params.phi_start + u * params.phi_length;
            let position = Vec3::new(
                -params.radius * phi.cos() * theta.sin(),
                params.radius * theta.cos(),
                params.radius * phi.sin() * theta.sin(),
            );
            let normal = position.normalize_or_zero();
            row.push(geo.push_vertex(position, normal, [u + u_offset, 1.0 - v]));
        }
        grid.push(row);
    }

    for iy in 0..height as usize {
        for ix in 0..width as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];
            if iy != 0 || params.theta_start > 0.0 {
                geo.push_triangle(a, b, d);
            }
            if iy != height as usize - 1 || theta_end < PI {
                geo.push_triangle(b, c, d);
            }
        }
    }

    geo
}

/// Builds an axis-aligned box with one quad per face.
pub fn cuboid(width: f32, height: f32, depth: f32) -> Geometry {
    // (normal, u axis, v axis) with u x v == normal.
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    const CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

    let half = Vec3::new(width, height, depth) * 0.5;
    let mut geo = Geometry::new();

    for (normal, u_axis, v_axis) in FACES {
        let center = normal * half;
        let base = geo.vertex_count() as u32;
        for (su, sv) in CORNERS {
            let position = center + u_axis * half * su + v_axis * half * sv;
            geo.push_vertex(position, normal, [(su + 1.0) * 0.5, (sv + 1.0) * 0.5]);
        }
        geo.push_triangle(base, base + 1, base + 2);
        geo.push_triangle(base, base + 2, base + 3);
    }

    geo
}
