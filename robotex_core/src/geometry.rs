// robotex_core/src/geometry.rs

//! 2D primitives shared by the field-of-view model and the camera.

use nalgebra::{Isometry2, Point2, Vector2};
use std::f64::consts::PI;

/// A simple (non-self-intersecting) polygon given by its ordered vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon2 {
    vertices: Vec<Point2<f64>>,
}

impl Polygon2 {
    pub fn new(vertices: Vec<Point2<f64>>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point2<f64>] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the closed edge loop, last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Boundary-inclusive containment, see [`point_in_polygon`].
    pub fn contains(&self, x: f64, y: f64) -> bool {
        point_in_polygon(self, x, y)
    }
}

/// Boundary-inclusive point containment.
///
/// Points lying exactly on an edge or a vertex count as inside; everything
/// else is decided by even-odd ray crossing. No epsilon is applied, so the
/// result only depends on plain floating-point comparisons.
pub fn point_in_polygon(polygon: &Polygon2, x: f64, y: f64) -> bool {
    let vertices = polygon.vertices();
    let p = Point2::new(x, y);

    match vertices.len() {
        0 => return false,
        1 => return vertices[0] == p,
        _ => {}
    }

    if polygon.edges().any(|(a, b)| on_segment(&a, &b, &p)) {
        return true;
    }
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (vi, vj) = (vertices[i], vertices[j]);
        if (vi.y > y) != (vj.y > y) {
            let x_cross = (vj.x - vi.x) * (y - vi.y) / (vj.y - vi.y) + vi.x;
            if x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn on_segment(a: &Point2<f64>, b: &Point2<f64>, p: &Point2<f64>) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if cross != 0.0 {
        return false;
    }
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Maps every vertex of a local-frame polygon through `pose` (rotation, then translation).
pub fn world_transform(polygon: &Polygon2, pose: &Isometry2<f64>) -> Polygon2 {
    Polygon2::new(polygon.vertices().iter().map(|v| pose * v).collect())
}

/// Unit vector pointing along `angle` (radians, counter-clockwise from +X).
pub fn unit_from_angle(angle: f64) -> Vector2<f64> {
    Vector2::new(angle.cos(), angle.sin())
}

/// Wraps an angle into (-π, π].
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(2.0 * PI);
    if wrapped > PI {
        wrapped - 2.0 * PI
    } else {
        wrapped
    }
}

/// Signed angle (radians) that rotates `from` onto `to`, counter-clockwise positive.
pub fn signed_angle(from: &Vector2<f64>, to: &Vector2<f64>) -> f64 {
    from.perp(to).atan2(from.dot(to))
}
