// robotex_core/src/paint.rs

//! A rendering-agnostic painting contract. The core never draws anything
//! itself; renderers implement [`Canvas`] and call [`Paintable::paint`].

use crate::geometry::Polygon2;
use nalgebra::Point2;

/// Drawing surface in the painted object's local frame.
pub trait Canvas {
    fn fill_polygon(&mut self, polygon: &Polygon2);
    fn label(&mut self, at: Point2<f64>, text: &str);
}

/// Anything that can render its current state onto a [`Canvas`].
pub trait Paintable {
    fn paint(&self, canvas: &mut dyn Canvas);
}

/// A canvas that records draw calls as text lines, for logs and tests.
#[derive(Debug, Default, Clone)]
pub struct TextCanvas {
    lines: Vec<String>,
}

impl TextCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Canvas for TextCanvas {
    fn fill_polygon(&mut self, polygon: &Polygon2) {
        let vertices: Vec<String> = polygon
            .vertices()
            .iter()
            .map(|v| format!("({:.2}, {:.2})", v.x, v.y))
            .collect();
        self.lines.push(format!("polygon {}", vertices.join(" ")));
    }

    fn label(&mut self, at: Point2<f64>, text: &str) {
        self.lines.push(format!("({:.2}, {:.2}) {}", at.x, at.y, text));
    }
}
