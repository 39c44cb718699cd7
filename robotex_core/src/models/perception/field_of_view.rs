// robotex_core/src/models/perception/field_of_view.rs

use crate::errors::VisionError;
use crate::geometry::Polygon2;
use nalgebra::Point2;
use tracing::debug;

/// The triangular viewing wedge of a camera, in the sensor's local frame.
///
/// The wedge has its apex at the sensor origin and its two far corners at
/// `range` along the cone edges. An `angle` of 0° points the wedge along the
/// carrying body's forward axis (local -Y).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOfView {
    /// Orientation of the cone axis relative to the body, in degrees.
    angle: f64,
    /// Full cone width in degrees.
    angle_of_view: f64,
    /// Maximum sensing distance in world units.
    range: f64,
    wedge: Polygon2,
}

impl FieldOfView {
    pub fn new(angle: f64, angle_of_view: f64, range: f64) -> Result<Self, VisionError> {
        validate(angle, angle_of_view, range)?;
        Ok(Self {
            angle,
            angle_of_view,
            range,
            wedge: build_wedge(angle, angle_of_view, range),
        })
    }

    /// Replaces the geometry and rebuilds the local wedge.
    ///
    /// On error nothing changes: the previous configuration stays in effect.
    pub fn configure(
        &mut self,
        angle: f64,
        angle_of_view: f64,
        range: f64,
    ) -> Result<(), VisionError> {
        validate(angle, angle_of_view, range)?;
        if (angle, angle_of_view, range) == (self.angle, self.angle_of_view, self.range) {
            return Ok(());
        }

        self.angle = angle;
        self.angle_of_view = angle_of_view;
        self.range = range;
        self.wedge = build_wedge(angle, angle_of_view, range);
        debug!(angle, angle_of_view, range, "field of view reconfigured");
        Ok(())
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn angle_of_view(&self) -> f64 {
        self.angle_of_view
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    /// Apex first, then the far corners at `-aov/2` and `+aov/2`.
    pub fn local_wedge(&self) -> &Polygon2 {
        &self.wedge
    }
}

impl Default for FieldOfView {
    /// A 90° cone reaching 2 m straight ahead.
    fn default() -> Self {
        Self {
            angle: 0.0,
            angle_of_view: 90.0,
            range: 2.0,
            wedge: build_wedge(0.0, 90.0, 2.0),
        }
    }
}

fn validate(angle: f64, angle_of_view: f64, range: f64) -> Result<(), VisionError> {
    if !angle.is_finite() {
        return Err(VisionError::InvalidParameter {
            name: "angle",
            value: angle,
            reason: "must be finite",
        });
    }
    if !(0.0..=360.0).contains(&angle_of_view) {
        return Err(VisionError::InvalidParameter {
            name: "angle_of_view",
            value: angle_of_view,
            reason: "must lie within 0..=360 degrees",
        });
    }
    if !(range.is_finite() && range > 0.0) {
        return Err(VisionError::InvalidParameter {
            name: "range",
            value: range,
            reason: "must be positive and finite",
        });
    }
    Ok(())
}

fn build_wedge(angle: f64, angle_of_view: f64, range: f64) -> Polygon2 {
    let corner = |edge_offset: f64| {
        let theta = (edge_offset + angle - 90.0).to_radians();
        Point2::new(range * theta.cos(), range * theta.sin())
    };

    Polygon2::new(vec![
        Point2::origin(),
        corner(-angle_of_view / 2.0),
        corner(angle_of_view / 2.0),
    ])
}
