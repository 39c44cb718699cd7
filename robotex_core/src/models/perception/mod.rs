// robotex_core/src/models/perception/mod.rs

//! Geometric sensing models. Each model describes *what region* a sensor can
//! observe in its own local frame; the sensor controllers in
//! [`crate::sensors`] place that region in the world every tick.

pub mod field_of_view;
