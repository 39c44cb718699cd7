// robotex_core/src/sensors/mod.rs

pub mod camera;
