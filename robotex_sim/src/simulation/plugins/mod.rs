pub mod debugging;
pub mod sensors;
pub mod world;
