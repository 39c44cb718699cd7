pub mod motion;
pub mod spawner;
