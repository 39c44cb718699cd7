// robotex_core/src/lib.rs

//! Engine-agnostic core of the Robotex on-robot camera.
//!
//! The camera answers one question per simulation tick: which balls and goals
//! lie inside a triangular field-of-view wedge carried by a moving body, how
//! far away they are, and in which direction. Balls get "virtual" ids that
//! stay stable only while they remain continuously in view, the way a real
//! vision pipeline would track them.
//!
//! Everything engine-specific (rigid bodies, the ball/goal registry, painting)
//! is reached through the traits in [`abstractions`] and [`paint`].

pub mod abstractions;
pub mod errors;
pub mod feed;
pub mod geometry;
pub mod messages;
pub mod models;
pub mod paint;
pub mod prelude;
pub mod registry;
pub mod sensors;
pub mod tracking;
pub mod types;
