//! Simulation core of a 2D chicken shooter.
//!
//! The library owns every rule of the game: entity motion, collisions,
//! scoring, spawning and the player's explosion. Windowing, audio, input and
//! drawing are reached through the traits in [`platform`].

pub mod collision;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod explosion;
pub mod factory;
pub mod geometry;
pub mod platform;
pub mod render;
pub mod spawn;

pub use config::Tunables;
pub use error::GameError;
pub use geometry::{BoundingBox, Vec2};
