//! A bit Racey: steer the car, dodge the falling blocks.
//!
//! - `core`: entities, collision, spawning, score and phase
//! - `game`: one fixed simulation tick over the core
//! - `input`: held keys and touch points turned into tick input
//! - `rendering`: SDL2 presentation (behind the `gui` feature)

pub mod config;
pub mod constants;
pub mod core;
pub mod direction;
pub mod game;
pub mod geometry;
pub mod input;
#[cfg(feature = "gui")]
pub mod rendering;
pub mod statistics;
pub mod theme;
pub mod timing;

pub use config::Settings;
pub use game::{Game, TickInput, TickOutcome};
