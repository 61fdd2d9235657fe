//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod rng;
pub mod schedule;
pub mod session;
pub mod timer;
pub mod turn;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use rng::*;
pub use schedule::*;
pub use session::*;
pub use timer::*;
pub use turn::*;
