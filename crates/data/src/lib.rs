//! Loading and validation for card catalogs and game settings.

pub mod load;

pub use load::*;
