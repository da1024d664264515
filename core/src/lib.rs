pub mod appearance;
pub mod case;
pub mod config;
pub mod interval;
pub mod intervals;
pub mod io;

pub use appearance::{appearance, appearance_detailed, Appearance, AppearanceInput};
