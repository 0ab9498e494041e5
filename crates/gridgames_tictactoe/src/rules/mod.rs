//! Outcome evaluation: win and draw detection.

pub mod draw;
pub mod win;
