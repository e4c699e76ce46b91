//! 2D canvas rendering
//!
//! Plays draw through the [`Surface`] trait so the same code drives a browser
//! canvas or a headless recorder.

pub mod draw;
pub mod surface;

pub use draw::{draw_field, draw_play};
pub use surface::{DrawCommand, Recorder, Surface};
