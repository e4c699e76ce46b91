//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - The periodic animation timer
//! - The 2D drawing surface (canvas on the web)

pub mod timer;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use timer::{ManualTimer, Timer, TimerHandle};
