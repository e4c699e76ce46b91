//! Error types

use thiserror::Error;

/// Errors raised while building plays or loading configuration.
///
/// Redundant calls from animation code (throwing while the disc is already
/// in flight, stopping a play that isn't running) are not errors and never
/// surface here.
#[derive(Error, Debug)]
pub enum PlayError {
    /// A path was built from an empty waypoint list
    #[error("path must contain at least one destination")]
    EmptyPath,

    #[error("invalid settings: {0}")]
    Config(#[from] serde_json::Error),
}
