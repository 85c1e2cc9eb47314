//! Error types for wayfind shell operations.
//!
//! The graph core is total over its inputs and never fails; every error in
//! this crate comes from the shell itself: bad user input or terminal I/O.

use std::io;
use thiserror::Error;

/// The error type for wayfind shell operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A location name failed validation.
    #[error("Invalid location: {0}")]
    InvalidVertex(String),

    /// A distance argument failed validation.
    #[error("Invalid distance: {0}")]
    InvalidWeight(String),

    /// An unrecognized session command.
    #[error("Unknown command '{0}'. Type 'help' for the command list")]
    UnknownCommand(String),

    /// A session command was given the wrong arguments.
    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// A specialized Result type for wayfind shell operations.
pub type Result<T> = std::result::Result<T, Error>;
