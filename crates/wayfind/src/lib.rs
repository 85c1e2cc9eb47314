//! Wayfind - an interactive shortest-route finder.
//!
//! This crate provides the `wayfind` CLI binary and the thin presentation
//! shell around the graph core: the application context, input validation,
//! the interactive session, and output formatting. The graph itself lives
//! in the `wayfind-graph` crate and knows nothing about any of this.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod app;
pub mod error;
pub mod output;
pub mod seed;

// Public CLI module (needed by binary)
pub mod cli;
