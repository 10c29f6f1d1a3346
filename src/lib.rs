//! Portfolio gallery command-line surface.
//!
//! Wires the catalog sources, configuration and tracing around the project
//! catalog controller and renders its view.

pub mod bootstrap;
pub mod cli;
pub mod render;

pub use cli::{run, Cli, OutputFormat};
