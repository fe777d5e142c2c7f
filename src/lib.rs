//! BrainMatch (workspace facade crate).
//!
//! Re-exports the workspace crates as `brainmatch::{core,input,term,types}` and
//! hosts the pieces the binary wires together: configuration, logging and the
//! screen-level [`app::App`].

pub use brainmatch_core as core;
pub use brainmatch_input as input;
pub use brainmatch_term as term;
pub use brainmatch_types as types;

pub mod app;
pub mod config;
pub mod logging;
