//! Engine process handoff
//!
//! The engine is a separate executable. It receives the positional argument
//! vector from a [`LaunchConfiguration`](andrones_core::LaunchConfiguration)
//! and runs with the bundled assets root as its working directory.

mod launcher;
mod process;

pub use launcher::EngineLauncher;
pub use process::find_engine_binary;
