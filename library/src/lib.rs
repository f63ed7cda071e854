//! AndroNES library front end
//!
//! Desktop pieces around `andrones-core`: the engine process launcher, a
//! host context backed by configuration, and the startup provisioning step.

pub mod engine;
pub mod host;
pub mod startup;

pub use engine::{EngineLauncher, find_engine_binary};
pub use host::DesktopHost;
pub use startup::provision_companion_script;
