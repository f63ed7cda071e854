//! Application state shared by front ends
//!
//! Configuration loading and the owned library view. Front ends (the
//! `andrones` binary, tests) build on these instead of keeping their own
//! state.

pub mod config;
pub mod view;

pub use config::Config;
pub use view::{
    CatalogRow, EMPTY_LIBRARY_MESSAGE, LibraryView, Notification, Presentation, render,
};
