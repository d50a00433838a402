//! Shared plumbing for the two LearnOpenGL-style demo binaries: SDL2 window
//! and context setup, thin wrappers over raw GL objects, and the
//! clear/draw/present frame loop both demos run.

pub mod config;
pub mod error;
pub mod geometry;
pub mod gl_wrappers;
pub mod mesh;
pub mod runner;
pub mod window;

pub use config::WindowConfig;
pub use error::{Error, GlError, SetupError};
pub use mesh::RectangleScene;
pub use runner::run_frame_loop;
pub use window::GlWindow;
