//! Opens a window, compiles a fixed shader pair and draws two triangles until the window closes.

pub mod abs;
pub mod error;
pub mod logging;
pub mod render;

pub use error::Error;
