//! Everything that decides what ends up on screen: the fixed geometry, the baked-in shaders and
//! the frame loop.

pub mod frame;
pub mod geometry;
pub mod shaders;
