//! Rendering module
//!
//! `frame` turns game state into a triangle list; `pipeline` pushes that list
//! through WebGPU.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::build_frame;
pub use pipeline::RenderState;
pub use vertex::Vertex;
