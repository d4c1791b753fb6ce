//! Rendering module
//!
//! Converts simulation snapshots into vertex data any 2D backend can upload.

pub mod shapes;
pub mod vertex;

pub use shapes::{frame_vertices, rect_quad};
pub use vertex::{Vertex, colors};
