//! Interleaved vertex layout for handing mesh buffers to a render adapter.

use std::mem;

/// A single interleaved mesh vertex: position, texture coordinate, color.
///
/// 36 bytes, no padding; safe to upload as a raw byte slice via bytemuck.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Position in mesh-local coordinates.
    pub position: [f32; 3],
    /// Texture coordinates in `[0, 1] x [0, 1]`.
    pub uv: [f32; 2],
    /// Linear RGBA vertex color.
    pub color: [f32; 4],
}

// Layout must stay in sync with any pipeline consuming these vertices.
static_assertions::const_assert_eq!(mem::size_of::<MeshVertex>(), 36);
static_assertions::const_assert_eq!(mem::align_of::<MeshVertex>(), 4);
