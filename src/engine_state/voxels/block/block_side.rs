//! # Block Side Module
//!
//! This module defines the six axis-aligned faces of a voxel cell and the
//! neighbor offset and normal that belong to each of them.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// The order is: [LEFT, RIGHT, BOTTOM, TOP, BACK, FRONT]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The left face (facing negative X)
    LEFT = 0,

    /// The right face (facing positive X)
    RIGHT = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The back face (facing negative Z)
    BACK = 4,

    /// The front face (facing positive Z)
    FRONT = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::BACK,
            BlockSide::FRONT,
        ]
    }

    /// The step from a cell to the neighbor that shares this face.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BACK => Vector3::new(0, 0, -1),
            BlockSide::FRONT => Vector3::new(0, 0, 1),
        }
    }

    /// The outward unit normal of this face.
    pub fn normal(self) -> Vector3<f32> {
        self.offset().cast::<f32>().unwrap_or(Vector3::new(0.0, 0.0, 0.0))
    }

    /// The face on the other side of the cell.
    pub fn opposite(self) -> BlockSide {
        match self {
            BlockSide::LEFT => BlockSide::RIGHT,
            BlockSide::RIGHT => BlockSide::LEFT,
            BlockSide::BOTTOM => BlockSide::TOP,
            BlockSide::TOP => BlockSide::BOTTOM,
            BlockSide::BACK => BlockSide::FRONT,
            BlockSide::FRONT => BlockSide::BACK,
        }
    }

    /// Maps a unit step between two adjacent cells to the face it crosses.
    ///
    /// # Returns
    /// `None` if `step` is not one of the six axis-aligned unit vectors.
    pub fn from_offset(step: Vector3<i32>) -> Option<BlockSide> {
        BlockSide::all().into_iter().find(|side| side.offset() == step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    #[test]
    fn normals_are_unit_and_match_offsets() {
        for side in BlockSide::all() {
            let normal = side.normal();
            assert!((normal.magnitude() - 1.0).abs() < 1e-6);
            assert_eq!(side.offset() + side.opposite().offset(), Vector3::new(0, 0, 0));
            assert_eq!(BlockSide::from_offset(side.offset()), Some(side));
        }
        assert_eq!(BlockSide::from_offset(Vector3::new(1, 1, 0)), None);
    }
}
