use cgmath::Point3;

use crate::engine_state::voxels::block::{block_side::BlockSide, VoxelTypeCode};

/// Represents a single quad face of a voxel in the mesh.
///
/// A face is defined by four corner points (lower-left, lower-right, upper-left, upper-right)
/// on the boundary of a unit cell. The corners are chosen so that
/// `(lr - ll) × (ul - ll)` points along the face normal, which makes the two
/// triangles `ll, lr, ur` and `ll, ur, ul` wind counter-clockwise seen from outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Lower-left corner of the face in chunk coordinates
    pub ll: Point3<i32>,
    /// Lower-right corner of the face in chunk coordinates
    pub lr: Point3<i32>,
    /// Upper-left corner of the face in chunk coordinates
    pub ul: Point3<i32>,
    /// Upper-right corner of the face in chunk coordinates
    pub ur: Point3<i32>,
    /// The voxel code, used for the color lookup
    pub voxel_type: VoxelTypeCode,
    /// Which side of the cell this face represents
    pub block_side: BlockSide,
}

impl Face {
    /// Creates the face of the cell at `(i, j, k)` on `block_side`.
    pub fn new(i: i32, j: i32, k: i32, voxel_type: VoxelTypeCode, block_side: BlockSide) -> Self {
        let (ll, lr, ul, ur) = match block_side {
            BlockSide::LEFT => (
                Point3::new(i, j, k),
                Point3::new(i, j, k + 1),
                Point3::new(i, j + 1, k),
                Point3::new(i, j + 1, k + 1),
            ),
            BlockSide::RIGHT => (
                Point3::new(i + 1, j, k + 1),
                Point3::new(i + 1, j, k),
                Point3::new(i + 1, j + 1, k + 1),
                Point3::new(i + 1, j + 1, k),
            ),
            BlockSide::BOTTOM => (
                Point3::new(i, j, k),
                Point3::new(i + 1, j, k),
                Point3::new(i, j, k + 1),
                Point3::new(i + 1, j, k + 1),
            ),
            BlockSide::TOP => (
                Point3::new(i, j + 1, k),
                Point3::new(i, j + 1, k + 1),
                Point3::new(i + 1, j + 1, k),
                Point3::new(i + 1, j + 1, k + 1),
            ),
            BlockSide::BACK => (
                Point3::new(i + 1, j, k),
                Point3::new(i, j, k),
                Point3::new(i + 1, j + 1, k),
                Point3::new(i, j + 1, k),
            ),
            BlockSide::FRONT => (
                Point3::new(i, j, k + 1),
                Point3::new(i + 1, j, k + 1),
                Point3::new(i, j + 1, k + 1),
                Point3::new(i + 1, j + 1, k + 1),
            ),
        };

        Face {
            ll,
            lr,
            ul,
            ur,
            voxel_type,
            block_side,
        }
    }

    /// The corners in vertex buffer order: `[ll, lr, ul, ur]`.
    pub fn corners(&self) -> [Point3<i32>; 4] {
        [self.ll, self.lr, self.ul, self.ur]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn corners_wind_towards_the_normal() {
        for side in BlockSide::all() {
            let face = Face::new(2, 3, 4, 1, side);
            let a = face.lr - face.ll;
            let b = face.ul - face.ll;
            assert_eq!(a.cross(b), side.offset(), "{:?}", side);
            // The quad is a parallelogram.
            assert_eq!(face.ur, face.lr + b);
        }
    }

    #[test]
    fn corners_lie_on_the_cell_boundary() {
        for side in BlockSide::all() {
            let face = Face::new(0, 0, 0, 1, side);
            let plane = match side {
                BlockSide::LEFT | BlockSide::BOTTOM | BlockSide::BACK => 0,
                _ => 1,
            };
            let axis = side.offset().map(|c| c.abs());
            for corner in face.corners() {
                let v = Vector3::new(corner.x, corner.y, corner.z);
                assert_eq!(v.x * axis.x + v.y * axis.y + v.z * axis.z, plane);
                assert!(v.x >= 0 && v.x <= 1 && v.y >= 0 && v.y <= 1 && v.z >= 0 && v.z <= 1);
            }
        }
    }
}
