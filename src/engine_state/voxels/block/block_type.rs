//! # Block Type Module
//!
//! This module names the voxel materials known to the engine and converts
//! between the compact stored code and the rich enum.

use num_derive::FromPrimitive;

use super::VoxelTypeCode;

/// Enumerates the voxel materials in the world.
///
/// The discriminant of each variant is the code stored in chunk arrays, so the
/// order must never change. The `FromPrimitive` derive allows conversion from
/// raw codes read back out of a chunk.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum VoxelType {
    /// Empty space. Never rendered.
    Air = 0,
    /// Top layer of hills and plains.
    Grass = 1,
    /// The few layers directly under the surface.
    Dirt = 2,
    /// Everything deeper than the dirt band.
    Stone = 3,
    /// Surface layer of low-lying terrain.
    Sand = 4,
    /// Tree trunks placed by decoration passes.
    Wood = 5,
    /// Tree canopies placed by decoration passes.
    Leaves = 6,
}

impl VoxelType {
    /// Converts a stored code to a `VoxelType`.
    ///
    /// # Returns
    /// `None` if the code does not name a known material.
    pub fn from_code(code: VoxelTypeCode) -> Option<Self> {
        num_traits::FromPrimitive::from_u8(code)
    }

    /// The code stored in a chunk for this material.
    pub fn code(self) -> VoxelTypeCode {
        self as VoxelTypeCode
    }

    /// All materials except air.
    pub fn solid_types() -> [VoxelType; 6] {
        [
            VoxelType::Grass,
            VoxelType::Dirt,
            VoxelType::Stone,
            VoxelType::Sand,
            VoxelType::Wood,
            VoxelType::Leaves,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_convert_both_ways() {
        for voxel_type in VoxelType::solid_types() {
            assert_eq!(VoxelType::from_code(voxel_type.code()), Some(voxel_type));
        }
        assert_eq!(VoxelType::from_code(0), Some(VoxelType::Air));
        assert_eq!(VoxelType::from_code(42), None);
    }
}
