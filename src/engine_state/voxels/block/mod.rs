//! # Block Module
//!
//! This module provides the voxel material definitions for the voxel engine.
//! It includes the compact type code stored in chunks, the process-wide
//! descriptor table that maps codes to render properties, and the six block faces.

use block_type::VoxelType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent voxel types in memory.
///
/// `0` is air; every other value is an opaque, solid material.
pub type VoxelTypeCode = u8;

/// The code stored for empty space.
pub const AIR: VoxelTypeCode = VoxelType::Air as VoxelTypeCode;

/// Static render properties shared by every voxel of one material.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VoxelTypeDescriptor {
    /// Base color as linear RGB in `0.0..=1.0`.
    pub color: [f32; 3],
    /// Surface roughness consumed by the material layer.
    pub roughness: f32,
}

/// Maps each solid voxel code to its descriptor.
///
/// The table is built at compile time and is read-only for the lifetime of the
/// process. Air (`0`) deliberately has no entry.
pub static VOXEL_TYPE_DESCRIPTORS: phf::Map<u8, VoxelTypeDescriptor> = phf::phf_map! {
    1u8 => VoxelTypeDescriptor { color: [0.33, 0.62, 0.24], roughness: 0.9 },  // GRASS
    2u8 => VoxelTypeDescriptor { color: [0.47, 0.33, 0.21], roughness: 0.95 }, // DIRT
    3u8 => VoxelTypeDescriptor { color: [0.50, 0.50, 0.52], roughness: 0.8 },  // STONE
    4u8 => VoxelTypeDescriptor { color: [0.86, 0.80, 0.56], roughness: 1.0 },  // SAND
    5u8 => VoxelTypeDescriptor { color: [0.40, 0.27, 0.14], roughness: 0.7 },  // WOOD
    6u8 => VoxelTypeDescriptor { color: [0.20, 0.45, 0.16], roughness: 0.6 },  // LEAVES
};

/// Descriptor used for solid codes that have no table entry.
pub static MISSING_DESCRIPTOR: VoxelTypeDescriptor = VoxelTypeDescriptor {
    color: [1.0, 0.0, 1.0],
    roughness: 1.0,
};

/// Looks up the descriptor for a voxel code.
///
/// # Returns
/// `None` for air and for codes outside the table.
pub fn descriptor(code: VoxelTypeCode) -> Option<&'static VoxelTypeDescriptor> {
    VOXEL_TYPE_DESCRIPTORS.get(&code)
}

/// Looks up the descriptor used when meshing a solid voxel, falling back to
/// [`MISSING_DESCRIPTOR`] for unknown codes.
pub fn render_descriptor(code: VoxelTypeCode) -> &'static VoxelTypeDescriptor {
    descriptor(code).unwrap_or(&MISSING_DESCRIPTOR)
}

/// Whether a voxel code occupies its cell.
#[inline]
pub fn is_solid(code: VoxelTypeCode) -> bool {
    code != AIR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_has_no_descriptor() {
        assert!(descriptor(AIR).is_none());
        assert!(!is_solid(AIR));
    }

    #[test]
    fn every_named_solid_type_has_a_descriptor() {
        for voxel_type in VoxelType::solid_types() {
            let code = voxel_type as VoxelTypeCode;
            assert!(is_solid(code));
            assert!(descriptor(code).is_some(), "{:?} is missing", voxel_type);
        }
    }

    #[test]
    fn unknown_codes_render_with_fallback() {
        assert!(descriptor(200).is_none());
        assert_eq!(*render_descriptor(200), MISSING_DESCRIPTOR);
        assert_eq!(
            render_descriptor(VoxelType::Stone as VoxelTypeCode),
            descriptor(VoxelType::Stone as VoxelTypeCode).unwrap()
        );
    }
}
