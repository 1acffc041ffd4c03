//! World-space addressing.
//!
//! Splits a world voxel coordinate into the coordinate of the chunk that
//! contains it and the local offset inside that chunk, and back again.
//! Division rounds towards negative infinity, so `-1` lands in chunk `-1` at
//! local `S - 1` rather than in chunk `0`.

use cgmath::Point3;

/// Chunk coordinate and local offset for one world voxel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VoxelAddress {
    /// Coordinate of the containing chunk, in chunk units
    pub chunk: Point3<i32>,
    /// Offset inside the chunk, each axis in `0..size`
    pub local: Point3<i32>,
}

impl VoxelAddress {
    /// Resolves a world voxel coordinate for chunks of side `size`.
    ///
    /// A `size` of zero is treated as one.
    pub fn from_world(world: Point3<i32>, size: usize) -> Self {
        let size = axis_size(size);
        VoxelAddress {
            chunk: Point3::new(
                world.x.div_euclid(size),
                world.y.div_euclid(size),
                world.z.div_euclid(size),
            ),
            local: Point3::new(
                world.x.rem_euclid(size),
                world.y.rem_euclid(size),
                world.z.rem_euclid(size),
            ),
        }
    }

    /// Rebuilds the world voxel coordinate.
    pub fn to_world(self, size: usize) -> Point3<i32> {
        let size = axis_size(size);
        Point3::new(
            self.chunk.x * size + self.local.x,
            self.chunk.y * size + self.local.y,
            self.chunk.z * size + self.local.z,
        )
    }
}

/// Coordinate of the chunk containing a world-space point.
pub fn chunk_containing(world: Point3<i32>, size: usize) -> Point3<i32> {
    VoxelAddress::from_world(world, size).chunk
}

/// World coordinate of the minimum corner of a chunk.
///
/// # Returns
/// `None` if the corner lies outside the `i32` world, in which case no world
/// voxel resolves to that chunk.
pub fn chunk_origin(chunk: Point3<i32>, size: usize) -> Option<Point3<i32>> {
    let size = axis_size(size);
    Some(Point3::new(
        chunk.x.checked_mul(size)?,
        chunk.y.checked_mul(size)?,
        chunk.z.checked_mul(size)?,
    ))
}

fn axis_size(size: usize) -> i32 {
    size.clamp(1, i32::MAX as usize) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_coordinates_use_floor_division() {
        let address = VoxelAddress::from_world(Point3::new(-1, -16, -17), 16);
        assert_eq!(address.chunk, Point3::new(-1, -1, -2));
        assert_eq!(address.local, Point3::new(15, 0, 15));
    }

    #[test]
    fn positive_coordinates() {
        let address = VoxelAddress::from_world(Point3::new(0, 15, 16), 16);
        assert_eq!(address.chunk, Point3::new(0, 0, 1));
        assert_eq!(address.local, Point3::new(0, 15, 0));
    }

    #[test]
    fn round_trips_for_many_sizes_and_coordinates() {
        for size in [1usize, 2, 3, 4, 7, 16, 32] {
            for w in -70..70 {
                let world = Point3::new(w, -w * 3 + 1, w / 2 - 5);
                let address = VoxelAddress::from_world(world, size);
                assert_eq!(address.to_world(size), world);
                for c in [address.local.x, address.local.y, address.local.z] {
                    assert!(c >= 0 && c < size as i32);
                }
            }
        }
    }

    #[test]
    fn extreme_coordinates_do_not_panic() {
        for world in [
            Point3::new(i32::MIN, i32::MAX, 0),
            Point3::new(i32::MAX, i32::MIN, -1),
        ] {
            let address = VoxelAddress::from_world(world, 16);
            assert_eq!(address.to_world(16), world);
        }
        assert_eq!(chunk_containing(Point3::new(-1, 0, 31), 16), Point3::new(-1, 0, 1));
    }

    #[test]
    fn oversized_chunk_sizes_do_not_divide_by_zero() {
        let address = VoxelAddress::from_world(Point3::new(5, -5, 0), 1usize << 32);
        assert_eq!(address.chunk, Point3::new(0, -1, 0));
        assert_eq!(address.local, Point3::new(5, i32::MAX - 5, 0));
        assert_eq!(VoxelAddress::from_world(Point3::new(-3, 0, 2), 0).local, Point3::new(0, 0, 0));
    }

    #[test]
    fn origins_of_unreachable_chunks_are_rejected() {
        assert_eq!(chunk_origin(Point3::new(-2, 0, 3), 16), Some(Point3::new(-32, 0, 48)));
        assert_eq!(chunk_origin(Point3::new(i32::MAX / 16, 0, 0), 16), Some(Point3::new(i32::MAX - 15, 0, 0)));
        assert_eq!(chunk_origin(Point3::new(i32::MIN / 16, 0, 0), 16), Some(Point3::new(i32::MIN, 0, 0)));
        assert_eq!(chunk_origin(Point3::new(i32::MAX, 0, 0), 16), None);
        assert_eq!(chunk_origin(Point3::new(0, i32::MIN / 16 - 1, 0), 16), None);
    }
}
