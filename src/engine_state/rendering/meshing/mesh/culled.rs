//! Face-culled meshing for voxel rendering.
//!
//! Every solid cell emits one quad for each face whose neighbor reads as air.
//! Neighbors are read through [`Chunk::get`], so a cell on the chunk boundary
//! always shows its outward faces: the chunk has no view of adjacent chunks.

use log::debug;
use web_time::Instant;

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, is_solid, render_descriptor},
    chunk::{chunk_iteration::ChunkBlockIterator, Chunk},
};

use super::{face::Face, mesh::ChunkMesh};

/// Generates the culled mesh for every solid cell of `chunk`.
///
/// # Performance
/// O(S³) neighbor lookups. Runs only when voxels change, never per frame.
pub fn culled(chunk: &Chunk) -> ChunkMesh {
    let start = Instant::now();
    let mut mesh = ChunkMesh::with_face_capacity(chunk.solid_count());

    for (position, voxel_type) in ChunkBlockIterator::new(chunk) {
        let base_color = render_descriptor(voxel_type).color;

        for side in BlockSide::all() {
            let neighbor = position + side.offset();
            if is_solid(chunk.get(neighbor.x, neighbor.y, neighbor.z)) {
                continue;
            }
            mesh.push_face(
                &Face::new(position.x, position.y, position.z, voxel_type, side),
                base_color,
            );
        }
    }

    debug!(
        "Meshed chunk {:?}: {} quads in {:?}",
        chunk.position,
        mesh.quad_count(),
        start.elapsed()
    );

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point3;

    fn chunk(size: usize) -> Chunk {
        Chunk::new(Point3::new(0, 0, 0), size)
    }

    #[test]
    fn empty_chunk_has_no_geometry() {
        let mesh = culled(&chunk(4));
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn lone_voxel_shows_all_six_faces() {
        let mut chunk = chunk(4);
        chunk.set(1, 1, 1, 1);
        let mesh = culled(&chunk);

        assert_eq!(mesh.quad_count(), 6);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn shared_faces_between_solid_cells_are_culled() {
        let mut chunk = chunk(4);
        chunk.set(1, 1, 1, 1);
        chunk.set(2, 1, 1, 3);
        assert_eq!(culled(&chunk).quad_count(), 10);
    }

    #[test]
    fn interior_cell_contributes_nothing() {
        let mut chunk = chunk(3);
        for z in 0..3 {
            for y in 0..3 {
                for x in 0..3 {
                    chunk.set(x, y, z, 3);
                }
            }
        }
        // Only the 9 outer faces per side of the cube remain.
        assert_eq!(culled(&chunk).quad_count(), 6 * 9);

        chunk.set(1, 1, 1, 0);
        // Hollowing the center exposes the six faces around it.
        assert_eq!(culled(&chunk).quad_count(), 6 * 9 + 6);
    }

    #[test]
    fn one_open_neighbor_is_one_quad() {
        let mut chunk = chunk(3);
        for z in 0..3 {
            for y in 0..3 {
                for x in 0..3 {
                    chunk.set(x, y, z, 2);
                }
            }
        }
        let before = culled(&chunk).quad_count();
        // The center cell's only open neighbor is now above it.
        // The removed cell loses its top quad; its four side neighbors and
        // the center each gain one.
        chunk.set(1, 2, 1, 0);
        let after = culled(&chunk);
        let center_faces = count_faces_at(&after, [1.0, 2.0, 1.0], [0.0, 1.0, 0.0]);
        assert_eq!(center_faces, 1);
        assert_eq!(after.quad_count(), before - 1 + 1 + 4);
    }

    #[test]
    fn boundary_cells_treat_outside_as_air() {
        let mut chunk = chunk(1);
        chunk.set(0, 0, 0, 4);
        assert_eq!(culled(&chunk).quad_count(), 6);
    }

    #[test]
    fn triangles_wind_outwards() {
        let mut chunk = chunk(4);
        chunk.set(1, 1, 1, 1);
        chunk.set(1, 2, 1, 1);
        let mesh = culled(&chunk);

        for triangle in mesh.indices.chunks(3) {
            let p = |i: u32| {
                let k = i as usize * 3;
                cgmath::Vector3::new(
                    mesh.positions[k],
                    mesh.positions[k + 1],
                    mesh.positions[k + 2],
                )
            };
            let n = {
                let k = triangle[0] as usize * 3;
                cgmath::Vector3::new(mesh.normals[k], mesh.normals[k + 1], mesh.normals[k + 2])
            };
            let winding = (p(triangle[1]) - p(triangle[0])).cross(p(triangle[2]) - p(triangle[0]));
            assert!(cgmath::dot(winding, n) > 0.0);
        }
    }

    #[test]
    fn unknown_codes_still_mesh() {
        let mut chunk = chunk(2);
        chunk.set(0, 0, 0, 250);
        let mesh = culled(&chunk);
        assert_eq!(mesh.quad_count(), 6);
        assert!(mesh.colors.chunks(3).all(|c| c[1] == 0.0));
    }

    /// Counts quads whose first corner is `corner` and whose normal is `normal`.
    fn count_faces_at(mesh: &ChunkMesh, corner: [f32; 3], normal: [f32; 3]) -> usize {
        (0..mesh.quad_count())
            .filter(|quad| {
                let k = quad * 12;
                let min = (0..4).fold([f32::MAX; 3], |acc, v| {
                    let p = &mesh.positions[k + v * 3..k + v * 3 + 3];
                    [acc[0].min(p[0]), acc[1].min(p[1]), acc[2].min(p[2])]
                });
                min == corner && mesh.normals[k..k + 3] == normal
            })
            .count()
    }
}
