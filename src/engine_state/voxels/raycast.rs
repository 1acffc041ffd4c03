//! Voxel raycasting.
//!
//! Grid traversal (Amanatides-Woo DDA) that visits every cell a ray passes
//! through, in order, until a solid one is found. Weapon hit-scan and the
//! destructible-terrain tools use it to find which voxel the player targets.

use cgmath::{InnerSpace, Point3, Vector3};

use super::block::{block_side::BlockSide, VoxelTypeCode};

/// Upper bound on visited cells, independent of `max_distance`.
const MAX_STEPS: usize = 4096;

/// The first solid voxel along a ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// World coordinate of the solid voxel
    pub voxel: Point3<i32>,
    /// World coordinate of the last empty cell before the hit
    pub previous: Point3<i32>,
    /// Face of `voxel` the ray entered through, `None` if the ray started inside it
    pub side: Option<BlockSide>,
    /// Code of the solid voxel
    pub voxel_type: VoxelTypeCode,
    /// Distance along the ray to the entry point
    pub distance: f32,
}

/// Walks the ray from `origin` along `direction` and returns the first cell
/// for which `sample` yields a solid code within `max_distance`.
///
/// # Returns
/// `None` if the direction is zero or nothing solid lies within range.
pub fn raycast<F>(
    origin: Point3<f32>,
    direction: Vector3<f32>,
    max_distance: f32,
    mut sample: F,
) -> Option<RayHit>
where
    F: FnMut(Point3<i32>) -> VoxelTypeCode,
{
    if direction.magnitude2() < 1e-12 || !max_distance.is_finite() {
        return None;
    }
    let d = direction.normalize();

    let mut cell = Point3::new(
        origin.x.floor() as i32,
        origin.y.floor() as i32,
        origin.z.floor() as i32,
    );
    let step = Vector3::new(signum(d.x), signum(d.y), signum(d.z));

    let t_delta = Vector3::new(inverse(d.x), inverse(d.y), inverse(d.z));
    let mut t_max = Vector3::new(
        first_boundary(origin.x, d.x),
        first_boundary(origin.y, d.y),
        first_boundary(origin.z, d.z),
    );

    let mut previous = cell;
    let mut entered: Option<BlockSide> = None;
    let mut t = 0.0f32;

    for _ in 0..MAX_STEPS {
        if t > max_distance {
            break;
        }

        let code = sample(cell);
        if code != 0 {
            return Some(RayHit {
                voxel: cell,
                previous,
                side: entered,
                voxel_type: code,
                distance: t,
            });
        }

        previous = cell;
        // Step through the nearest boundary; the face entered is opposite the step.
        let axis_step = if t_max.x < t_max.y && t_max.x < t_max.z {
            t = t_max.x;
            t_max.x += t_delta.x;
            Vector3::new(step.x, 0, 0)
        } else if t_max.y < t_max.z {
            t = t_max.y;
            t_max.y += t_delta.y;
            Vector3::new(0, step.y, 0)
        } else {
            t = t_max.z;
            t_max.z += t_delta.z;
            Vector3::new(0, 0, step.z)
        };

        if axis_step == Vector3::new(0, 0, 0) {
            break;
        }
        cell += axis_step;
        entered = BlockSide::from_offset(-axis_step);
    }

    None
}

fn signum(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

fn inverse(v: f32) -> f32 {
    if v == 0.0 {
        f32::INFINITY
    } else {
        1.0 / v.abs()
    }
}

/// Ray distance from `origin` to the first cell boundary along one axis.
fn first_boundary(origin: f32, d: f32) -> f32 {
    let fraction = origin - origin.floor();
    if d > 0.0 {
        (1.0 - fraction) / d
    } else if d < 0.0 {
        fraction / -d
    } else {
        f32::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_at(height: i32) -> impl FnMut(Point3<i32>) -> VoxelTypeCode {
        move |p| if p.y <= height { 3 } else { 0 }
    }

    #[test]
    fn straight_down_hits_top_face() {
        let hit = raycast(
            Point3::new(0.5, 10.5, 0.5),
            Vector3::new(0.0, -1.0, 0.0),
            100.0,
            floor_at(2),
        )
        .unwrap();

        assert_eq!(hit.voxel, Point3::new(0, 2, 0));
        assert_eq!(hit.previous, Point3::new(0, 3, 0));
        assert_eq!(hit.side, Some(BlockSide::TOP));
        assert_eq!(hit.voxel_type, 3);
        assert!((hit.distance - 7.5).abs() < 1e-5);
    }

    #[test]
    fn negative_coordinates_and_sideways_hits() {
        let hit = raycast(
            Point3::new(-0.5, 0.5, 0.5),
            Vector3::new(-1.0, 0.0, 0.0),
            50.0,
            |p| if p.x <= -10 { 1 } else { 0 },
        )
        .unwrap();
        assert_eq!(hit.voxel, Point3::new(-10, 0, 0));
        assert_eq!(hit.side, Some(BlockSide::RIGHT));
    }

    #[test]
    fn misses_beyond_max_distance() {
        let hit = raycast(
            Point3::new(0.5, 10.5, 0.5),
            Vector3::new(0.0, -1.0, 0.0),
            3.0,
            floor_at(2),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn zero_direction_never_hits() {
        assert!(raycast(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0), 10.0, |_| 1).is_none());
    }

    #[test]
    fn starting_inside_a_solid_voxel() {
        let hit = raycast(
            Point3::new(0.5, 0.5, 0.5),
            Vector3::new(1.0, 1.0, 0.0),
            10.0,
            floor_at(0),
        )
        .unwrap();
        assert_eq!(hit.voxel, Point3::new(0, 0, 0));
        assert_eq!(hit.side, None);
        assert_eq!(hit.distance, 0.0);
    }
}
