//! Observation for [`MinefieldEnv`](crate::MinefieldEnv).
use crate::world::World;
use minefield_core::Obs;
use ndarray::Array2;

/// Name of the vehicle group in observations.
pub const VEHICLE_KEY: &str = "Vehicle";

/// Name of the target group in observations.
pub const TARGET_KEY: &str = "Target";

/// Name of the mine group in observations.
pub const MINES_KEY: &str = "Mines";

/// Observation of [`MinefieldEnv`](crate::MinefieldEnv).
///
/// Three named groups of records: exactly one vehicle record
/// `(x, y, direction, step)`, exactly one target record `(x, y)` and one
/// `(x, y)` record per surviving mine. The mine order is the generation
/// order and stays stable within an episode.
#[derive(Debug, Clone, PartialEq)]
pub struct MinefieldObs {
    /// The vehicle record `(x, y, direction, step)`.
    pub vehicle: [f32; 4],

    /// The target record `(x, y)`.
    pub target: [f32; 2],

    /// One `(x, y)` record per mine.
    pub mines: Vec<[f32; 2]>,
}

/// Encodes the world state. Pure; does not touch the world.
impl From<&World> for MinefieldObs {
    fn from(world: &World) -> Self {
        Self {
            vehicle: [
                world.vehicle.x as f32,
                world.vehicle.y as f32,
                world.vehicle.direction as f32,
                world.step as f32,
            ],
            target: [world.target.x as f32, world.target.y as f32],
            mines: world
                .mines
                .iter()
                .map(|m| [m.x as f32, m.y as f32])
                .collect(),
        }
    }
}

impl Obs for MinefieldObs {
    fn dummy(_n: usize) -> Self {
        Self {
            vehicle: [0.0; 4],
            target: [0.0; 2],
            mines: vec![],
        }
    }

    fn len(&self) -> usize {
        1
    }
}

/// The raw-array view of the observation, one array per group.
///
/// Shapes are 1×4 (vehicle), 1×2 (target) and k×2 (mines), in that group
/// order.
impl From<MinefieldObs> for Vec<(String, Array2<f32>)> {
    fn from(obs: MinefieldObs) -> Self {
        let n_mines = obs.mines.len();
        let mines = obs.mines.into_iter().flatten().collect::<Vec<_>>();
        vec![
            (
                VEHICLE_KEY.to_string(),
                Array2::from_shape_vec((1, 4), obs.vehicle.to_vec()).unwrap(),
            ),
            (
                TARGET_KEY.to_string(),
                Array2::from_shape_vec((1, 2), obs.target.to_vec()).unwrap(),
            ),
            (
                MINES_KEY.to_string(),
                Array2::from_shape_vec((n_mines, 2), mines).unwrap(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{MinefieldObs, MINES_KEY, TARGET_KEY, VEHICLE_KEY};
    use crate::world::{Mine, Target, Vehicle, World};
    use ndarray::Array2;

    fn world() -> World {
        World {
            vehicle: Vehicle {
                x: 1.0,
                y: 2.0,
                direction: 3.0,
                step: 4,
            },
            target: Target { x: 5.0, y: 6.0 },
            mines: vec![Mine { x: 7.0, y: 8.0 }, Mine { x: 9.0, y: 10.0 }],
            step: 4,
        }
    }

    #[test]
    fn test_encode() {
        let obs = MinefieldObs::from(&world());
        assert_eq!(obs.vehicle, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(obs.target, [5.0, 6.0]);
        assert_eq!(obs.mines, vec![[7.0, 8.0], [9.0, 10.0]]);
    }

    #[test]
    fn test_raw_array_view() {
        let arrays: Vec<(String, Array2<f32>)> = MinefieldObs::from(&world()).into();

        assert_eq!(arrays.len(), 3);
        assert_eq!(arrays[0].0, VEHICLE_KEY);
        assert_eq!(arrays[0].1.shape(), &[1, 4]);
        assert_eq!(arrays[1].0, TARGET_KEY);
        assert_eq!(arrays[1].1.shape(), &[1, 2]);
        assert_eq!(arrays[2].0, MINES_KEY);
        assert_eq!(arrays[2].1.shape(), &[2, 2]);
        assert_eq!(arrays[2].1[[1, 0]], 9.0);
    }

    #[test]
    fn test_raw_array_view_without_mines() {
        let mut world = world();
        world.mines.clear();
        let arrays: Vec<(String, Array2<f32>)> = MinefieldObs::from(&world).into();
        assert_eq!(arrays[2].1.shape(), &[0, 2]);
    }
}
