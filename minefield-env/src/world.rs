//! World state of the environment.
use rand::{rngs::StdRng, Rng};

/// Minimum distance between the vehicle, the target and any accepted mine
/// at generation time.
pub(crate) const MIN_SPACING: f64 = 15.0;

/// The vehicle controlled by the agent.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    /// Position on the x-axis.
    pub x: f64,

    /// Position on the y-axis.
    pub y: f64,

    /// Heading in radians, kept in `[0, 2π)`.
    pub direction: f64,

    /// The number of steps taken in the current episode.
    pub step: usize,
}

/// The target the vehicle tries to reach. Fixed for the episode.
#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    /// Position on the x-axis.
    pub x: f64,

    /// Position on the y-axis.
    pub y: f64,
}

/// A mine. The mine set is fixed for the episode once generated.
#[derive(Clone, Debug, PartialEq)]
pub struct Mine {
    /// Position on the x-axis.
    pub x: f64,

    /// Position on the y-axis.
    pub y: f64,
}

/// The aggregate state of an episode.
///
/// Created fresh on every reset and mutated in place by each step.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    /// The vehicle.
    pub vehicle: Vehicle,

    /// The target.
    pub target: Target,

    /// The mines.
    pub mines: Vec<Mine>,

    /// The number of steps taken in the current episode.
    pub step: usize,
}

pub(crate) fn squared_distance(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    (x1 - x0).powi(2) + (y1 - y0).powi(2)
}

impl World {
    /// Generates a randomized initial world.
    ///
    /// The vehicle and target positions are drawn independently, uniformly
    /// over the arena square of side length `width` centered at the origin,
    /// and the heading uniformly over `[0, 2π)`. Up to `max_mines` mine
    /// candidates are drawn; a candidate is accepted only if it keeps the
    /// [`MIN_SPACING`] distance to the vehicle, the target and every mine
    /// accepted before it. Rejected candidates are skipped without retry,
    /// so the realized mine count may be any value in `0..=max_mines`.
    pub fn generate(rng: &mut StdRng, max_mines: usize, width: f64) -> Self {
        let half = width / 2.0;
        let (vx, vy) = (rng.gen_range(-half..half), rng.gen_range(-half..half));
        let (tx, ty) = (rng.gen_range(-half..half), rng.gen_range(-half..half));

        let mut mines: Vec<Mine> = Vec::new();
        for _ in 0..max_mines {
            let (x, y) = (rng.gen_range(-half..half), rng.gen_range(-half..half));
            let too_close = mines
                .iter()
                .map(|m| (m.x, m.y))
                .chain([(vx, vy), (tx, ty)])
                .any(|(px, py)| squared_distance(x, y, px, py) < MIN_SPACING * MIN_SPACING);
            if too_close {
                continue;
            }
            mines.push(Mine { x, y });
        }

        let direction = rng.gen_range(0.0..std::f64::consts::TAU);

        Self {
            vehicle: Vehicle {
                x: vx,
                y: vy,
                direction,
                step: 0,
            },
            target: Target { x: tx, y: ty },
            mines,
            step: 0,
        }
    }
}
