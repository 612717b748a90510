//! Reward and termination rules.
use crate::world::{squared_distance, World};

/// Distance below which the target counts as reached.
pub(crate) const TARGET_RADIUS: f64 = 5.0;

/// Distance below which a mine counts as hit.
pub(crate) const MINE_RADIUS: f64 = 5.0;

/// Result of evaluating the current world state.
pub(crate) struct Outcome {
    pub reward: f32,
    pub is_terminated: i8,
    pub is_truncated: i8,
}

/// Evaluates the world after a transition.
///
/// The rules are ordered and the first match wins; reaching the target
/// beats a simultaneous mine collision.
pub(crate) fn evaluate(world: &World, max_steps: usize) -> Outcome {
    let v = &world.vehicle;

    if squared_distance(v.x, v.y, world.target.x, world.target.y) < TARGET_RADIUS * TARGET_RADIUS {
        return Outcome {
            reward: 1.0,
            is_terminated: 1,
            is_truncated: 0,
        };
    }

    let mine_hit = world
        .mines
        .iter()
        .any(|m| squared_distance(v.x, v.y, m.x, m.y) < MINE_RADIUS * MINE_RADIUS);
    if mine_hit {
        Outcome {
            reward: 0.0,
            is_terminated: 1,
            is_truncated: 0,
        }
    } else if world.step >= max_steps {
        Outcome {
            reward: 0.0,
            is_terminated: 0,
            is_truncated: 1,
        }
    } else {
        Outcome {
            reward: 0.0,
            is_terminated: 0,
            is_truncated: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::evaluate;
    use crate::world::{Mine, Target, Vehicle, World};

    const MAX_STEPS: usize = 200;

    fn world() -> World {
        World {
            vehicle: Vehicle {
                x: 0.0,
                y: 0.0,
                direction: 0.0,
                step: 0,
            },
            target: Target { x: 100.0, y: 100.0 },
            mines: vec![],
            step: 0,
        }
    }

    #[test]
    fn test_running_episode() {
        let outcome = evaluate(&world(), MAX_STEPS);
        assert_eq!(outcome.reward, 0.0);
        assert_eq!(outcome.is_terminated, 0);
        assert_eq!(outcome.is_truncated, 0);
    }

    #[test]
    fn test_target_reached() {
        let mut world = world();
        world.target = Target { x: 4.0, y: 0.0 };
        let outcome = evaluate(&world, MAX_STEPS);
        assert_eq!(outcome.reward, 1.0);
        assert_eq!(outcome.is_terminated, 1);
    }

    #[test]
    fn test_target_beats_simultaneous_mine_hit() {
        let mut world = world();
        world.target = Target { x: 4.0, y: 0.0 };
        world.mines = vec![Mine { x: -4.0, y: 0.0 }];
        let outcome = evaluate(&world, MAX_STEPS);
        assert_eq!(outcome.reward, 1.0);
        assert_eq!(outcome.is_terminated, 1);
        assert_eq!(outcome.is_truncated, 0);
    }

    #[test]
    fn test_mine_hit() {
        let mut world = world();
        world.mines = vec![Mine { x: 30.0, y: 0.0 }, Mine { x: 3.0, y: 3.0 }];
        let outcome = evaluate(&world, MAX_STEPS);
        assert_eq!(outcome.reward, 0.0);
        assert_eq!(outcome.is_terminated, 1);
        assert_eq!(outcome.is_truncated, 0);
    }

    #[test]
    fn test_step_limit_truncates() {
        let mut world = world();
        world.step = MAX_STEPS;
        let outcome = evaluate(&world, MAX_STEPS);
        assert_eq!(outcome.reward, 0.0);
        assert_eq!(outcome.is_terminated, 0);
        assert_eq!(outcome.is_truncated, 1);
    }

    #[test]
    fn test_boundary_distance_does_not_terminate() {
        // A distance of exactly 5 is not a hit, for targets and mines alike.
        let mut world = world();
        world.target = Target { x: 5.0, y: 0.0 };
        world.mines = vec![Mine { x: 0.0, y: 5.0 }];
        let outcome = evaluate(&world, MAX_STEPS);
        assert_eq!(outcome.reward, 0.0);
        assert_eq!(outcome.is_terminated, 0);
        assert_eq!(outcome.is_truncated, 0);
    }
}
