//! Vehicle dynamics.
use crate::{act::MinefieldAct, error::MinefieldEnvError, world::Vehicle};
use std::f64::consts::{PI, TAU};

/// Heading change of a turn action.
pub(crate) const TURN_STEP: f64 = PI / 8.0;

/// Distance covered by a forward action.
pub(crate) const MOVE_STEP: f64 = 3.0;

/// Applies a single discrete action to the vehicle.
///
/// The action index is validated before anything is touched; on an invalid
/// index the vehicle is left unmodified. After a valid action the heading
/// is normalized into `[0, 2π)`.
pub(crate) fn apply(vehicle: &mut Vehicle, act: &MinefieldAct) -> Result<(), MinefieldEnvError> {
    match act.act {
        0 => vehicle.direction -= TURN_STEP,
        1 => {
            vehicle.x += MOVE_STEP * vehicle.direction.cos();
            vehicle.y += MOVE_STEP * vehicle.direction.sin();
        }
        2 => vehicle.direction += TURN_STEP,
        a => return Err(MinefieldEnvError::InvalidAction(a)),
    }
    vehicle.direction = vehicle.direction.rem_euclid(TAU);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{apply, MOVE_STEP, TURN_STEP};
    use crate::{act::MinefieldAct, world::Vehicle};
    use std::f64::consts::TAU;

    fn vehicle() -> Vehicle {
        Vehicle {
            x: 0.0,
            y: 0.0,
            direction: 0.0,
            step: 0,
        }
    }

    #[test]
    fn test_left_turn_wraps_into_range() {
        let mut v = vehicle();
        apply(&mut v, &MinefieldAct::left()).unwrap();
        assert!((v.direction - (TAU - TURN_STEP)).abs() < 1e-12);

        // A full round of left turns returns to the initial heading.
        for _ in 0..15 {
            apply(&mut v, &MinefieldAct::left()).unwrap();
        }
        assert!(v.direction.abs() < 1e-9 || (v.direction - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_right_turn_wraps_into_range() {
        let mut v = vehicle();
        for _ in 0..17 {
            apply(&mut v, &MinefieldAct::right()).unwrap();
            assert!(0.0 <= v.direction && v.direction < TAU);
        }
        assert!((v.direction - TURN_STEP).abs() < 1e-9);
    }

    #[test]
    fn test_forward_moves_along_heading() {
        let mut v = vehicle();
        v.direction = std::f64::consts::FRAC_PI_2;
        apply(&mut v, &MinefieldAct::forward()).unwrap();
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - MOVE_STEP).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_action_leaves_vehicle_untouched() {
        let mut v = vehicle();
        v.direction = 1.0;
        v.x = 2.0;
        let before = v.clone();

        assert!(apply(&mut v, &MinefieldAct::new(3)).is_err());
        assert!(apply(&mut v, &MinefieldAct::new(-1)).is_err());
        assert_eq!(v, before);
    }
}
