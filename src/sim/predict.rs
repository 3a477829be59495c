//! Ball crossing-point prediction
//!
//! Extrapolates the ball at constant velocity until it reaches the paddle
//! line, then folds the x coordinate back into the field with a single wall
//! reflection. Bounces are not simulated frame by frame.

use super::state::Geometry;
use crate::Position;
use crate::consts::MAX_PREDICT_STEPS;
use crate::fold_x;

/// Predict where the ball will cross the paddle line.
///
/// Returns `None` while the ball is rising or stationary vertically, while it
/// is still above the prediction floor, or if the step cap is exhausted.
/// The returned y is the first stepped y at or past the paddle line and may
/// overshoot it by up to one frame of vertical travel. Coordinates saturate
/// at the `i32` bounds rather than wrapping.
pub fn predict(current: Position, previous: Position, geometry: &Geometry) -> Option<Position> {
    let vel = current.saturating_sub(previous);

    if vel.y <= 0 {
        return None;
    }
    if current.y <= geometry.prediction_floor_y {
        return None;
    }

    let mut pos = current;
    let mut steps = 0;
    while pos.y < geometry.paddle_line_y {
        if steps == MAX_PREDICT_STEPS {
            log::warn!(
                "Prediction gave up after {} steps (ball {:?}, velocity {:?})",
                steps,
                current,
                vel
            );
            return None;
        }
        pos = pos.saturating_add(vel);
        steps += 1;
    }

    let landing = Position::new(fold_x(pos.x, geometry.field_right_x), pos.y);
    log::debug!(
        "Predicted landing {:?} from ball {:?} velocity {:?} in {} steps",
        landing,
        current,
        vel,
        steps
    );
    Some(landing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_straight_down() {
        let landing = predict(p(100, 200), p(100, 190), &Geometry::default()).unwrap();
        assert_eq!(landing.x, 100);
        assert!(landing.y >= 400);
        assert_eq!(landing.y, 400);
    }

    #[test]
    fn test_overshoot_not_interpolated() {
        // 160 + 7 * 35 = 405
        let landing = predict(p(50, 160), p(50, 125), &Geometry::default()).unwrap();
        assert_eq!(landing, p(50, 405));
    }

    #[test]
    fn test_right_wall_fold() {
        // 20 steps of dx = 10 carries x from 195 to 395, folded to 5
        let landing = predict(p(195, 200), p(185, 190), &Geometry::default()).unwrap();
        assert_eq!(landing, p(5, 400));
        assert!((0..=200).contains(&landing.x));
    }

    #[test]
    fn test_left_wall_fold() {
        // 10 steps of dx = -7 carries x from 30 to -40, folded to 40
        let landing = predict(p(30, 300), p(37, 290), &Geometry::default()).unwrap();
        assert_eq!(landing, p(40, 400));
    }

    #[test]
    fn test_fold_is_single_reflection() {
        // Simulated x = 2 + 25 * 20 = 502; one fold gives 400 - 502
        let landing = predict(p(2, 151), p(-18, 141), &Geometry::default()).unwrap();
        assert_eq!(landing.x, 400 - (2 + 25 * 20));
    }

    #[test]
    fn test_already_past_paddle_line() {
        let landing = predict(p(120, 410), p(110, 400), &Geometry::default()).unwrap();
        assert_eq!(landing, p(120, 410));
    }

    #[test]
    fn test_floor_is_exclusive() {
        assert_eq!(predict(p(100, 150), p(100, 140), &Geometry::default()), None);
        assert!(predict(p(100, 151), p(100, 141), &Geometry::default()).is_some());
    }

    #[test]
    fn test_step_cap_gives_up() {
        let geometry = Geometry {
            prediction_floor_y: 0,
            paddle_line_y: i32::MAX,
            ..Geometry::default()
        };
        assert_eq!(predict(p(10, 10), p(10, 9), &geometry), None);
    }

    #[test]
    fn test_extreme_coordinates_saturate() {
        let geometry = Geometry::default();
        // dy would overflow; saturates to i32::MAX and the ball is already past the line
        let landing = predict(p(0, i32::MAX), p(0, i32::MIN), &geometry).unwrap();
        assert_eq!(landing, p(0, i32::MAX));

        // Stepping x past i32::MIN saturates, then folds back to i32::MAX
        let landing = predict(p(i32::MIN + 1, 399), p(0, 398), &geometry).unwrap();
        assert_eq!(landing, p(i32::MAX, 400));

        // Stepping y near i32::MAX stops at the bound instead of wrapping negative
        let tall = Geometry {
            prediction_floor_y: 0,
            paddle_line_y: i32::MAX,
            ..geometry
        };
        let landing = predict(p(100, i32::MAX - 5), p(100, i32::MAX - 15), &tall).unwrap();
        assert_eq!(landing, p(100, i32::MAX));
    }

    proptest! {
        #[test]
        fn rising_or_level_ball_has_no_prediction(
            x in -500i32..500, y in -500i32..1000,
            px in -500i32..500, dy in 0i32..200,
        ) {
            let current = p(x, y);
            let previous = p(px, y + dy);
            prop_assert_eq!(predict(current, previous, &Geometry::default()), None);
        }

        #[test]
        fn high_ball_has_no_prediction(
            x in -500i32..500, y in -500i32..=150,
            dx in -50i32..50, dy in -50i32..50,
        ) {
            let current = p(x, y);
            let previous = p(x - dx, y - dy);
            prop_assert_eq!(predict(current, previous, &Geometry::default()), None);
        }

        #[test]
        fn falling_ball_lands_on_paddle_line(
            x in 0i32..=200, y in 151i32..400,
            dx in -12i32..=12, dy in 1i32..=12,
        ) {
            let landing = predict(p(x, y), p(x - dx, y - dy), &Geometry::default()).unwrap();
            prop_assert!(landing.y >= 400);
            prop_assert!(landing.y < 400 + dy);
        }
    }
}
