//! Paddle controller: turns a predicted landing point into a move/hold command

use super::state::{Command, Geometry};
use crate::Position;

/// Decide how to move the paddle toward the predicted landing point.
///
/// `paddle` is the paddle's top-left corner; its center is offset by
/// `paddle_half_width`. Inside the dead zone the paddle holds still.
pub fn decide(predicted: Option<Position>, paddle: Position, geometry: &Geometry) -> Command {
    let Some(target) = predicted else {
        return Command::Hold;
    };

    let center = paddle.x.saturating_add(geometry.paddle_half_width);
    let offset = center.saturating_sub(target.x);

    if offset.saturating_abs() < geometry.dead_zone {
        Command::Hold
    } else if offset > 0 {
        // Paddle is right of the target
        Command::MoveLeft
    } else {
        Command::MoveRight
    }
}
