//! Paddle Pilot - a per-frame autopilot for an Arkanoid-style paddle
//!
//! Core modules:
//! - `sim`: Decision pipeline (serve, trajectory prediction, paddle control, session loop)
//! - `channel`: Frame channel contract and the JSON-lines transport
//! - `settings`: Pilot configuration

pub mod channel;
pub mod settings;
pub mod sim;

pub use channel::{ChannelError, FrameChannel, JsonLinesChannel};
pub use settings::Settings;

use glam::IVec2;

/// A point in play-field space (integer pixels, y grows downward)
pub type Position = IVec2;

/// Play-field constants
pub mod consts {
    /// Ball must be strictly below this y before a prediction is attempted
    pub const PREDICTION_FLOOR_Y: i32 = 150;
    /// Height of the paddle line the ball is projected onto
    pub const PADDLE_LINE_Y: i32 = 400;
    /// Right margin used by the reflection fold (left wall is x = 0)
    pub const FIELD_RIGHT_X: i32 = 200;

    /// Offset from the paddle's stored corner to its center
    pub const PADDLE_HALF_WIDTH: i32 = 20;
    /// Paddle holds still while |center - target| is below this
    pub const DEAD_ZONE: i32 = 15;

    /// Upper bound on prediction steps; default geometry needs at most 250
    pub const MAX_PREDICT_STEPS: u32 = 1024;
}

/// Mirror an x coordinate back into `[0, right]` across whichever wall it
/// crossed. Only one reflection is applied; arithmetic saturates at the
/// `i32` bounds.
#[inline]
pub fn fold_x(x: i32, right: i32) -> i32 {
    if x < 0 {
        x.saturating_neg()
    } else if x > right {
        right.saturating_mul(2).saturating_sub(x)
    } else {
        x
    }
}
