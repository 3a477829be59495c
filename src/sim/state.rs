//! Scene, command and session types
//!
//! Everything that crosses the frame channel or survives between frames lives here.

use serde::{Deserialize, Serialize};

use crate::Position;
use crate::consts::*;

/// Round status reported by the host with every snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Ball in play (or waiting on the paddle for a serve)
    #[serde(rename = "GAME_ALIVE", alias = "PLAYING")]
    Playing,
    /// Ball fell past the paddle; the session ends
    #[serde(rename = "GAME_OVER", alias = "ROUND_LOST")]
    RoundLost,
    /// All bricks cleared; a new round starts in the same session
    #[serde(rename = "GAME_PASS", alias = "ROUND_WON")]
    RoundWon,
}

/// One frame of observed state from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub frame: u64,
    pub status: GameStatus,
    pub ball: Position,
    /// Top-left corner of the paddle
    #[serde(rename = "platform", alias = "paddle")]
    pub paddle: Position,
}

/// Paddle instruction for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    #[serde(rename = "NONE")]
    Hold,
    #[serde(rename = "MOVE_LEFT")]
    MoveLeft,
    #[serde(rename = "MOVE_RIGHT")]
    MoveRight,
    #[serde(rename = "SERVE_TO_LEFT")]
    ServeLeft,
    #[serde(rename = "SERVE_TO_RIGHT")]
    ServeRight,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Hold => "NONE",
            Command::MoveLeft => "MOVE_LEFT",
            Command::MoveRight => "MOVE_RIGHT",
            Command::ServeLeft => "SERVE_TO_LEFT",
            Command::ServeRight => "SERVE_TO_RIGHT",
        }
    }

    pub fn is_serve(&self) -> bool {
        matches!(self, Command::ServeLeft | Command::ServeRight)
    }
}

/// Play-field geometry the predictor and paddle controller work against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub prediction_floor_y: i32,
    pub paddle_line_y: i32,
    pub field_right_x: i32,
    pub paddle_half_width: i32,
    pub dead_zone: i32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            prediction_floor_y: PREDICTION_FLOOR_Y,
            paddle_line_y: PADDLE_LINE_Y,
            field_right_x: FIELD_RIGHT_X,
            paddle_half_width: PADDLE_HALF_WIDTH,
            dead_zone: DEAD_ZONE,
        }
    }
}

/// Per-life bookkeeping owned by the session loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Ball has been launched this life
    pub served: bool,
    /// Ball position from the previous PLAYING frame of this life
    pub previous_ball: Option<Position>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything observed during the finished round
    pub fn reset(&mut self) {
        self.served = false;
        self.previous_ball = None;
    }
}
