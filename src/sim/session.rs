//! Session loop
//!
//! One snapshot in, at most one command out. Round boundaries consume the
//! host's reset acknowledgment frame without answering it.

use rand::Rng;
use serde::Serialize;

use super::control::decide;
use super::predict::predict;
use super::serve::ServeController;
use super::state::{Command, GameStatus, Geometry, SceneSnapshot, SessionState};
use crate::channel::{ChannelError, FrameChannel};
use crate::settings::Settings;

/// Number of times each command was sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandCounts {
    pub hold: u64,
    pub move_left: u64,
    pub move_right: u64,
    pub serve_left: u64,
    pub serve_right: u64,
}

impl CommandCounts {
    pub fn record(&mut self, command: Command) {
        match command {
            Command::Hold => self.hold += 1,
            Command::MoveLeft => self.move_left += 1,
            Command::MoveRight => self.move_right += 1,
            Command::ServeLeft => self.serve_left += 1,
            Command::ServeRight => self.serve_right += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.hold + self.move_left + self.move_right + self.serve_left + self.serve_right
    }
}

/// What happened over one session instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// PLAYING frames answered
    pub frames: u64,
    pub rounds_won: u32,
    /// Session ended on a lost round (as opposed to a channel failure)
    pub lost: bool,
    pub commands: CommandCounts,
}

pub struct Session<R: Rng> {
    state: SessionState,
    serve: ServeController<R>,
    geometry: Geometry,
    trace_frames: bool,
    summary: SessionSummary,
}

impl<R: Rng> Session<R> {
    pub fn new(rng: R, geometry: Geometry) -> Self {
        Self {
            state: SessionState::new(),
            serve: ServeController::new(rng),
            geometry,
            trace_frames: false,
            summary: SessionSummary::default(),
        }
    }

    pub fn from_settings(rng: R, settings: &Settings) -> Self {
        let mut session = Self::new(rng, settings.geometry);
        session.trace_frames = settings.trace_frames;
        session
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Decide the command for one PLAYING snapshot and roll the ball history forward
    pub fn step(&mut self, snapshot: &SceneSnapshot) -> Command {
        let command = if !self.state.served {
            self.serve.serve(&mut self.state)
        } else {
            let predicted = self
                .state
                .previous_ball
                .and_then(|previous| predict(snapshot.ball, previous, &self.geometry));
            decide(predicted, snapshot.paddle, &self.geometry)
        };

        if self.trace_frames {
            log::info!(
                "frame {}: ball {:?} paddle {:?} -> {}",
                snapshot.frame,
                snapshot.ball,
                snapshot.paddle,
                command.as_str()
            );
        } else {
            log::debug!(
                "frame {}: ball {:?} paddle {:?} -> {}",
                snapshot.frame,
                snapshot.ball,
                snapshot.paddle,
                command.as_str()
            );
        }

        self.state.previous_ball = Some(snapshot.ball);
        self.summary.frames += 1;
        self.summary.commands.record(command);
        command
    }

    /// Drive the session until the host reports a lost round.
    ///
    /// Channel failures propagate; there is no local recovery for a severed host.
    pub fn run<C: FrameChannel + ?Sized>(
        &mut self,
        channel: &mut C,
    ) -> Result<SessionSummary, ChannelError> {
        channel.ready()?;
        log::info!("Pilot ready, waiting for snapshots");

        loop {
            let snapshot = channel.receive()?;
            match snapshot.status {
                GameStatus::RoundLost => {
                    channel.receive()?;
                    self.state.reset();
                    self.summary.lost = true;
                    log::info!(
                        "Round lost at frame {} after {} rounds won",
                        snapshot.frame,
                        self.summary.rounds_won
                    );
                    return Ok(self.summary.clone());
                }
                GameStatus::RoundWon => {
                    channel.receive()?;
                    self.state.reset();
                    self.summary.rounds_won += 1;
                    log::info!("Round won at frame {}", snapshot.frame);
                }
                GameStatus::Playing => {
                    let command = self.step(&snapshot);
                    channel.send(snapshot.frame, command)?;
                }
            }
        }
    }
}
