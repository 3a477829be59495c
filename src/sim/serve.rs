//! Serve controller
//!
//! Launch direction is an exploration choice: a fair coin flip from the
//! injected RNG, never derived from the scene.

use rand::Rng;

use super::state::{Command, SessionState};

pub struct ServeController<R: Rng> {
    rng: R,
}

impl<R: Rng> ServeController<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a serve direction and mark the ball as launched
    pub fn serve(&mut self, state: &mut SessionState) -> Command {
        state.served = true;
        if self.rng.random_bool(0.5) {
            Command::ServeRight
        } else {
            Command::ServeLeft
        }
    }
}
