//! Per-frame decision pipeline
//!
//! Everything here is pure and synchronous:
//! - Integer arithmetic only
//! - Randomness only through an injected RNG
//! - No I/O except through a `FrameChannel` handed to the session loop

pub mod control;
pub mod predict;
pub mod serve;
pub mod session;
pub mod state;

pub use control::decide;
pub use predict::predict;
pub use serve::ServeController;
pub use session::{CommandCounts, Session, SessionSummary};
pub use state::{Command, GameStatus, Geometry, SceneSnapshot, SessionState};
