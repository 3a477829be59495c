//! Frame channel: the host boundary
//!
//! The host pushes one snapshot per frame and takes one instruction back.
//! `JsonLinesChannel` speaks that protocol as newline-delimited JSON over any
//! reader/writer pair; the binary wires it to stdin/stdout.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use thiserror::Error;

use crate::sim::{Command, SceneSnapshot};

#[derive(Debug, Error)]
pub enum ChannelError {
    /// Host closed the channel
    #[error("frame channel closed by host")]
    Closed,
    #[error("frame channel i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed snapshot on line {line}: {message}")]
    Decode { line: usize, message: String },
    #[error("failed to encode message: {0}")]
    Encode(String),
}

/// Blocking request/response link to the host game process
pub trait FrameChannel {
    /// Tell the host the pilot is initialized and snapshots may flow
    fn ready(&mut self) -> Result<(), ChannelError>;

    /// Block until the next snapshot arrives
    fn receive(&mut self) -> Result<SceneSnapshot, ChannelError>;

    /// Send the command answering `frame`; the host may drop stale frames
    fn send(&mut self, frame: u64, command: Command) -> Result<(), ChannelError>;
}

/// Messages written back to the host
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Outbound {
    Ready,
    Instruction { frame: u64, command: Command },
}

/// Newline-delimited JSON transport
pub struct JsonLinesChannel<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    line: usize,
    buf: String,
}

impl<R: BufRead, W: Write> JsonLinesChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: 0,
            buf: String::new(),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_message(&mut self, message: &Outbound) -> Result<(), ChannelError> {
        serde_json::to_writer(&mut self.writer, message)
            .map_err(|err| ChannelError::Encode(err.to_string()))?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> FrameChannel for JsonLinesChannel<R, W> {
    fn ready(&mut self) -> Result<(), ChannelError> {
        self.write_message(&Outbound::Ready)
    }

    fn receive(&mut self) -> Result<SceneSnapshot, ChannelError> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Err(ChannelError::Closed);
            }
            self.line += 1;

            let text = self.buf.trim();
            if text.is_empty() {
                continue;
            }
            return serde_json::from_str(text).map_err(|err| ChannelError::Decode {
                line: self.line,
                message: err.to_string(),
            });
        }
    }

    fn send(&mut self, frame: u64, command: Command) -> Result<(), ChannelError> {
        self.write_message(&Outbound::Instruction { frame, command })
    }
}
