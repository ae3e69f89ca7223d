//! Headless session - drives a controller from line-delimited JSON.
//!
//! The session reads one message per line from any `BufRead` and writes its
//! replies to any `Write`, so the same loop serves stdin/stdout and in-memory
//! buffers in tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::{GameController, KindSource, SimpleRng, StackSnapshot};
use crate::protocol::{
    create_ack, create_error, create_observation, parse_message, CommandMessage, ErrorCode,
    OutboundMessage, ParsedMessage,
};

/// Whether the session should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Commands that were acknowledged.
    pub applied: u64,
    /// Commands the controller refused (reserve full/empty, nothing to undo).
    pub refused: u64,
    /// Lines rejected at the protocol level.
    pub rejected: u64,
}

pub struct Session<S = SimpleRng> {
    controller: GameController<S>,
    last_seq: Option<u64>,
    snapshot: StackSnapshot,
    summary: SessionSummary,
}

impl<S: KindSource> Session<S> {
    pub fn new(controller: GameController<S>) -> Self {
        Self {
            controller,
            last_seq: None,
            snapshot: StackSnapshot::default(),
            summary: SessionSummary::default(),
        }
    }

    pub fn controller(&self) -> &GameController<S> {
        &self.controller
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Observation of the current state, tagged with `seq`.
    pub fn observation(&mut self, seq: u64) -> OutboundMessage {
        self.controller.snapshot_into(&mut self.snapshot);
        create_observation(seq, &self.snapshot)
    }

    /// Handle one inbound line, returning the replies to send.
    pub fn handle_line(&mut self, line: &str) -> (Vec<OutboundMessage>, Flow) {
        let line = line.trim();
        if line.is_empty() {
            return (Vec::new(), Flow::Continue);
        }

        match parse_message(line) {
            Ok(ParsedMessage::Command(msg)) => (self.handle_command(msg), Flow::Continue),
            Ok(ParsedMessage::Quit(msg)) => {
                debug!(seq = msg.seq, "quit requested");
                (Vec::new(), Flow::Quit)
            }
            Ok(ParsedMessage::Unknown(msg)) => {
                self.summary.rejected += 1;
                warn!(seq = msg.seq, "unknown message type");
                let reply =
                    create_error(msg.seq, ErrorCode::InvalidCommand, "unknown message type");
                (vec![reply], Flow::Continue)
            }
            Err(e) => {
                self.summary.rejected += 1;
                warn!(error = %e, "malformed message");
                let reply = create_error(
                    0,
                    ErrorCode::InvalidCommand,
                    &format!("malformed message: {}", e),
                );
                (vec![reply], Flow::Continue)
            }
        }
    }

    fn handle_command(&mut self, msg: CommandMessage) -> Vec<OutboundMessage> {
        if let Some(prev) = self.last_seq {
            if msg.seq <= prev {
                self.summary.rejected += 1;
                warn!(seq = msg.seq, last = prev, "stale sequence number");
                return vec![create_error(
                    msg.seq,
                    ErrorCode::Sequence,
                    &format!("seq must increase (last was {})", prev),
                )];
            }
        }
        self.last_seq = Some(msg.seq);

        let mut replies = Vec::with_capacity(2);
        match msg.command.to_stack_command() {
            None => replies.push(create_ack(msg.seq, msg.command, None)),
            Some(command) => match self.controller.apply(command) {
                Ok(outcome) => {
                    self.summary.applied += 1;
                    replies.push(create_ack(msg.seq, msg.command, Some(&outcome)));
                }
                Err(err) => {
                    self.summary.refused += 1;
                    debug!(seq = msg.seq, command = command.as_str(), error = %err, "refused");
                    replies.push(create_error(msg.seq, err.into(), &err.to_string()));
                }
            },
        }
        replies.push(self.observation(msg.seq));
        replies
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        mut writer: W,
    ) -> Result<SessionSummary> {
        let initial = self.observation(0);
        write_message(&mut writer, &initial)?;

        for line in reader.lines() {
            let line = line.context("reading session input")?;
            let (replies, flow) = self.handle_line(&line);
            for reply in &replies {
                write_message(&mut writer, reply)?;
            }
            if flow == Flow::Quit {
                break;
            }
        }

        info!(
            applied = self.summary.applied,
            refused = self.summary.refused,
            rejected = self.summary.rejected,
            "session finished"
        );
        Ok(self.summary)
    }
}

fn write_message<W: Write>(writer: &mut W, msg: &OutboundMessage) -> Result<()> {
    serde_json::to_writer(&mut *writer, msg).context("encoding session message")?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
