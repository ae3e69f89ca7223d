//! Adapter module - headless control via line-delimited JSON
//!
//! Lets scripts and external agents drive a controller without a terminal.
//! The transport is whatever the caller wires in (stdin/stdout in the binary);
//! there is no networking.
//!
//! # Protocol Overview
//!
//! ## Client → Session
//!
//! - **command**: `{"type":"command","seq":1,"command":"play"}` where `command` is one of
//!   `play`, `hold`, `release`, `swap`, `undo`, `exchange`, `restart`, `snapshot`
//! - **quit**: `{"type":"quit","seq":2}` ends the session
//!
//! ## Session → Client
//!
//! - **observation**: full container state; sent on start and after every command
//! - **ack**: command applied, with a `kind`-tagged `outcome`
//! - **error**: `code` is `reserve_full`, `reserve_empty`, `undo_empty`,
//!   `invalid_command` or `sequence`
//!
//! Sequence numbers on commands must strictly increase. Errors never end the
//! session.

pub mod protocol;
pub mod session;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use protocol::{parse_message, OutboundMessage, ParsedMessage};
pub use session::{Flow, Session, SessionSummary};
