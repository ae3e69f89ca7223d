//! Protocol module - JSON message types for the headless session
//!
//! Line-delimited JSON: every inbound and outbound message is one object on one
//! line, tagged by its `type` field.

use serde::{Deserialize, Serialize};

use crate::core::{Outcome, StackError, StackSnapshot};
use crate::types::{Piece, PieceKind, StackCommand};

// ============== Client -> Session Messages ==============

/// Command names accepted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandName {
    Play,
    Hold,
    Release,
    Swap,
    Undo,
    Exchange,
    Restart,
    /// Only asks for an observation; no state change.
    Snapshot,
}

impl CommandName {
    pub fn to_stack_command(self) -> Option<StackCommand> {
        match self {
            CommandName::Play => Some(StackCommand::Play),
            CommandName::Hold => Some(StackCommand::Hold),
            CommandName::Release => Some(StackCommand::Release),
            CommandName::Swap => Some(StackCommand::Swap),
            CommandName::Undo => Some(StackCommand::Undo),
            CommandName::Exchange => Some(StackCommand::Exchange),
            CommandName::Restart => Some(StackCommand::Restart),
            CommandName::Snapshot => None,
        }
    }
}

impl From<StackCommand> for CommandName {
    fn from(value: StackCommand) -> Self {
        match value {
            StackCommand::Play => CommandName::Play,
            StackCommand::Hold => CommandName::Hold,
            StackCommand::Release => CommandName::Release,
            StackCommand::Swap => CommandName::Swap,
            StackCommand::Undo => CommandName::Undo,
            StackCommand::Exchange => CommandName::Exchange,
            StackCommand::Restart => CommandName::Restart,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandMessage {
    pub seq: u64,
    pub command: CommandName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuitMessage {
    pub seq: u64,
}

// ============== Session -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKindLower {
    #[serde(rename = "i")]
    I,
    #[serde(rename = "o")]
    O,
    #[serde(rename = "t")]
    T,
    #[serde(rename = "l")]
    L,
    #[serde(rename = "j")]
    J,
    #[serde(rename = "s")]
    S,
    #[serde(rename = "z")]
    Z,
}

impl From<PieceKind> for PieceKindLower {
    fn from(value: PieceKind) -> Self {
        match value {
            PieceKind::I => Self::I,
            PieceKind::O => Self::O,
            PieceKind::T => Self::T,
            PieceKind::L => Self::L,
            PieceKind::J => Self::J,
            PieceKind::S => Self::S,
            PieceKind::Z => Self::Z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceWire {
    pub kind: PieceKindLower,
    pub id: u32,
}

impl From<Piece> for PieceWire {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind.into(),
            id: value.id,
        }
    }
}

fn wire_list(pieces: &[Piece]) -> Vec<PieceWire> {
    pieces.iter().copied().map(PieceWire::from).collect()
}

/// What a successful command did, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeWire {
    Play {
        played: PieceWire,
        generated: PieceWire,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        evicted: Option<PieceWire>,
    },
    Hold {
        held: PieceWire,
        generated: PieceWire,
    },
    Release {
        released: PieceWire,
    },
    Swap {
        queue_front_now: PieceWire,
        reserve_top_now: PieceWire,
    },
    Undo {
        restored: PieceWire,
        discarded: PieceWire,
    },
    Exchange {
        moved_to_reserve: Vec<PieceWire>,
        moved_to_queue: Vec<PieceWire>,
        generated: Vec<PieceWire>,
        discarded: Vec<PieceWire>,
        capacity_mismatch: bool,
    },
    Restart {
        cleared_reserve: usize,
        cleared_history: usize,
    },
}

impl From<&Outcome> for OutcomeWire {
    fn from(value: &Outcome) -> Self {
        match value {
            Outcome::Play(r) => OutcomeWire::Play {
                played: r.played.into(),
                generated: r.generated.into(),
                evicted: r.evicted.map(PieceWire::from),
            },
            Outcome::Hold(r) => OutcomeWire::Hold {
                held: r.held.into(),
                generated: r.generated.into(),
            },
            Outcome::Release(r) => OutcomeWire::Release {
                released: r.released.into(),
            },
            Outcome::Swap(r) => OutcomeWire::Swap {
                queue_front_now: r.queue_front_now.into(),
                reserve_top_now: r.reserve_top_now.into(),
            },
            Outcome::Undo(r) => OutcomeWire::Undo {
                restored: r.restored.into(),
                discarded: r.discarded.into(),
            },
            Outcome::Exchange(r) => OutcomeWire::Exchange {
                moved_to_reserve: wire_list(&r.moved_to_reserve),
                moved_to_queue: wire_list(&r.moved_to_queue),
                generated: wire_list(&r.generated),
                discarded: wire_list(&r.discarded),
                capacity_mismatch: r.mismatch.is_some(),
            },
            Outcome::Restart(r) => OutcomeWire::Restart {
                cleared_reserve: r.cleared_reserve,
                cleared_history: r.cleared_history,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckMessage {
    pub seq: u64,
    pub command: CommandName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<OutcomeWire>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    ReserveFull,
    ReserveEmpty,
    UndoEmpty,
    InvalidCommand,
    Sequence,
}

impl From<StackError> for ErrorCode {
    fn from(value: StackError) -> Self {
        match value {
            StackError::ReserveFull => ErrorCode::ReserveFull,
            StackError::ReserveEmpty => ErrorCode::ReserveEmpty,
            StackError::UndoEmpty => ErrorCode::UndoEmpty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub seq: u64,
    pub code: ErrorCode,
    pub message: String,
}

/// Full container state, sent at session start and after every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationMessage {
    pub seq: u64,
    /// Front first.
    pub queue: Vec<PieceWire>,
    /// Top first.
    pub reserve: Vec<PieceWire>,
    /// Newest first.
    pub history: Vec<PieceWire>,
    pub queue_capacity: usize,
    pub reserve_capacity: usize,
    pub undo_capacity: usize,
    pub next_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    Ack(AckMessage),
    Error(ErrorMessage),
    Observation(ObservationMessage),
}

// ============== Message Parsing ==============

/// Parsed incoming message
#[derive(Debug, Clone)]
pub enum ParsedMessage {
    Command(CommandMessage),
    Quit(QuitMessage),
    Unknown(UnknownMessage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownMessage {
    pub seq: u64,
}

/// Parse a JSON message from a string
pub fn parse_message(json: &str) -> Result<ParsedMessage, serde_json::Error> {
    #[derive(Debug, Deserialize)]
    #[serde(tag = "type")]
    enum InboundMessage {
        #[serde(rename = "command")]
        Command(CommandMessage),
        #[serde(rename = "quit")]
        Quit(QuitMessage),
    }

    match serde_json::from_str::<InboundMessage>(json) {
        Ok(InboundMessage::Command(m)) => Ok(ParsedMessage::Command(m)),
        Ok(InboundMessage::Quit(m)) => Ok(ParsedMessage::Quit(m)),
        Err(e) => {
            // Unknown message type is not a hard parse error for the protocol.
            #[derive(Debug, Deserialize)]
            struct Header<'a> {
                #[serde(rename = "type")]
                msg_type: Option<&'a str>,
                seq: Option<u64>,
            }
            let header = serde_json::from_str::<Header>(json)?;
            let msg_type = header.msg_type.unwrap_or("unknown");
            if msg_type != "command" && msg_type != "quit" {
                return Ok(ParsedMessage::Unknown(UnknownMessage {
                    seq: header.seq.unwrap_or(0),
                }));
            }
            Err(e)
        }
    }
}

// ============== Utility Functions ==============

pub fn create_ack(seq: u64, command: CommandName, outcome: Option<&Outcome>) -> OutboundMessage {
    OutboundMessage::Ack(AckMessage {
        seq,
        command,
        outcome: outcome.map(OutcomeWire::from),
    })
}

pub fn create_error(seq: u64, code: ErrorCode, message: &str) -> OutboundMessage {
    OutboundMessage::Error(ErrorMessage {
        seq,
        code,
        message: message.to_string(),
    })
}

pub fn create_observation(seq: u64, snap: &StackSnapshot) -> OutboundMessage {
    OutboundMessage::Observation(ObservationMessage {
        seq,
        queue: wire_list(&snap.queue),
        reserve: wire_list(&snap.reserve),
        history: wire_list(&snap.history),
        queue_capacity: snap.queue_capacity,
        reserve_capacity: snap.reserve_capacity,
        undo_capacity: snap.undo_capacity,
        next_id: snap.next_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameController, ScriptedKinds, StackConfig};

    #[test]
    fn test_parse_command() {
        let json = r#"{"type":"command","seq":2,"command":"exchange"}"#;

        match parse_message(json).unwrap() {
            ParsedMessage::Command(msg) => {
                assert_eq!(msg.seq, 2);
                assert_eq!(msg.command, CommandName::Exchange);
                assert_eq!(msg.command.to_stack_command(), Some(StackCommand::Exchange));
            }
            other => panic!("Expected Command message, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_quit() {
        let json = r#"{"type":"quit","seq":9}"#;
        assert!(matches!(
            parse_message(json).unwrap(),
            ParsedMessage::Quit(QuitMessage { seq: 9 })
        ));
    }

    #[test]
    fn test_unknown_type_is_not_a_parse_error() {
        let json = r#"{"type":"hello","seq":4}"#;
        match parse_message(json).unwrap() {
            ParsedMessage::Unknown(m) => assert_eq!(m.seq, 4),
            other => panic!("Expected Unknown message, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_command_name_is_a_parse_error() {
        let json = r#"{"type":"command","seq":1,"command":"rotate"}"#;
        assert!(parse_message(json).is_err());
        assert!(parse_message("not json").is_err());
    }

    #[test]
    fn test_snapshot_command_has_no_stack_command() {
        assert_eq!(CommandName::Snapshot.to_stack_command(), None);
        for cmd in StackCommand::ALL {
            assert_eq!(CommandName::from(cmd).to_stack_command(), Some(cmd));
        }
    }

    #[test]
    fn test_ack_json_shape() {
        let mut c = GameController::with_source(
            StackConfig::default(),
            ScriptedKinds::new(&[PieceKind::I]),
        )
        .unwrap();
        let outcome = c.apply(StackCommand::Play).unwrap();
        let msg = create_ack(3, CommandName::Play, Some(&outcome));

        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["type"], "ack");
        assert_eq!(value["seq"], 3);
        assert_eq!(value["command"], "play");
        assert_eq!(value["outcome"]["kind"], "play");
        assert_eq!(value["outcome"]["played"]["kind"], "i");
        assert_eq!(value["outcome"]["played"]["id"], 1001);
        assert!(value["outcome"].get("evicted").is_none());
    }

    #[test]
    fn test_error_json_shape() {
        let msg = create_error(5, StackError::UndoEmpty.into(), "nothing to undo");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["type"], "error");
        assert_eq!(value["code"], "undo_empty");
        assert_eq!(value["message"], "nothing to undo");
    }

    #[test]
    fn test_observation_lists() {
        let mut c = GameController::with_source(
            StackConfig::new(3, 2, 2),
            ScriptedKinds::new(&[PieceKind::O]),
        )
        .unwrap();
        c.hold().unwrap();
        c.play();

        let msg = create_observation(7, &c.snapshot());
        let OutboundMessage::Observation(obs) = msg else {
            panic!("Expected observation");
        };
        let ids = |v: &[PieceWire]| v.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(&obs.queue), vec![1003, 1004, 1005]);
        assert_eq!(ids(&obs.reserve), vec![1001]);
        assert_eq!(ids(&obs.history), vec![1002]);
        assert_eq!(obs.next_id, 1006);
        assert_eq!(obs.reserve_capacity, 2);
    }
}
