//! StackView: maps a `core::StackSnapshot` into a styled text panel.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use crate::core::{Outcome, StackError, StackSnapshot};
use crate::types::{Piece, PieceKind};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bold: false,
            dim: false,
        }
    }
}

impl TextStyle {
    const TITLE: TextStyle = TextStyle {
        fg: Rgb::new(240, 240, 240),
        bold: true,
        dim: false,
    };
    const DIM: TextStyle = TextStyle {
        fg: Rgb::new(140, 140, 140),
        bold: false,
        dim: true,
    };
    const ERROR: TextStyle = TextStyle {
        fg: Rgb::new(230, 90, 90),
        bold: true,
        dim: false,
    };
    const OK: TextStyle = TextStyle {
        fg: Rgb::new(120, 220, 140),
        bold: false,
        dim: false,
    };

    pub fn piece(kind: PieceKind) -> Self {
        Self {
            fg: piece_color(kind),
            bold: true,
            dim: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
}

/// One row of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn push(&mut self, text: impl Into<String>, style: TextStyle) -> &mut Self {
        self.spans.push(Span {
            text: text.into(),
            style,
        });
        self
    }

    fn piece(&mut self, piece: Piece) -> &mut Self {
        self.push(piece.to_string(), TextStyle::piece(piece.kind))
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Rendered output of [`StackView`], top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    pub lines: Vec<Line>,
}

impl Panel {
    fn line(&mut self) -> &mut Line {
        self.lines.push(Line::default());
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Unstyled text, one line per row.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text());
            out.push('\n');
        }
        out
    }
}

/// Message shown under the containers after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Done(String),
    Refused(String),
}

impl Status {
    pub fn from_result(result: &Result<Outcome, StackError>) -> Self {
        match result {
            Ok(outcome) => Status::Done(describe_outcome(outcome)),
            Err(err) => Status::Refused(err.to_string()),
        }
    }
}

/// Renders the queue as an index table (with front/back markers), followed by
/// the reserve, the undo history and an optional status line.
#[derive(Debug, Clone, Default)]
pub struct StackView {
    footer: Option<&'static str>,
}

impl StackView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_footer(mut self, footer: &'static str) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn render(&self, snap: &StackSnapshot, status: Option<&Status>) -> Panel {
        let mut panel = Panel::default();

        panel.line().push(
            format!("NEXT PIECES (capacity {})", snap.queue_capacity),
            TextStyle::TITLE,
        );
        panel.line().push("| idx | piece      |", TextStyle::DIM);
        // Full queue: the back cursor equals the front; the newest piece sits just before it.
        let newest = snap
            .queue_back
            .checked_sub(1)
            .unwrap_or(snap.queue_capacity.saturating_sub(1));
        for (i, piece) in snap.queue_slots.iter().enumerate() {
            let marker = if i == snap.queue_front {
                " <- next (front)"
            } else if i == newest {
                " <- newest (back)"
            } else {
                ""
            };
            panel
                .line()
                .push(format!("| {:>3} | ", i), TextStyle::DIM)
                .piece(*piece)
                .push(" |", TextStyle::DIM)
                .push(marker, TextStyle::OK);
        }
        panel.blank();

        panel.line().push(
            format!("RESERVE ({}/{})", snap.reserve.len(), snap.reserve_capacity),
            TextStyle::TITLE,
        );
        push_stack(&mut panel, &snap.reserve, " <- top");
        panel.blank();

        panel.line().push(
            format!("UNDO ({}/{})", snap.history.len(), snap.undo_capacity),
            TextStyle::TITLE,
        );
        push_stack(&mut panel, &snap.history, " <- last played");
        panel.blank();

        match status {
            Some(Status::Done(msg)) => {
                panel.line().push(msg.as_str(), TextStyle::OK);
            }
            Some(Status::Refused(msg)) => {
                panel.line().push(format!("refused: {}", msg), TextStyle::ERROR);
            }
            None => panel.blank(),
        }

        if let Some(footer) = self.footer {
            panel.line().push(footer, TextStyle::DIM);
        }
        panel
    }
}

fn push_stack(panel: &mut Panel, pieces: &[Piece], top_marker: &str) {
    if pieces.is_empty() {
        panel.line().push("  (empty)", TextStyle::DIM);
        return;
    }
    for (i, piece) in pieces.iter().enumerate() {
        let line = panel.line();
        line.push("  ", TextStyle::default()).piece(*piece);
        if i == 0 {
            line.push(top_marker, TextStyle::DIM);
        }
    }
}

/// Short human description of an outcome.
pub fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Play(r) => {
            let mut s = format!("played {}, queued {}", r.played, r.generated);
            if let Some(old) = r.evicted {
                let _ = write!(s, ", {} left undo history", old);
            }
            s
        }
        Outcome::Hold(r) => format!("held {}, queued {}", r.held, r.generated),
        Outcome::Release(r) => format!("released {}", r.released),
        Outcome::Swap(r) => format!(
            "swapped: queue front {}, reserve top {}",
            r.queue_front_now, r.reserve_top_now
        ),
        Outcome::Undo(r) => format!("restored {}, dropped {}", r.restored, r.discarded),
        Outcome::Exchange(r) => {
            let mut s = format!(
                "exchanged {} to reserve, {} to queue",
                r.moved_to_reserve.len(),
                r.moved_to_queue.len()
            );
            if r.mismatch.is_some() {
                s.push_str(" (uneven)");
            }
            s
        }
        Outcome::Restart(r) => format!(
            "restarted, cleared {} reserved and {} undo entries",
            r.cleared_reserve, r.cleared_history
        ),
    }
}

pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}
