//! # Trace Canvas
//!
//! A recording surface for inspection and tests. Instead of rendering, it
//! logs every canvas call in issue order and resolves each paint against
//! the translation in force when it was issued, so a trace reads as
//! absolute page coordinates. The whole log serializes to JSON, which is
//! what the demo binary emits.

use serde::Serialize;

use crate::canvas::Canvas;
use crate::geometry::{Position, Size};

/// One recorded canvas call. Translations keep the relative offset as
/// issued; paints carry their resolved absolute origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum TraceOp {
    Translate { offset: Position },
    Paint { origin: Position, size: Size },
}

/// Canvas that records instead of drawing.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceCanvas {
    #[serde(skip)]
    offset: Position,
    ops: Vec<TraceOp>,
}

impl TraceCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded call, in issue order.
    pub fn ops(&self) -> &[TraceOp] {
        &self.ops
    }

    /// Just the paints, each with its absolute origin.
    pub fn paints(&self) -> Vec<(Position, Size)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                TraceOp::Paint { origin, size } => Some((*origin, *size)),
                TraceOp::Translate { .. } => None,
            })
            .collect()
    }

    /// Translation accumulated and not yet undone. A well-behaved draw
    /// leaves this at zero.
    pub fn net_translation(&self) -> Position {
        self.offset
    }
}

impl Canvas for TraceCanvas {
    fn translate(&mut self, offset: Position) {
        self.offset = Position::new(self.offset.x + offset.x, self.offset.y + offset.y);
        self.ops.push(TraceOp::Translate { offset });
    }

    fn paint(&mut self, size: Size) {
        self.ops.push(TraceOp::Paint {
            origin: self.offset,
            size,
        });
    }
}
