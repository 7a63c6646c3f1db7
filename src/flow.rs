//! # Flow Packing
//!
//! The masonry container: packs variably sized children into wrapped lines,
//! top to bottom, and resumes layout across page boundaries. Measurement
//! packs speculatively without touching any state; drawing re-runs the
//! identical partition, emits canvas calls, and commits by advancing the
//! cursor. One packing routine backs both phases, so they can never
//! disagree about which children land on the current page.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::element::Element;
use crate::error::LayoutError;
use crate::geometry::{LayoutContext, Position, Size, Unit};
use crate::plan::SpacePlan;

/// Horizontal distribution of a line's elements across the available width.
///
/// `Justify` and `SpaceAround` recompute the inter-element gap from the
/// line's slack; the edge-anchored modes keep the configured horizontal
/// spacing and place the slack before, after, or around the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
    SpaceAround,
}

/// Vertical placement of an element within its line's height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Baseline {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Horizontal anchor for placement. Right-to-left mirrors every x offset
/// against the right edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// One child admitted to a line: its arena index and measured size.
#[derive(Debug, Clone, Copy)]
struct LineEntry {
    index: usize,
    size: Size,
}

/// A packed row of children. Ephemeral — rebuilt from the cursor on every
/// measure and draw.
#[derive(Debug)]
struct Line {
    entries: Vec<LineEntry>,
}

impl Line {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn height(&self) -> f64 {
        self.entries.iter().map(|e| e.size.height).fold(0.0, f64::max)
    }

    fn content_width(&self) -> f64 {
        self.entries.iter().map(|e| e.size.width).sum()
    }
}

/// The masonry flow container.
///
/// Children live in an arena in insertion order; `cursor` indexes the first
/// not-yet-drawn child. Measurement never moves the cursor. Each draw
/// advances it by exactly the children committed to the page, so a
/// subsequent measure/draw cycle continues where the previous one stopped.
/// The cursor only ever shrinks the remaining range; [`Flow::reset`] is the
/// sole way to rewind it.
#[derive(Debug, Default)]
pub struct Flow {
    items: Vec<Element>,
    cursor: usize,
    vertical_spacing: f64,
    horizontal_spacing: f64,
    alignment: Option<Alignment>,
    baseline: Baseline,
    direction: ContentDirection,
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    // ── configuration ──

    /// Set both vertical and horizontal spacing, in points.
    pub fn spacing(&mut self, value: f64) -> &mut Self {
        self.vertical_spacing = value;
        self.horizontal_spacing = value;
        self
    }

    /// Set both spacings in the given unit.
    pub fn spacing_in(&mut self, value: f64, unit: Unit) -> &mut Self {
        self.spacing(unit.to_points(value))
    }

    /// Space between consecutive lines, in points.
    pub fn vertical_spacing(&mut self, value: f64) -> &mut Self {
        self.vertical_spacing = value;
        self
    }

    pub fn vertical_spacing_in(&mut self, value: f64, unit: Unit) -> &mut Self {
        self.vertical_spacing(unit.to_points(value))
    }

    /// Space between consecutive elements on a line, in points.
    pub fn horizontal_spacing(&mut self, value: f64) -> &mut Self {
        self.horizontal_spacing = value;
        self
    }

    pub fn horizontal_spacing_in(&mut self, value: f64, unit: Unit) -> &mut Self {
        self.horizontal_spacing(unit.to_points(value))
    }

    pub fn align_left(&mut self) -> &mut Self {
        self.alignment = Some(Alignment::Left);
        self
    }

    pub fn align_center(&mut self) -> &mut Self {
        self.alignment = Some(Alignment::Center);
        self
    }

    pub fn align_right(&mut self) -> &mut Self {
        self.alignment = Some(Alignment::Right);
        self
    }

    pub fn align_justify(&mut self) -> &mut Self {
        self.alignment = Some(Alignment::Justify);
        self
    }

    pub fn align_space_around(&mut self) -> &mut Self {
        self.alignment = Some(Alignment::SpaceAround);
        self
    }

    pub fn baseline_top(&mut self) -> &mut Self {
        self.baseline = Baseline::Top;
        self
    }

    pub fn baseline_middle(&mut self) -> &mut Self {
        self.baseline = Baseline::Middle;
        self
    }

    pub fn baseline_bottom(&mut self) -> &mut Self {
        self.baseline = Baseline::Bottom;
        self
    }

    pub fn content_direction(&mut self, direction: ContentDirection) -> &mut Self {
        self.direction = direction;
        self
    }

    /// Register a new child slot and hand it back for the caller to fill.
    pub fn item(&mut self) -> &mut Element {
        self.items.push(Element::default());
        let slot = self.items.len() - 1;
        &mut self.items[slot]
    }

    /// Append an already-built child.
    pub fn add(&mut self, element: Element) -> &mut Self {
        self.items.push(element);
        self
    }

    // ── state ──

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Element] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Children not yet committed by a draw.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }

    /// Rewind the cursor to the full child sequence. The only way the
    /// remaining range ever grows.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    // ── layout ──

    /// Pack as many remaining children as the space holds and classify the
    /// attempt. Pure: repeated calls with the same inputs give the same
    /// answer and nothing is mutated, so ancestors may probe trial sizes
    /// freely.
    pub fn measure(&self, available: Size, ctx: &LayoutContext) -> Result<SpacePlan, LayoutError> {
        self.validate(available)?;

        if self.remaining() == 0 {
            return Ok(SpacePlan::FullRender(Size::ZERO));
        }

        let lines = self.compose(available, ctx)?;

        if lines.is_empty() {
            return Ok(SpacePlan::Wrap);
        }

        let mut width: f64 = 0.0;
        let mut height: f64 = 0.0;
        for line in &lines {
            let with_spacing =
                line.content_width() + (line.len() - 1) as f64 * self.horizontal_spacing;
            width = width.max(with_spacing);
            height += line.height();
        }
        height += (lines.len() - 1) as f64 * self.vertical_spacing;

        let committed: usize = lines.iter().map(Line::len).sum();
        let target = Size::new(width, height);

        if committed < self.remaining() {
            Ok(SpacePlan::PartialRender(target))
        } else {
            Ok(SpacePlan::FullRender(target))
        }
    }

    /// Reproduce the partition the preceding measurement saw, emit canvas
    /// calls for every committed child, and advance the cursor past them.
    /// Leaves the canvas transform exactly as it found it.
    pub fn draw(
        &mut self,
        canvas: &mut dyn Canvas,
        available: Size,
        ctx: &LayoutContext,
    ) -> Result<(), LayoutError> {
        self.validate(available)?;

        let lines = self.compose(available, ctx)?;

        let mut committed = 0;
        let mut line_top = 0.0;

        for line in &lines {
            self.draw_line(canvas, line, line_top, available, ctx)?;
            committed += line.len();
            line_top += line.height() + self.vertical_spacing;
        }

        self.cursor += committed;
        Ok(())
    }

    /// Greedily build lines from the cursor forward until the children run
    /// out, a child wraps at the front of a line, or the next line's height
    /// would overflow the page.
    fn compose(&self, available: Size, ctx: &LayoutContext) -> Result<Vec<Line>, LayoutError> {
        let mut lines = Vec::new();
        let mut next = self.cursor;
        let mut top = 0.0;

        while next < self.items.len() {
            let line = self.pack_line(next, available, ctx)?;
            if line.entries.is_empty() {
                break;
            }

            let height = line.height();
            if top + height > available.height + ctx.epsilon {
                break;
            }

            next += line.len();
            top += height + self.vertical_spacing;
            lines.push(line);
        }

        Ok(lines)
    }

    /// Fill one line starting at `start`. Children are probed at the full
    /// available width with unbounded height; a Wrap answer or a width
    /// overflow closes the line. The width bound never rejects a line's
    /// first element — an oversized child is placed alone rather than
    /// dropped, so every committed line makes progress.
    fn pack_line(
        &self,
        start: usize,
        available: Size,
        ctx: &LayoutContext,
    ) -> Result<Line, LayoutError> {
        let mut entries: Vec<LineEntry> = Vec::new();

        // SpaceAround owes an outer margin on both flanks; reserve it up
        // front so the packed line leaves room.
        let mut left = match self.effective_alignment() {
            Alignment::SpaceAround => self.horizontal_spacing * 2.0,
            _ => 0.0,
        };

        let probe = Size::new(available.width, f64::INFINITY);

        for index in start..self.items.len() {
            let size = match self.items[index].measure(probe, ctx)? {
                SpacePlan::Wrap => break,
                SpacePlan::PartialRender(size) | SpacePlan::FullRender(size) => size,
            };

            if !size.is_valid() {
                return Err(LayoutError::invalid(format!(
                    "child {index} measured {}x{}; sizes must be finite and non-negative",
                    size.width, size.height
                )));
            }

            if !entries.is_empty() && left + size.width > available.width + ctx.epsilon {
                break;
            }

            left += size.width + self.horizontal_spacing;
            entries.push(LineEntry { index, size });
        }

        Ok(Line { entries })
    }

    /// Place and draw one line's elements at `line_top`. Every translate is
    /// undone by its exact reverse before the next element, child failure
    /// included.
    fn draw_line(
        &mut self,
        canvas: &mut dyn Canvas,
        line: &Line,
        line_top: f64,
        available: Size,
        ctx: &LayoutContext,
    ) -> Result<(), LayoutError> {
        let alignment = self.effective_alignment();
        let count = line.len() as f64;
        let line_height = line.height();

        // Justify and SpaceAround split the raw slack (spacing not
        // deducted) into their own gaps; the rest keep the configured one.
        let slack = available.width - line.content_width();
        let gap = match alignment {
            Alignment::Justify if line.len() == 1 => 0.0,
            Alignment::Justify => slack / (count - 1.0),
            Alignment::SpaceAround => slack / (count + 1.0),
            _ => self.horizontal_spacing,
        };

        // Slack left once the configured spacing is paid; anchors the line
        // within the available width.
        let leftover =
            available.width - line.content_width() - (count - 1.0) * self.horizontal_spacing;
        let mut left = match alignment {
            Alignment::Left => match self.direction {
                ContentDirection::LeftToRight => 0.0,
                ContentDirection::RightToLeft => leftover,
            },
            Alignment::Right => match self.direction {
                ContentDirection::LeftToRight => leftover,
                ContentDirection::RightToLeft => 0.0,
            },
            Alignment::Center => leftover / 2.0,
            Alignment::Justify => 0.0,
            Alignment::SpaceAround => gap,
        };

        for entry in &line.entries {
            let mut size = entry.size;

            let baseline = match self.baseline {
                Baseline::Top => 0.0,
                Baseline::Middle => (line_height - size.height) / 2.0,
                Baseline::Bottom => line_height - size.height,
            };

            // A zero-height element marks the row rather than occupying it:
            // stretch it to the full line height before drawing.
            if size.height == 0.0 {
                size = Size::new(size.width, line_height);
            }

            let x = match self.direction {
                ContentDirection::LeftToRight => left,
                ContentDirection::RightToLeft => available.width - size.width - left,
            };
            let offset = Position::new(x, line_top + baseline);

            canvas.translate(offset);
            let drawn = self.items[entry.index].draw(canvas, size, ctx);
            canvas.translate(offset.reverse());
            drawn?;

            left += size.width + gap;
        }

        Ok(())
    }

    /// The configured alignment, or the content direction's natural edge
    /// when none was set.
    fn effective_alignment(&self) -> Alignment {
        self.alignment.unwrap_or(match self.direction {
            ContentDirection::LeftToRight => Alignment::Left,
            ContentDirection::RightToLeft => Alignment::Right,
        })
    }

    fn validate(&self, available: Size) -> Result<(), LayoutError> {
        if !(self.vertical_spacing.is_finite() && self.vertical_spacing >= 0.0) {
            return Err(LayoutError::invalid(format!(
                "vertical spacing {} must be finite and non-negative",
                self.vertical_spacing
            )));
        }
        if !(self.horizontal_spacing.is_finite() && self.horizontal_spacing >= 0.0) {
            return Err(LayoutError::invalid(format!(
                "horizontal spacing {} must be finite and non-negative",
                self.horizontal_spacing
            )));
        }
        if !(available.width.is_finite() && available.width >= 0.0) {
            return Err(LayoutError::invalid(format!(
                "available width {} must be finite and non-negative",
                available.width
            )));
        }
        if available.height.is_nan() || available.height < 0.0 {
            return Err(LayoutError::invalid(format!(
                "available height {} must be non-negative",
                available.height
            )));
        }
        Ok(())
    }
}
