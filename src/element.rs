//! # Element Tree
//!
//! A document is a tree of elements, and every element answers the same two
//! calls: `measure` (how much space would you take?) and `draw` (take it).
//! Measurement is side-effect-free and may be repeated speculatively — an
//! ancestor probing trial widths must not disturb anything. Drawing is the
//! only operation allowed to advance pagination state.
//!
//! The kinds are a closed enum rather than a trait object per node: the
//! finite set the core knows about is matched explicitly, and one `Custom`
//! variant carries caller-supplied behavior behind the [`CustomElement`]
//! trait for everything else.

use std::fmt;

use crate::canvas::Canvas;
use crate::error::LayoutError;
use crate::flow::Flow;
use crate::geometry::{LayoutContext, Size};
use crate::plan::SpacePlan;

/// Caller-supplied element behavior, boxed into [`Element::Custom`].
///
/// `measure` must be referentially transparent: same space, same answer, no
/// state touched. `draw` may mutate internal pagination state. `reset`
/// restores any such state to pristine; the default is a no-op for stateless
/// elements.
pub trait CustomElement: fmt::Debug {
    fn measure(&self, available: Size, ctx: &LayoutContext) -> Result<SpacePlan, LayoutError>;

    fn draw(
        &mut self,
        canvas: &mut dyn Canvas,
        space: Size,
        ctx: &LayoutContext,
    ) -> Result<(), LayoutError>;

    fn reset(&mut self) {}
}

/// A node in the element tree. A parent exclusively owns its children for
/// the tree's lifetime.
#[derive(Debug, Default)]
pub enum Element {
    /// Draws nothing, occupies nothing. The placeholder a fresh child slot
    /// starts as.
    #[default]
    Empty,
    /// A rigid box of declared size.
    Block(Block),
    /// A flow container packing children into wrapped lines.
    Flow(Flow),
    /// Caller-supplied behavior.
    Custom(Box<dyn CustomElement>),
}

impl Element {
    /// A rigid box leaf.
    pub fn block(width: f64, height: f64) -> Self {
        Element::Block(Block::new(Size::new(width, height)))
    }

    /// A flow container.
    pub fn flow(flow: Flow) -> Self {
        Element::Flow(flow)
    }

    /// Caller-supplied behavior.
    pub fn custom(element: impl CustomElement + 'static) -> Self {
        Element::Custom(Box::new(element))
    }

    /// Ask how much of `available` this element would take. Never mutates.
    pub fn measure(
        &self,
        available: Size,
        ctx: &LayoutContext,
    ) -> Result<SpacePlan, LayoutError> {
        match self {
            Element::Empty => Ok(SpacePlan::FullRender(Size::ZERO)),
            Element::Block(block) => block.measure(available, ctx),
            Element::Flow(flow) => flow.measure(available, ctx),
            Element::Custom(custom) => custom.measure(available, ctx),
        }
    }

    /// Draw into `space`. Must follow a non-Wrap measurement of the same (or
    /// smaller) space. The only operation that advances pagination cursors.
    pub fn draw(
        &mut self,
        canvas: &mut dyn Canvas,
        space: Size,
        ctx: &LayoutContext,
    ) -> Result<(), LayoutError> {
        match self {
            Element::Empty => Ok(()),
            Element::Block(block) => {
                block.draw(canvas, space);
                Ok(())
            }
            Element::Flow(flow) => flow.draw(canvas, space, ctx),
            Element::Custom(custom) => custom.draw(canvas, space, ctx),
        }
    }

    /// Direct children, for traversal. Leaves have none.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Flow(flow) => flow.items(),
            _ => &[],
        }
    }

    /// Direct children, mutable. The reset broadcast walks these.
    pub fn children_mut(&mut self) -> &mut [Element] {
        match self {
            Element::Flow(flow) => flow.items_mut(),
            _ => &mut [],
        }
    }

    /// Restore this node's own pagination state. Does not recurse — tree-wide
    /// propagation belongs to the owner (see [`crate::driver::reset_tree`]).
    pub fn reset(&mut self) {
        match self {
            Element::Flow(flow) => flow.reset(),
            Element::Custom(custom) => custom.reset(),
            _ => {}
        }
    }
}

/// A rigid box: reports its declared size when the offered space can hold
/// it, wraps otherwise. Drawing paints one primitive filling the given
/// space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    size: Size,
}

impl Block {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn measure(
        &self,
        available: Size,
        ctx: &LayoutContext,
    ) -> Result<SpacePlan, LayoutError> {
        if !self.size.is_valid() {
            return Err(LayoutError::invalid(format!(
                "block declares size {}x{}; dimensions must be finite and non-negative",
                self.size.width, self.size.height
            )));
        }

        if self.size.fits_within(available, ctx.epsilon) {
            Ok(SpacePlan::FullRender(self.size))
        } else {
            Ok(SpacePlan::Wrap)
        }
    }

    pub(crate) fn draw(&self, canvas: &mut dyn Canvas, space: Size) {
        // The given space may differ from the declared size: zero-height
        // blocks arrive stretched to their line height.
        canvas.paint(space);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use crate::trace::TraceCanvas;

    #[test]
    fn block_fits_reports_declared_size() {
        let ctx = LayoutContext::default();
        let block = Block::new(Size::new(100.0, 50.0));
        assert_eq!(block.size(), Size::new(100.0, 50.0));
        let plan = block.measure(Size::new(320.0, 470.0), &ctx).unwrap();
        assert_eq!(plan, SpacePlan::FullRender(Size::new(100.0, 50.0)));
    }

    #[test]
    fn block_wraps_when_space_too_small() {
        let ctx = LayoutContext::default();
        let block = Block::new(Size::new(100.0, 50.0));
        assert!(block.measure(Size::new(99.0, 470.0), &ctx).unwrap().is_wrap());
        assert!(block.measure(Size::new(320.0, 49.0), &ctx).unwrap().is_wrap());
    }

    #[test]
    fn block_exact_fit_is_tolerant() {
        let ctx = LayoutContext::default();
        let block = Block::new(Size::new(100.0, 50.0));
        let plan = block.measure(Size::new(100.0, 50.0), &ctx).unwrap();
        assert!(plan.is_full());
    }

    #[test]
    fn block_with_invalid_size_fails_fast() {
        let ctx = LayoutContext::default();
        let block = Block::new(Size::new(f64::NAN, 50.0));
        let err = block.measure(Size::new(320.0, 470.0), &ctx).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidInput { .. }));
    }

    #[test]
    fn empty_element_is_zero_sized_and_silent() {
        let ctx = LayoutContext::default();
        let mut element = Element::Empty;
        let plan = element.measure(Size::new(10.0, 10.0), &ctx).unwrap();
        assert_eq!(plan, SpacePlan::FullRender(Size::ZERO));

        let mut canvas = TraceCanvas::new();
        element.draw(&mut canvas, Size::ZERO, &ctx).unwrap();
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn custom_element_dispatches() {
        #[derive(Debug)]
        struct Half;

        impl CustomElement for Half {
            fn measure(
                &self,
                available: Size,
                _ctx: &LayoutContext,
            ) -> Result<SpacePlan, LayoutError> {
                Ok(SpacePlan::FullRender(Size::new(
                    available.width / 2.0,
                    10.0,
                )))
            }

            fn draw(
                &mut self,
                canvas: &mut dyn Canvas,
                space: Size,
                _ctx: &LayoutContext,
            ) -> Result<(), LayoutError> {
                canvas.paint(space);
                Ok(())
            }
        }

        let ctx = LayoutContext::default();
        let mut element = Element::custom(Half);
        let plan = element.measure(Size::new(200.0, 100.0), &ctx).unwrap();
        assert_eq!(plan.size(), Some(Size::new(100.0, 10.0)));

        let mut canvas = TraceCanvas::new();
        element
            .draw(&mut canvas, Size::new(100.0, 10.0), &ctx)
            .unwrap();
        assert_eq!(canvas.paints(), vec![(Position::ZERO, Size::new(100.0, 10.0))]);
    }

    #[test]
    fn leaves_have_no_children() {
        assert!(Element::block(10.0, 10.0).children().is_empty());
        assert!(Element::Empty.children().is_empty());
    }
}
