//! # Pagination Driver
//!
//! Runs the measure/draw cycle against successive pages until the root
//! reports a full render. The packing protocol itself never loops: it is
//! this driver that offers space, accepts partial progress, and bounds the
//! iteration so a child that can never be placed surfaces as an error
//! instead of an endless page stream.

use crate::canvas::Canvas;
use crate::element::Element;
use crate::error::LayoutError;
use crate::geometry::{LayoutContext, Size};

/// Reinitialize pagination state across a whole subtree.
pub fn reset_tree(element: &mut Element) {
    element.reset();
    for child in element.children_mut() {
        reset_tree(child);
    }
}

/// Lay `root` out across pages of `page_size`, calling `surface` once per
/// page for a canvas to draw into. Returns the drawn pages in order.
///
/// The tree is reset first, so pagination always starts from the full
/// child sequence. Two conditions abort with
/// [`LayoutError::NotConverging`]: the root wrapping on a fresh page
/// (a whole empty page is the most space this driver can ever offer), and
/// content still remaining once `max_pages` pages have been drawn.
pub fn paginate<C, F>(
    root: &mut Element,
    page_size: Size,
    ctx: &LayoutContext,
    max_pages: usize,
    mut surface: F,
) -> Result<Vec<C>, LayoutError>
where
    C: Canvas,
    F: FnMut(usize) -> C,
{
    if !page_size.is_valid() {
        return Err(LayoutError::invalid(format!(
            "page size {}x{} must be finite and non-negative",
            page_size.width, page_size.height
        )));
    }

    reset_tree(root);

    let mut pages: Vec<C> = Vec::new();

    loop {
        let plan = root.measure(page_size, ctx)?;

        if plan.is_wrap() {
            return Err(LayoutError::NotConverging { pages: pages.len() });
        }
        if pages.len() == max_pages {
            return Err(LayoutError::NotConverging { pages: pages.len() });
        }

        let mut canvas = surface(pages.len());
        root.draw(&mut canvas, page_size, ctx)?;
        pages.push(canvas);

        if plan.is_full() {
            break;
        }
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::NullCanvas;
    use crate::element::CustomElement;
    use crate::flow::Flow;
    use crate::plan::SpacePlan;
    use crate::trace::TraceCanvas;

    fn five_blocks() -> Element {
        let mut flow = Flow::new();
        flow.spacing(10.0);
        for _ in 0..5 {
            flow.add(Element::block(100.0, 50.0));
        }
        Element::flow(flow)
    }

    fn run(root: &mut Element, page: Size, max_pages: usize) -> Result<Vec<TraceCanvas>, LayoutError> {
        paginate(root, page, &LayoutContext::default(), max_pages, |_| {
            TraceCanvas::new()
        })
    }

    #[test]
    fn single_page_when_everything_fits() {
        let mut root = five_blocks();
        let pages = run(&mut root, Size::new(320.0, 470.0), 8).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].paints().len(), 5);
    }

    #[test]
    fn paginates_until_full_render() {
        let mut root = five_blocks();
        let pages = run(&mut root, Size::new(320.0, 60.0), 8).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].paints().len(), 3);
        assert_eq!(pages[1].paints().len(), 2);
    }

    #[test]
    fn empty_root_renders_one_blank_page() {
        let mut root = Element::flow(Flow::new());
        let pages = run(&mut root, Size::new(320.0, 470.0), 8).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].paints().is_empty());
    }

    #[test]
    fn wrap_on_a_fresh_page_does_not_converge() {
        #[derive(Debug)]
        struct Unplaceable;

        impl CustomElement for Unplaceable {
            fn measure(
                &self,
                _available: Size,
                _ctx: &LayoutContext,
            ) -> Result<SpacePlan, LayoutError> {
                Ok(SpacePlan::Wrap)
            }

            fn draw(
                &mut self,
                _canvas: &mut dyn Canvas,
                _space: Size,
                _ctx: &LayoutContext,
            ) -> Result<(), LayoutError> {
                Ok(())
            }
        }

        let mut flow = Flow::new();
        flow.add(Element::custom(Unplaceable));
        let mut root = Element::flow(flow);

        let err = run(&mut root, Size::new(320.0, 470.0), 8).unwrap_err();
        assert!(matches!(err, LayoutError::NotConverging { pages: 0 }));
    }

    #[test]
    fn page_budget_bounds_the_iteration() {
        let mut root = five_blocks();
        let err = run(&mut root, Size::new(320.0, 60.0), 1).unwrap_err();
        assert!(matches!(err, LayoutError::NotConverging { pages: 1 }));
    }

    #[test]
    fn pagination_starts_from_a_reset_tree() {
        let mut root = five_blocks();
        let ctx = LayoutContext::default();

        // consume part of the sequence outside the driver; only the cursor
        // advance matters, not the output
        let mut scratch = NullCanvas::new();
        root.draw(&mut scratch, Size::new(320.0, 60.0), &ctx).unwrap();

        let pages = run(&mut root, Size::new(320.0, 60.0), 8).unwrap();
        let drawn: usize = pages.iter().map(|p| p.paints().len()).sum();
        assert_eq!(drawn, 5);
    }

    #[test]
    fn reset_tree_reaches_nested_flows() {
        let mut inner = Flow::new();
        inner.add(Element::block(40.0, 10.0));
        inner.add(Element::block(40.0, 10.0));

        let mut outer = Flow::new();
        outer.add(Element::flow(inner));
        outer.add(Element::block(40.0, 10.0));
        let mut root = Element::flow(outer);

        let ctx = LayoutContext::default();
        let mut canvas = TraceCanvas::new();
        root.draw(&mut canvas, Size::new(300.0, 470.0), &ctx).unwrap();

        reset_tree(&mut root);

        let Element::Flow(outer) = &root else {
            panic!("root should still be a flow");
        };
        assert_eq!(outer.remaining(), 2);
        let Element::Flow(inner) = &outer.items()[0] else {
            panic!("first child should still be a flow");
        };
        assert_eq!(inner.remaining(), 2);
    }
}
