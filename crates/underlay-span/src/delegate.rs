use underlay_core::Painter;
use underlay_text::TextLayout;

use crate::annotation::Annotation;
use crate::measure::LineGeometry;
use crate::predicate::AnnotationPredicate;
use crate::renderer::Renderer;

/// One match predicate bound to a same-line and a cross-line renderer:
/// the unit registered with the dispatch table.
///
/// Plain composition, no inheritance: the predicate decides whether
/// the delegate applies, and `draw` routes to the single-line renderer
/// exactly when the measured span starts and ends on one line.
pub struct RendererDelegate {
    predicate: Box<dyn AnnotationPredicate>,
    single_line: Box<dyn Renderer>,
    multi_line: Box<dyn Renderer>,
}

impl RendererDelegate {
    pub fn new(
        predicate: Box<dyn AnnotationPredicate>,
        single_line: Box<dyn Renderer>,
        multi_line: Box<dyn Renderer>,
    ) -> Self {
        Self {
            predicate,
            single_line,
            multi_line,
        }
    }

    pub fn accepts(&self, annotation: &Annotation, flags: u32) -> bool {
        self.predicate.matches(annotation, flags)
    }

    pub fn draw(&mut self, painter: &mut Painter, layout: &dyn TextLayout, geometry: LineGeometry) {
        let renderer = if geometry.start_line == geometry.end_line {
            &mut self.single_line
        } else {
            &mut self.multi_line
        };
        renderer.draw(painter, layout, geometry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::predicate::KeyPredicate;

    /// Renderer that records how often it ran.
    struct CountingRenderer(Rc<Cell<usize>>);

    impl Renderer for CountingRenderer {
        fn draw(&mut self, _: &mut Painter, _: &dyn TextLayout, _: LineGeometry) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn counting_delegate() -> (RendererDelegate, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let single = Rc::new(Cell::new(0));
        let multi = Rc::new(Cell::new(0));
        let delegate = RendererDelegate::new(
            Box::new(KeyPredicate::new("STYLE")),
            Box::new(CountingRenderer(single.clone())),
            Box::new(CountingRenderer(multi.clone())),
        );
        (delegate, single, multi)
    }

    fn geometry(start_line: usize, end_line: usize) -> LineGeometry {
        LineGeometry {
            start_line,
            end_line,
            start_offset: 0.0,
            end_offset: 10.0,
        }
    }

    struct NoLayout;
    impl TextLayout for NoLayout {
        fn line_count(&self) -> usize {
            0
        }
        fn line_for_offset(&self, _: usize) -> usize {
            0
        }
        fn line_top(&self, _: usize) -> f32 {
            0.0
        }
        fn line_bottom(&self, _: usize) -> f32 {
            0.0
        }
        fn line_left(&self, _: usize) -> f32 {
            0.0
        }
        fn line_right(&self, _: usize) -> f32 {
            0.0
        }
        fn paragraph_direction(&self, _: usize) -> underlay_text::ParagraphDirection {
            underlay_text::ParagraphDirection::Ltr
        }
        fn primary_horizontal(&self, _: usize) -> f32 {
            0.0
        }
    }

    #[test]
    fn same_line_routes_to_single_renderer() {
        let (mut delegate, single, multi) = counting_delegate();
        let mut p = Painter::begin_frame();
        delegate.draw(&mut p, &NoLayout, geometry(2, 2));
        assert_eq!(single.get(), 1);
        assert_eq!(multi.get(), 0);
    }

    #[test]
    fn cross_line_routes_to_multi_renderer() {
        let (mut delegate, single, multi) = counting_delegate();
        let mut p = Painter::begin_frame();
        delegate.draw(&mut p, &NoLayout, geometry(0, 1));
        assert_eq!(single.get(), 0);
        assert_eq!(multi.get(), 1);
    }

    #[test]
    fn accepts_follows_the_predicate() {
        let (delegate, _, _) = counting_delegate();
        assert!(delegate.accepts(&Annotation::new("STYLE", "x"), 0));
        assert!(!delegate.accepts(&Annotation::new("OTHER", "x"), 0));
    }
}
