use tracing::trace;
use underlay_core::Painter;
use underlay_text::TextLayout;

use crate::annotation::Annotation;
use crate::delegate::RendererDelegate;
use crate::measure::LineGeometry;

/// Ordered, append-only collection of renderer delegates.
///
/// For each annotation the table invokes every delegate whose
/// predicate accepts it, in insertion order — layering is intentional,
/// a generic style delegate and a specific one may both paint. An
/// empty match set is a silent no-op.
///
/// Registration is setup-time state: it mutates the table without
/// locking and must not race an active paint pass.
#[derive(Default)]
pub struct DelegateTable {
    delegates: Vec<RendererDelegate>,
}

impl DelegateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, delegate: RendererDelegate) {
        self.delegates.push(delegate);
    }

    pub fn add_all(&mut self, delegates: impl IntoIterator<Item = RendererDelegate>) {
        self.delegates.extend(delegates);
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }

    /// Dispatch one measured annotation to all accepting delegates.
    /// Returns how many delegates painted.
    pub fn draw(
        &mut self,
        annotation: &Annotation,
        flags: u32,
        painter: &mut Painter,
        layout: &dyn TextLayout,
        geometry: LineGeometry,
    ) -> usize {
        let mut invoked = 0;
        for delegate in &mut self.delegates {
            if delegate.accepts(annotation, flags) {
                delegate.draw(painter, layout, geometry);
                invoked += 1;
            }
        }
        trace!(
            key = annotation.key(),
            value = annotation.value(),
            invoked,
            "dispatched annotation"
        );
        invoked
    }
}
