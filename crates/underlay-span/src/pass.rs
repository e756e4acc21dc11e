use tracing::debug;
use underlay_core::Painter;
use underlay_text::TextLayout;

use crate::annotation::AnnotatedText;
use crate::delegate::RendererDelegate;
use crate::dispatch::DelegateTable;
use crate::measure::measure_span;

/// Per-frame driver: measures every attached annotation and dispatches
/// it to the delegate table, under the host view's content-area
/// offset.
///
/// The whole pass runs synchronously inside one host paint callback;
/// annotations and the delegate table must not be mutated while it
/// runs. Delegates are registered during setup, before the first pass.
pub struct BackgroundPass {
    horizontal_padding: f32,
    table: DelegateTable,
}

impl BackgroundPass {
    /// Default edge padding between the background and glyph edges.
    pub const DEFAULT_HORIZONTAL_PADDING: f32 = 1.0;

    pub fn new(table: DelegateTable) -> Self {
        Self {
            horizontal_padding: Self::DEFAULT_HORIZONTAL_PADDING,
            table,
        }
    }

    pub fn with_horizontal_padding(mut self, horizontal_padding: f32) -> Self {
        self.horizontal_padding = horizontal_padding;
        self
    }

    pub fn add_delegate(&mut self, delegate: RendererDelegate) {
        self.table.add(delegate);
    }

    pub fn add_delegates(&mut self, delegates: impl IntoIterator<Item = RendererDelegate>) {
        self.table.add_all(delegates);
    }

    /// Draw every annotation's background. `content_origin` is the
    /// host view's content-area offset (e.g. view padding); the
    /// translation is scoped to this pass.
    pub fn draw(
        &mut self,
        painter: &mut Painter,
        layout: &dyn TextLayout,
        annotated: &AnnotatedText,
        content_origin: [f32; 2],
    ) {
        painter.push_translation(content_origin[0], content_origin[1]);
        let mut painted = 0;
        for span in annotated.spans() {
            let geometry = measure_span(span, layout, self.horizontal_padding);
            painted += self.table.draw(
                &span.annotation,
                span.flags,
                painter,
                layout,
                geometry,
            );
        }
        painter.pop_translation();
        debug!(
            annotations = annotated.spans().len(),
            painted, "background pass complete"
        );
    }
}
