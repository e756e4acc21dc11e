use crate::color::Color;
use crate::geometry::RoundedRect;

/// A single recorded paint operation.
///
/// Commands carry final absolute geometry: any active translation is
/// folded into the rect at record time, so consumers (and tests) never
/// need to replay a transform stack.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillRoundedRect { rrect: RoundedRect, color: Color },
}

/// The ordered output of one frame's background pass.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    pub commands: Vec<PaintCommand>,
}

/// Display-list recording paint surface.
///
/// The one canvas capability this pipeline needs is filling a rounded
/// rectangle with a solid color, plus a scoped origin translation for
/// the host view's content area. Hosts replay the finished
/// `DisplayList` against their real 2D surface.
pub struct Painter {
    list: DisplayList,
    translation_stack: Vec<[f32; 2]>,
}

impl Painter {
    pub fn begin_frame() -> Self {
        Self {
            list: DisplayList::default(),
            translation_stack: vec![[0.0, 0.0]],
        }
    }

    fn current_translation(&self) -> [f32; 2] {
        *self
            .translation_stack
            .last()
            .unwrap_or(&[0.0, 0.0])
    }

    /// Push an origin offset, composed with the current one.
    pub fn push_translation(&mut self, dx: f32, dy: f32) {
        let [cx, cy] = self.current_translation();
        self.translation_stack.push([cx + dx, cy + dy]);
    }

    pub fn pop_translation(&mut self) {
        if self.translation_stack.len() > 1 {
            self.translation_stack.pop();
        }
    }

    /// Fill a rounded rect with a solid color under the current
    /// translation. Degenerate and inverted rects are recorded as-is.
    pub fn fill_rounded_rect(&mut self, rrect: RoundedRect, color: Color) {
        let [dx, dy] = self.current_translation();
        self.list.commands.push(PaintCommand::FillRoundedRect {
            rrect: RoundedRect::new(rrect.rect.translated(dx, dy), rrect.radii),
            color,
        });
    }

    /// Commands recorded so far, in paint order.
    pub fn commands(&self) -> &[PaintCommand] {
        &self.list.commands
    }

    pub fn finish(self) -> DisplayList {
        self.list
    }
}
