use underlay_core::{Color, CompositeDrawable, CornerRadii, Drawable, RoundedDrawable};

use crate::annotation::Annotation;
use crate::delegate::RendererDelegate;
use crate::predicate::{KeyPredicate, ValuePredicate};
use crate::renderer::{MultiLineRenderer, RendererPadding, SingleLineRenderer};

/// Style namespace key shared by all background annotations.
pub const STYLE_ANNOTATION_KEY: &str = "STYLE_ANNOTATION_KEY";

/// Value of the plain marked (filled) style.
pub const MARKED_VALUE: &str = "MARKED_KEY";

/// Value of the marked-but-failed style (fail halo behind the fill).
pub const MARKED_FAILED_VALUE: &str = "MARKED_FAILED_VALUE";

/// Resolved style values, passed explicitly at construction instead of
/// being looked up through an ambient resource context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSheet {
    /// Fill color of the marked background.
    pub fill: Color,
    /// Halo color painted behind the fill for failed spans.
    pub halo: Color,
    pub corner_radius: f32,
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
    /// How far the fail halo extends past the fill horizontally (and
    /// retreats vertically).
    pub halo_inset: f32,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            fill: Color::rgba(0xb9, 0xf6, 0xca, 0xff),
            halo: Color::rgba(0xff, 0x8a, 0x80, 0xff),
            corner_radius: 8.0,
            horizontal_padding: 0.0,
            vertical_padding: 0.0,
            halo_inset: 4.0,
        }
    }
}

impl StyleSheet {
    fn padding(&self) -> RendererPadding {
        RendererPadding::new(self.horizontal_padding, self.vertical_padding)
    }
}

pub fn marked_annotation() -> Annotation {
    Annotation::new(STYLE_ANNOTATION_KEY, MARKED_VALUE)
}

pub fn failed_annotation() -> Annotation {
    Annotation::new(STYLE_ANNOTATION_KEY, MARKED_FAILED_VALUE)
}

fn style_value_predicate(value: &str) -> Box<dyn crate::predicate::AnnotationPredicate> {
    Box::new(ValuePredicate::new(
        Box::new(KeyPredicate::new(STYLE_ANNOTATION_KEY)),
        value,
    ))
}

fn rounded(color: Color, radii: CornerRadii) -> Box<dyn Drawable> {
    Box::new(RoundedDrawable::new(color, radii))
}

/// Halo-behind-fill composite with complementary segment radii.
fn double(style: &StyleSheet, radii: CornerRadii) -> Box<dyn Drawable> {
    Box::new(CompositeDrawable::with_inset(
        rounded(style.halo, radii),
        rounded(style.fill, radii),
        style.halo_inset,
    ))
}

/// Delegate painting the plain marked fill for `MARKED_VALUE` spans.
pub fn marked_delegate(style: &StyleSheet) -> RendererDelegate {
    let r = style.corner_radius;
    RendererDelegate::new(
        style_value_predicate(MARKED_VALUE),
        Box::new(SingleLineRenderer::new(
            style.padding(),
            rounded(style.fill, CornerRadii::uniform(r)),
        )),
        Box::new(MultiLineRenderer::new(
            style.padding(),
            rounded(style.fill, CornerRadii::left_edge(r)),
            rounded(style.fill, CornerRadii::zero()),
            rounded(style.fill, CornerRadii::right_edge(r)),
        )),
    )
}

/// Delegate painting a fail halo behind the marked fill for
/// `MARKED_FAILED_VALUE` spans. Both layers are positioned by one
/// bounds update per segment and keep the same complementary rounding.
pub fn double_delegate(style: &StyleSheet) -> RendererDelegate {
    let r = style.corner_radius;
    RendererDelegate::new(
        style_value_predicate(MARKED_FAILED_VALUE),
        Box::new(SingleLineRenderer::new(
            style.padding(),
            double(style, CornerRadii::uniform(r)),
        )),
        Box::new(MultiLineRenderer::new(
            style.padding(),
            double(style, CornerRadii::left_edge(r)),
            double(style, CornerRadii::zero()),
            double(style, CornerRadii::right_edge(r)),
        )),
    )
}
