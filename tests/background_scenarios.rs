//! End-to-end scenarios: annotated text through measurement, dispatch
//! and painting, asserted on the recorded display list.

use underlay::span::style::{marked_annotation, marked_delegate};
use underlay::span::{FnPredicate, STYLE_ANNOTATION_KEY, double_delegate, failed_annotation};
use underlay::{
    AnnotatedText, Annotation, BackgroundPass, Color, CornerRadii, DelegateTable, Drawable,
    MultiLineRenderer, PaintCommand, Painter, PlainLayout, RendererDelegate, RendererPadding,
    RoundedDrawable, SingleLineRenderer, StyleSheet, UnderlayConfig,
};

fn run_pass(
    annotated: &AnnotatedText,
    table: DelegateTable,
) -> Vec<PaintCommand> {
    let layout = PlainLayout::new(annotated.text());
    let mut pass = BackgroundPass::new(table);
    let mut painter = Painter::begin_frame();
    pass.draw(&mut painter, &layout, annotated, [0.0, 0.0]);
    painter.finish().commands
}

fn colors(commands: &[PaintCommand]) -> Vec<Color> {
    commands
        .iter()
        .map(|PaintCommand::FillRoundedRect { color, .. }| *color)
        .collect()
}

#[test]
fn single_line_annotation_paints_one_rect_between_measured_edges() {
    let mut annotated = AnnotatedText::new("Some text");
    annotated
        .attach_inclusive(marked_annotation(), 0, 5, 0)
        .unwrap();
    let mut table = DelegateTable::new();
    table.add(marked_delegate(&StyleSheet::default()));

    let commands = run_pass(&annotated, table);
    assert_eq!(commands.len(), 1);
    let PaintCommand::FillRoundedRect { rrect, .. } = &commands[0];
    // Measured edges: 0 - 1 padding, 6 glyphs * 8px + 1 padding.
    assert_eq!(rrect.rect.left(), -1.0);
    assert_eq!(rrect.rect.right(), 49.0);
    assert!(rrect.rect.w > 0.0);
}

#[test]
fn forced_break_paints_two_segments_and_no_middle() {
    let mut annotated = AnnotatedText::new("Some text\nSome text 2");
    annotated
        .attach_inclusive(marked_annotation(), 0, 13, 0)
        .unwrap();
    let mut table = DelegateTable::new();
    table.add(marked_delegate(&StyleSheet::default()));

    let commands = run_pass(&annotated, table);
    // end_line - start_line == 1: one start piece, one end piece.
    assert_eq!(commands.len(), 2);
    let PaintCommand::FillRoundedRect { rrect: first, .. } = &commands[0];
    let PaintCommand::FillRoundedRect { rrect: last, .. } = &commands[1];
    // Start piece sits on line 0, end piece on line 1.
    assert_eq!(first.rect.top(), 0.0);
    assert_eq!(last.rect.top(), 16.0);
    // Complementary rounding across the wrap.
    let r = StyleSheet::default().corner_radius;
    assert_eq!(first.radii, CornerRadii::left_edge(r));
    assert_eq!(last.radii, CornerRadii::right_edge(r));
}

#[test]
fn overlapping_marked_and_failed_annotations_dispatch_independently() {
    let style = StyleSheet::default();
    let mut annotated = AnnotatedText::new("Some text\nSome text 2");
    annotated
        .attach_inclusive(failed_annotation(), 0, 13, 0)
        .unwrap();
    annotated
        .attach_inclusive(marked_annotation(), 0, 5, 0)
        .unwrap();
    let mut table = DelegateTable::new();
    table.add(marked_delegate(&style));
    table.add(double_delegate(&style));

    let commands = run_pass(&annotated, table);
    // Failed span wraps: 2 segments x (halo + fill). Marked span is
    // single-line: one fill.
    assert_eq!(commands.len(), 5);
    assert_eq!(
        colors(&commands),
        [style.halo, style.fill, style.halo, style.fill, style.fill]
    );
}

#[test]
fn ad_hoc_predicate_narrows_without_touching_the_base_delegates() {
    let style = StyleSheet::default();
    let custom_fill = Color::rgba(0x33, 0x66, 0x99, 0xff);
    let gradient_like = |radii| {
        Box::new(RoundedDrawable::new(custom_fill, radii)) as Box<dyn Drawable>
    };
    let custom_delegate = RendererDelegate::new(
        Box::new(FnPredicate(|a: &Annotation, _flags: u32| {
            a.key() == STYLE_ANNOTATION_KEY && a.value() == "CUSTOM_ANNOTATION_VALUE"
        })),
        Box::new(SingleLineRenderer::new(
            RendererPadding::default(),
            gradient_like(CornerRadii::zero()),
        )),
        Box::new(MultiLineRenderer::new(
            RendererPadding::new(1.0, 0.0),
            gradient_like(CornerRadii::zero()),
            gradient_like(CornerRadii::zero()),
            gradient_like(CornerRadii::zero()),
        )),
    );

    let mut annotated = AnnotatedText::new("Some text\nSome text 2");
    annotated
        .attach_inclusive(
            Annotation::new(STYLE_ANNOTATION_KEY, "CUSTOM_ANNOTATION_VALUE"),
            0,
            13,
            0,
        )
        .unwrap();
    annotated
        .attach_inclusive(marked_annotation(), 0, 5, 0)
        .unwrap();

    let mut table = DelegateTable::new();
    table.add(marked_delegate(&style));
    table.add(custom_delegate);

    let commands = run_pass(&annotated, table);
    // Custom span: 2 segments from its own delegate only; marked span
    // still hits the marked delegate only.
    assert_eq!(commands.len(), 3);
    assert_eq!(colors(&commands), [custom_fill, custom_fill, style.fill]);
}

#[test]
fn rtl_text_keeps_line_coverage_with_swapped_edges() {
    let style = StyleSheet::default();
    let mut annotated = AnnotatedText::new("אבג אבג\nאבג");
    annotated
        .attach_inclusive(marked_annotation(), 0, 15, 0)
        .unwrap();
    let layout = PlainLayout::new(annotated.text());
    let mut table = DelegateTable::new();
    table.add(marked_delegate(&style));
    let mut pass = BackgroundPass::new(table);
    let mut painter = Painter::begin_frame();
    pass.draw(&mut painter, &layout, &annotated, [0.0, 0.0]);
    let commands = painter.finish().commands;

    assert_eq!(commands.len(), 2);
    let PaintCommand::FillRoundedRect { rrect: first, .. } = &commands[0];
    let PaintCommand::FillRoundedRect { rrect: last, .. } = &commands[1];
    // The start-shaped corner flips to the physical right edge.
    let r = style.corner_radius;
    assert_eq!(first.radii, CornerRadii::right_edge(r));
    assert_eq!(last.radii, CornerRadii::left_edge(r));
    // Line coverage matches the LTR case: first segment on line 0,
    // second on line 1, both spanning out to the line edges.
    assert_eq!(first.rect.top(), 0.0);
    assert_eq!(last.rect.top(), 16.0);
    assert!(first.rect.w > 0.0);
    assert!(last.rect.w > 0.0);
}

#[test]
fn toml_config_drives_the_painted_style() {
    let cfg = UnderlayConfig::from_toml_str(
        r##"
        [style]
        fill = "#123456"
        corner_radius = 3.0
        "##,
    )
    .unwrap();
    let style = cfg.to_style_sheet().unwrap();

    let mut annotated = AnnotatedText::new("Some text");
    annotated
        .attach_inclusive(marked_annotation(), 0, 5, 0)
        .unwrap();
    let mut table = DelegateTable::new();
    table.add(marked_delegate(&style));
    let commands = run_pass(&annotated, table);

    let PaintCommand::FillRoundedRect { rrect, color } = &commands[0];
    assert_eq!(*color, Color::rgba(0x12, 0x34, 0x56, 0xff));
    assert_eq!(rrect.radii, CornerRadii::uniform(3.0));
}
