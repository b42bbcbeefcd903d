use rangeslider::slider::format_value;
use rangeslider::{
    Buffer, ListenerRegistry, Range, Rect, Slider, SliderConfig, SliderTheme, SliderView,
    TrackBounds,
};

fn render(slider: &mut Slider, width: u16) -> Buffer {
    let mut buf = Buffer::new(width, 1);
    slider.render(&mut buf, Rect::new(0, 0, width, 1), &SliderTheme::default());
    buf
}

#[test]
fn test_view_percentages() {
    let range = Range::new(20.0, 70.0, 5.0).unwrap();
    let view = SliderView::new(45.0, &range);

    assert_eq!(view.percent, 50.0);
    assert_eq!(view.fill_percent(), 50.0);
    assert_eq!(view.thumb_offset_percent(), 50.0);
}

#[test]
fn test_view_percent_is_clamped() {
    let range = Range::new(0.0, 10.0, 1.0).unwrap();
    assert_eq!(SliderView::new(-5.0, &range).percent, 0.0);
    assert_eq!(SliderView::new(15.0, &range).percent, 100.0);
}

#[test]
fn test_thumb_column() {
    let range = Range::new(0.0, 100.0, 1.0).unwrap();
    let track = Rect::new(3, 0, 11, 1);

    assert_eq!(SliderView::new(0.0, &range).thumb_column(track), Some(3));
    assert_eq!(SliderView::new(50.0, &range).thumb_column(track), Some(8));
    assert_eq!(SliderView::new(100.0, &range).thumb_column(track), Some(13));
    assert_eq!(
        SliderView::new(50.0, &range).thumb_column(Rect::new(0, 0, 0, 1)),
        None
    );
}

#[test]
fn test_render_track_fill_and_thumb() {
    let registry = ListenerRegistry::new();
    let mut slider = Slider::new(SliderConfig::new().default_value(50.0), &registry).unwrap();

    let buf = render(&mut slider, 11);
    assert_eq!(buf.row_text(0), "━━━━━●─────");
}

#[test]
fn test_render_extremes() {
    let registry = ListenerRegistry::new();
    let mut slider = Slider::new(SliderConfig::new(), &registry).unwrap();
    assert_eq!(render(&mut slider, 5).row_text(0), "●────");

    slider.set_value(100.0);
    assert_eq!(render(&mut slider, 5).row_text(0), "━━━━●");
}

#[test]
fn test_render_dragging_thumb() {
    let registry = ListenerRegistry::new();
    let mut slider = Slider::new(SliderConfig::new(), &registry).unwrap();
    render(&mut slider, 5);

    slider.on_pointer_down(2.0);
    assert_eq!(render(&mut slider, 5).row_text(0), "━━◉──");
    slider.on_pointer_up();
    assert_eq!(render(&mut slider, 5).row_text(0), "━━●──");
}

#[test]
fn test_render_disabled_keeps_position_dimmed() {
    let registry = ListenerRegistry::new();
    let mut slider = Slider::new(
        SliderConfig::new().default_value(75.0).disabled(true),
        &registry,
    )
    .unwrap();

    let buf = render(&mut slider, 5);
    assert_eq!(buf.row_text(0), "━━━●─");
    assert!((0..5).all(|x| buf.get(x, 0).unwrap().dim));
}

#[test]
fn test_render_focused_thumb_color() {
    let theme = SliderTheme::default();
    let registry = ListenerRegistry::new();
    let mut slider = Slider::new(SliderConfig::new(), &registry).unwrap();

    let buf = render(&mut slider, 5);
    assert_eq!(buf.get(0, 0).unwrap().fg, theme.thumb);

    slider.focus();
    let buf = render(&mut slider, 5);
    assert_eq!(buf.get(0, 0).unwrap().fg, theme.thumb_focused);
}

#[test]
fn test_render_records_track() {
    let registry = ListenerRegistry::new();
    let mut slider = Slider::new(SliderConfig::new(), &registry).unwrap();
    let mut buf = Buffer::new(30, 5);
    slider.render(&mut buf, Rect::new(4, 2, 21, 3), &SliderTheme::default());

    assert_eq!(slider.track(), TrackBounds::new(4.0, 20.0));
    assert_eq!(slider.hit_area(), Some(Rect::new(4, 2, 21, 1)));
}

#[test]
fn test_render_empty_area_clears_track() {
    let registry = ListenerRegistry::new();
    let mut slider = Slider::new(SliderConfig::new(), &registry).unwrap();
    let mut buf = Buffer::new(10, 1);
    slider.render(&mut buf, Rect::new(0, 0, 0, 1), &SliderTheme::default());

    assert_eq!(slider.hit_area(), None);
    assert!(!slider.track().is_laid_out());
    assert_eq!(buf.row_text(0), " ".repeat(10));
}

#[test]
fn test_dirty_tracking() {
    let registry = ListenerRegistry::new();
    let mut slider = Slider::new(SliderConfig::new(), &registry).unwrap();
    assert!(slider.is_dirty());

    slider.clear_dirty();
    slider.set_value(0.0);
    assert!(!slider.is_dirty());

    slider.set_value(10.0);
    assert!(slider.is_dirty());
}

#[test]
fn test_accessibility() {
    let registry = ListenerRegistry::new();
    let slider = Slider::new(
        SliderConfig::new().range(0.0, 10.0, 0.5).default_value(2.5),
        &registry,
    )
    .unwrap();

    let a11y = slider.accessibility();
    assert_eq!(a11y.role, "slider");
    assert_eq!((a11y.value_min, a11y.value_max, a11y.value_now), (0.0, 10.0, 2.5));
    assert!(a11y.focusable);
    assert!(!a11y.disabled);
}

#[test]
fn test_format_value_uses_step_precision() {
    assert_eq!(format_value(7.0, 1.0), "7");
    assert_eq!(format_value(7.5, 0.5), "7.5");
}
