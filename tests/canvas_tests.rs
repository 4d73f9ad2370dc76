use higgs_pixel::core::{Canvas, DisplayList, DrawOp};
use higgs_pixel::math::Rgba;
use higgs_pixel::traits::DrawSurface;

// ============================================================================
// Canvas Core Functionality Tests
// ============================================================================

#[test]
fn test_canvas_new() {
    let canvas = Canvas::new(640, 480);
    assert_eq!(canvas.dimensions(), (640, 480));
    assert_eq!(canvas.pixels().len(), 640 * 480 * 4);
    assert_eq!(canvas.transform(), (1.0, 1.0));
}

#[test]
fn test_canvas_default_is_empty() {
    let canvas = Canvas::default();
    assert_eq!(canvas.dimensions(), (0, 0));
    assert!(canvas.pixels().is_empty());
    assert!(canvas.is_blank());
}

#[test]
fn test_canvas_fill_whole_surface() {
    let mut canvas = Canvas::new(100, 100);
    canvas.fill_rect(0.0, 0.0, 100.0, 100.0, Rgba::opaque(255, 128, 64));

    assert_eq!(canvas.pixel(0, 0), Some([255, 128, 64, 255]));
    assert_eq!(canvas.pixel(50, 50), Some([255, 128, 64, 255]));
    assert_eq!(canvas.pixel(99, 99), Some([255, 128, 64, 255]));
}

#[test]
fn test_canvas_css_size_does_not_touch_backing() {
    let mut canvas = Canvas::new(10, 10);
    canvas.set_css_size(5.0, 5.0);
    assert_eq!(canvas.css_size(), (5.0, 5.0));
    assert_eq!(canvas.dimensions(), (10, 10));
}

#[test]
fn test_canvas_hidpi_transform() {
    let mut canvas = Canvas::default();
    canvas.set_backing_size(30, 30);
    canvas.scale(3.0, 3.0);
    canvas.fill_rect(5.0, 5.0, 5.0, 5.0, Rgba::opaque(10, 20, 30));

    assert_eq!(canvas.pixel(14, 14), Some([0, 0, 0, 0]));
    assert_eq!(canvas.pixel(15, 15), Some([10, 20, 30, 255]));
    assert_eq!(canvas.pixel(29, 29), Some([10, 20, 30, 255]));
}

#[test]
fn test_canvas_clear_rect_respects_transform() {
    let mut canvas = Canvas::new(8, 8);
    canvas.fill_rect(0.0, 0.0, 8.0, 8.0, Rgba::opaque(255, 255, 255));
    canvas.scale(2.0, 2.0);
    canvas.clear_rect(0.0, 0.0, 2.0, 2.0);

    assert_eq!(canvas.pixel(3, 3), Some([0, 0, 0, 0]));
    assert_eq!(canvas.pixel(4, 4), Some([255, 255, 255, 255]));
}

#[test]
fn test_canvas_transparent_fill_over_transparent() {
    let mut canvas = Canvas::new(1, 1);
    canvas.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba { r: 200, g: 100, b: 50, a: 0.25 });
    assert_eq!(canvas.pixel(0, 0), Some([200, 100, 50, 64]));
}

#[test]
fn test_canvas_pixel_out_of_bounds() {
    let canvas = Canvas::new(2, 2);
    assert_eq!(canvas.pixel(2, 0), None);
    assert_eq!(canvas.pixel(0, 2), None);
}

// ============================================================================
// Display List Tests
// ============================================================================

#[test]
fn test_display_list_replay_onto_canvas() {
    let mut list = DisplayList::new();
    list.set_backing_size(4, 2);
    list.fill_rect(0.0, 0.0, 2.0, 2.0, Rgba::opaque(1, 1, 1));
    list.fill_rect(2.0, 0.0, 2.0, 2.0, Rgba::opaque(2, 2, 2));

    let mut canvas = Canvas::default();
    list.replay(&mut canvas);

    assert_eq!(canvas.dimensions(), (4, 2));
    assert_eq!(canvas.pixel(1, 1), Some([1, 1, 1, 255]));
    assert_eq!(canvas.pixel(2, 1), Some([2, 2, 2, 255]));
}

#[test]
fn test_display_list_fills_filter() {
    let mut list = DisplayList::new();
    list.clear_rect(0.0, 0.0, 1.0, 1.0);
    list.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba::opaque(3, 3, 3));

    let fills: Vec<_> = list.fills().collect();
    assert_eq!(fills.len(), 1);
    assert!(matches!(fills[0], DrawOp::FillRect { .. }));
}
