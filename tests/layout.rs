//! Field placement and hit testing

mod common;

use common::test_model;
use safe_edit::field::FrameLayout;
use safe_edit::view::geometry::{
    calculate_scroll, column_at_x, hit_test, layout_rows, visible_chars, HitTarget, Rect, RowSpec,
};

fn row(height: u32, pad_x: u32, pad_y: u32) -> RowSpec {
    RowSpec {
        height,
        padding: FrameLayout { pad_x, pad_y },
    }
}

#[test]
fn test_demo_layout_is_a_centered_column() {
    let model = test_model();
    let geometry = model.geometry();
    assert_eq!(geometry.len(), 9);

    for (i, g) in geometry.iter().enumerate() {
        assert_eq!(g.frame, Rect::new(100.0, i as f32 * 28.0, 200.0, 28.0));
        assert_eq!(g.button.width, g.button.height);
        assert_eq!(g.entry.width + g.button.width, g.frame.width);
        assert_eq!(g.button.x, g.entry.x + g.entry.width);
    }
    // Nine rows fit in the 400px window
    assert!(geometry[8].frame.bottom() <= 400.0);
}

#[test]
fn test_padding_surrounds_each_row() {
    let geometry = layout_rows(&[row(28, 10, 4), row(28, 10, 4)], 400, 200, 1.0);
    assert_eq!(geometry[0].frame.y, 4.0);
    assert_eq!(geometry[1].frame.y, 4.0 + 28.0 + 8.0);
    assert_eq!(geometry[0].frame.x, 100.0);
}

#[test]
fn test_narrow_window_pins_to_left_edge() {
    let geometry = layout_rows(&[row(28, 0, 0)], 100, 200, 1.0);
    assert_eq!(geometry[0].frame.x, 0.0);
    assert_eq!(geometry[0].frame.width, 200.0);
}

#[test]
fn test_field_never_narrower_than_button() {
    let geometry = layout_rows(&[row(40, 0, 0)], 400, 10, 1.0);
    assert_eq!(geometry[0].frame.width, 40.0);
    assert_eq!(geometry[0].entry.width, 0.0);
}

#[test]
fn test_hit_test() {
    let geometry = layout_rows(&[row(28, 0, 0), row(28, 0, 0)], 400, 200, 1.0);
    assert_eq!(hit_test(&geometry, 110.0, 10.0), Some(HitTarget::Entry(0)));
    assert_eq!(hit_test(&geometry, 290.0, 40.0), Some(HitTarget::Button(1)));
    assert_eq!(hit_test(&geometry, 50.0, 10.0), None);
    assert_eq!(hit_test(&geometry, 110.0, 100.0), None);
    assert_eq!(HitTarget::Button(1).index(), 1);
}

#[test]
fn test_visible_chars_and_scroll() {
    let entry = Rect::new(0.0, 0.0, 92.0, 28.0);
    // 92 - 2 * 6 padding = 80px, 10 characters of 8px
    assert_eq!(visible_chars(&entry, 8.0, 1.0), 10);
    assert_eq!(visible_chars(&entry, 0.0, 1.0), 0);

    assert_eq!(calculate_scroll(5, 0, 10), 0);
    assert_eq!(calculate_scroll(15, 0, 10), 5);
    assert_eq!(calculate_scroll(2, 5, 10), 2);
}

#[test]
fn test_column_at_x_clamps_to_text() {
    let entry = Rect::new(100.0, 0.0, 172.0, 28.0);
    assert_eq!(column_at_x(&entry, 50.0, 8.0, 0, 1.0, 4), 0);
    assert_eq!(column_at_x(&entry, 106.0 + 16.0, 8.0, 0, 1.0, 4), 2);
    assert_eq!(column_at_x(&entry, 106.0 + 16.0, 8.0, 1, 1.0, 4), 3);
    assert_eq!(column_at_x(&entry, 260.0, 8.0, 0, 1.0, 4), 4);
}
