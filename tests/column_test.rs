//! Column behavior as seen through the public API.

use std::time::Duration;

use glyph_rain::core::{Column, ColumnParams, ColumnState, GlyphSource};

fn column(trail_length: usize) -> Column {
    Column::new(0, ColumnParams::new(Duration::from_millis(50), trail_length))
}

#[test]
fn test_trail_of_five_after_three_and_six_ticks() {
    let mut reference = GlyphSource::new(2024);
    let drawn: Vec<char> = (0..6).map(|_| reference.next_glyph()).collect();

    let mut glyphs = GlyphSource::new(2024);
    let mut col = column(5);

    let mut frame = None;
    for _ in 0..3 {
        frame = col.tick(24, &mut glyphs);
    }
    let frame = frame.unwrap();
    assert_eq!(frame.trail.as_slice(), &[drawn[2], drawn[1], drawn[0]]);

    let mut frame = None;
    for _ in 0..3 {
        frame = col.tick(24, &mut glyphs);
    }
    let frame = frame.unwrap();
    assert_eq!(
        frame.trail.as_slice(),
        &[drawn[5], drawn[4], drawn[3], drawn[2], drawn[1]]
    );
}

#[test]
fn test_fall_ends_after_trail_leaves_the_screen() {
    let mut glyphs = GlyphSource::new(1);
    let mut col = column(10);

    let mut count = 0;
    let mut last_row = 0;
    while let Some(frame) = col.tick(24, &mut glyphs) {
        assert_eq!(frame.row, last_row + 1);
        last_row = frame.row;
        count += 1;
    }
    assert_eq!(count, 24 + 10 - 1);
    assert_eq!(last_row, 33);
    assert_eq!(col.state(), ColumnState::Finished);
}

#[test]
fn test_fall_length_follows_current_height() {
    let mut glyphs = GlyphSource::new(1);
    let mut col = column(5);

    for _ in 0..5 {
        col.tick(24, &mut glyphs).unwrap();
    }
    // Terminal shrank to one row: the head is already at 1 + 5 - 1.
    assert!(col.tick(1, &mut glyphs).is_none());
}
