use pixel_invaders::buffer::{rgb, PixelBuffer};
use pixel_invaders::text::{decimal_digits, GlyphAtlas};

const INK: u32 = rgb(200, 200, 200);

fn canvas() -> PixelBuffer {
    PixelBuffer::new(160, 12)
}

fn text(s: &str) -> PixelBuffer {
    let mut buf = canvas();
    GlyphAtlas::default().draw_text(&mut buf, s, 1, 2, INK);
    buf
}

fn number(n: u64) -> PixelBuffer {
    let mut buf = canvas();
    GlyphAtlas::default().draw_number(&mut buf, n, 1, 2, INK);
    buf
}

#[test]
fn zero_renders_one_digit() {
    assert_eq!(decimal_digits(0).as_slice(), &[0]);
    assert_eq!(number(0), text("0"));
    let atlas = GlyphAtlas::default();
    let mut buf = canvas();
    assert_eq!(atlas.draw_number(&mut buf, 0, 1, 2, INK), 1 + 6);
}

#[test]
fn digit_count_matches_magnitude() {
    for (n, len) in [(1u64, 1), (9, 1), (10, 2), (99, 2), (100, 3), (999, 3), (1000, 4), (u64::MAX, 20)] {
        assert_eq!(decimal_digits(n).len(), len, "{}", n);
    }
}

#[test]
fn digits_read_left_to_right() {
    assert_eq!(decimal_digits(1230).as_slice(), &[1, 2, 3, 0]);
    assert_eq!(number(1230), text("1230"));
    assert_ne!(number(12), number(21));
}

#[test]
fn text_advances_glyph_width_plus_one() {
    let atlas = GlyphAtlas::default();
    let mut buf = canvas();
    assert_eq!(atlas.draw_text(&mut buf, "ABC", 4, 0, INK), 4 + 3 * 6);
    assert_eq!(atlas.text_width("ABC"), 17);
    assert_eq!(atlas.number_width(42), 11);
    assert_eq!(atlas.text_width(""), 0);
}

#[test]
fn unknown_characters_are_skipped() {
    assert_eq!(text("A~B"), text("AB"));
    assert_eq!(text("A\u{e9}B"), text("AB"));
    let atlas = GlyphAtlas::default();
    assert!(atlas.glyph('~').is_none());
    assert!(atlas.glyph('`').is_some());
}

#[test]
fn lower_case_has_no_glyph() {
    let atlas = GlyphAtlas::default();
    assert!(atlas.glyph('a').is_none());
    assert!(atlas.glyph('z').is_none());

    let mut buf = canvas();
    assert_eq!(atlas.draw_text(&mut buf, "a", 0, 0, INK), 0);
    assert!(buf.pixels().iter().all(|&c| c == 0));
    assert_eq!(text("SaCbO"), text("SCO"));
    assert_eq!(atlas.text_width("abc"), 0);
}

#[test]
fn space_advances_without_ink() {
    let spaced = text(" ");
    assert!(spaced.pixels().iter().all(|&c| c == 0));
    let atlas = GlyphAtlas::default();
    let mut buf = canvas();
    assert_eq!(atlas.draw_text(&mut buf, "  ", 0, 0, INK), 12);
}

#[test]
fn digit_view_matches_text_glyph() {
    let atlas = GlyphAtlas::default();
    for d in 0..10u8 {
        let ch = char::from(b'0' + d);
        assert_eq!(atlas.digit(d).unwrap().mask(), atlas.glyph(ch).unwrap().mask());
    }
}

#[test]
fn text_is_clipped_at_buffer_edge() {
    let mut buf = PixelBuffer::new(8, 8);
    let atlas = GlyphAtlas::default();
    atlas.draw_text(&mut buf, "WIDE TEXT", 2, 3, INK);
    assert!(buf.pixels().iter().any(|&c| c == INK));
}
