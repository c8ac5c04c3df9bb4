use pixel_invaders::assets::{GLYPHS, PLAYER, SMALL_FRAMES};
use pixel_invaders::buffer::{rgb, PixelBuffer};
use pixel_invaders::sprite::{draw_sprite, overlap, Sprite, SpriteSheet};

const RED: u32 = rgb(255, 0, 0);

// Top-left and bottom-right cells opaque.
const DIAGONAL: [u8; 4] = [1, 0, 0, 1];

fn diagonal() -> Sprite<'static> {
    Sprite::new(2, 2, &DIAGONAL).unwrap()
}

fn lit(buffer: &PixelBuffer) -> usize {
    buffer.pixels().iter().filter(|&&c| c == RED).count()
}

#[test]
fn sprite_new_checks_length() {
    assert!(Sprite::new(3, 3, &DIAGONAL).is_none());
    let s = Sprite::new(2, 1, &DIAGONAL).unwrap();
    assert_eq!(s.mask().len(), 2);
}

#[test]
fn blit_grows_upward_from_origin() {
    let mut buf = PixelBuffer::new(4, 4);
    draw_sprite(&mut buf, &diagonal(), 1, 1, RED);
    // Mask row 0 (top) lands on the higher buffer row.
    assert_eq!(buf.get(1, 2), Some(RED));
    assert_eq!(buf.get(2, 1), Some(RED));
    assert_eq!(buf.get(1, 1), Some(0));
    assert_eq!(buf.get(2, 2), Some(0));
    assert_eq!(lit(&buf), 2);
}

#[test]
fn blit_clips_below_and_left() {
    let mut buf = PixelBuffer::new(4, 4);
    draw_sprite(&mut buf, &diagonal(), -1, -1, RED);
    assert_eq!(lit(&buf), 0);

    draw_sprite(&mut buf, &PLAYER, -5, -3, RED);
    assert!(lit(&buf) > 0);
    assert_eq!(buf.pixels().len(), 16);
}

#[test]
fn blit_clips_above_and_right() {
    let mut buf = PixelBuffer::new(4, 4);
    draw_sprite(&mut buf, &diagonal(), 3, 3, RED);
    assert_eq!(lit(&buf), 0);

    draw_sprite(&mut buf, &diagonal(), 2, 2, RED);
    assert_eq!(buf.get(2, 3), Some(RED));
    assert_eq!(buf.get(3, 2), Some(RED));
}

#[test]
fn blit_transparent_cells_keep_background() {
    let mut buf = PixelBuffer::new(16, 16);
    let bg = rgb(1, 2, 3);
    buf.clear(bg);
    draw_sprite(&mut buf, &PLAYER, 0, 0, RED);
    let opaque = PLAYER.mask().iter().filter(|&&b| b != 0).count();
    assert_eq!(lit(&buf), opaque);
    // Tip of the ship: top row, column 5.
    assert_eq!(buf.get(5, 6), Some(RED));
    assert_eq!(buf.get(0, 6), Some(bg));
}

#[test]
fn overlap_edges() {
    let a = diagonal();
    assert!(overlap(&a, 0, 0, &a, 1, 1));
    // Touching edges do not overlap.
    assert!(!overlap(&a, 0, 0, &a, 2, 0));
    assert!(!overlap(&a, 0, 0, &a, 0, 2));
    // Bounding boxes only: transparent corners still collide.
    assert!(overlap(&a, 0, 0, &a, -1, 1));
}

#[test]
fn overlap_is_symmetric() {
    let a = PLAYER;
    let b = SMALL_FRAMES.frame(0).unwrap();
    for xb in -15..15 {
        for yb in -12..12 {
            assert_eq!(overlap(&a, 0, 0, &b, xb, yb), overlap(&b, xb, yb, &a, 0, 0), "({}, {})", xb, yb);
        }
    }
}

#[test]
fn sheet_frames_share_storage() {
    let sheet = SMALL_FRAMES;
    assert_eq!(sheet.len(), 2);
    let f0 = sheet.frame(0).unwrap();
    let f1 = sheet.frame(1).unwrap();
    assert_eq!(f1.mask().as_ptr() as usize - f0.mask().as_ptr() as usize, 8 * 8);
    assert!(sheet.frame(2).is_none());
}

#[test]
fn sheet_offset_views() {
    let digits = GLYPHS.offset(16);
    assert_eq!(digits.len(), GLYPHS.len() - 16);
    assert_eq!(digits.frame(0).unwrap().mask(), GLYPHS.frame(16).unwrap().mask());
    assert!(GLYPHS.offset(1000).is_empty());

    let empty = SpriteSheet::new(0, 0, &DIAGONAL);
    assert_eq!(empty.len(), 0);
}
