/// Built-in bitmaps.
///
/// Everything here is evaluated at compile time.  Artwork is written as rows
/// of `.`/`@` so the source reads like the picture; the font is stored as
/// 5-bit row masks and unpacked into a 5×7 glyph sheet.

use crate::sprite::{Sprite, SpriteSheet};

/// Unpack `.`/`@` rows into a flat opacity mask.
const fn art<const N: usize>(rows: &[&str]) -> [u8; N] {
    let mut out = [0u8; N];
    let mut i = 0;
    let mut r = 0;
    while r < rows.len() {
        let bytes = rows[r].as_bytes();
        let mut c = 0;
        while c < bytes.len() {
            assert!(i < N, "artwork larger than mask");
            if bytes[c] == b'@' {
                out[i] = 1;
            }
            i += 1;
            c += 1;
        }
        r += 1;
    }
    assert!(i == N, "artwork smaller than mask");
    out
}

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;
pub const GLYPH_COUNT: usize = 65;
/// Index of `'0'` inside the glyph sheet.
pub const DIGIT_GLYPH_OFFSET: usize = (b'0' - b' ') as usize;

const GLYPH_LEN: usize = GLYPH_WIDTH * GLYPH_HEIGHT;

const fn unpack_glyphs(rows: &[[u8; GLYPH_HEIGHT]; GLYPH_COUNT]) -> [u8; GLYPH_COUNT * GLYPH_LEN] {
    let mut out = [0u8; GLYPH_COUNT * GLYPH_LEN];
    let mut g = 0;
    while g < GLYPH_COUNT {
        let mut r = 0;
        while r < GLYPH_HEIGHT {
            let mut c = 0;
            while c < GLYPH_WIDTH {
                out[g * GLYPH_LEN + r * GLYPH_WIDTH + c] = (rows[g][r] >> (GLYPH_WIDTH - 1 - c)) & 1;
                c += 1;
            }
            r += 1;
        }
        g += 1;
    }
    out
}

// ASCII 32 (' ') through 96 ('`'), top row first, bit 4 is the left column.
#[rustfmt::skip]
const GLYPH_ROWS: [[u8; GLYPH_HEIGHT]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x04, 0x04, 0x04, 0x04, 0x00, 0x00, 0x04], // !
    [0x0A, 0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00], // "
    [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A], // #
    [0x04, 0x0F, 0x14, 0x0E, 0x05, 0x1E, 0x04], // $
    [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03], // %
    [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D], // &
    [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00], // '
    [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02], // (
    [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08], // )
    [0x00, 0x04, 0x15, 0x0E, 0x15, 0x04, 0x00], // *
    [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08], // ,
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C], // .
    [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00], // /
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00], // :
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x04, 0x08], // ;
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02], // <
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00], // =
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08], // >
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], // ?
    [0x0E, 0x11, 0x01, 0x0D, 0x15, 0x15, 0x0E], // @
    [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
    [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E], // [
    [0x00, 0x10, 0x08, 0x04, 0x02, 0x01, 0x00], // \
    [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E], // ]
    [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F], // _
    [0x08, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00], // `
];

const GLYPH_MASK: [u8; GLYPH_COUNT * GLYPH_LEN] = unpack_glyphs(&GLYPH_ROWS);

pub const GLYPHS: SpriteSheet<'static> = SpriteSheet::new(GLYPH_WIDTH, GLYPH_HEIGHT, &GLYPH_MASK);

// ── Enemies (two animation frames per sheet) ─────────────────────────────────

const SMALL_MASK: [u8; 2 * 8 * 8] = art(&[
    "...@@...",
    "..@@@@..",
    ".@@@@@@.",
    "@@.@@.@@",
    "@@@@@@@@",
    ".@.@@.@.",
    "@......@",
    ".@....@.",
    // frame 1
    "...@@...",
    "..@@@@..",
    ".@@@@@@.",
    "@@.@@.@@",
    "@@@@@@@@",
    "..@..@..",
    ".@.@@.@.",
    "@.@..@.@",
]);

const MEDIUM_MASK: [u8; 2 * 11 * 8] = art(&[
    "..@.....@..",
    "...@...@...",
    "..@@@@@@@..",
    ".@@.@@@.@@.",
    "@@@@@@@@@@@",
    "@.@@@@@@@.@",
    "@.@.....@.@",
    "...@@.@@...",
    // frame 1
    "..@.....@..",
    "@..@...@..@",
    "@.@@@@@@@.@",
    "@@@.@@@.@@@",
    "@@@@@@@@@@@",
    ".@@@@@@@@@.",
    "..@.....@..",
    ".@.......@.",
]);

const LARGE_MASK: [u8; 2 * 12 * 8] = art(&[
    "....@@@@....",
    ".@@@@@@@@@@.",
    "@@@@@@@@@@@@",
    "@@@..@@..@@@",
    "@@@@@@@@@@@@",
    "...@@..@@...",
    "..@@.@@.@@..",
    "@@........@@",
    // frame 1
    "....@@@@....",
    ".@@@@@@@@@@.",
    "@@@@@@@@@@@@",
    "@@@..@@..@@@",
    "@@@@@@@@@@@@",
    "..@@@..@@@..",
    ".@@..@@..@@.",
    "..@@....@@..",
]);

pub const SMALL_FRAMES: SpriteSheet<'static> = SpriteSheet::new(8, 8, &SMALL_MASK);
pub const MEDIUM_FRAMES: SpriteSheet<'static> = SpriteSheet::new(11, 8, &MEDIUM_MASK);
pub const LARGE_FRAMES: SpriteSheet<'static> = SpriteSheet::new(12, 8, &LARGE_MASK);

const WRECK_MASK: [u8; 13 * 7] = art(&[
    ".@..@...@..@.",
    "..@..@.@..@..",
    "...@.....@...",
    "@@.........@@",
    "...@.....@...",
    "..@..@.@..@..",
    ".@..@...@..@.",
]);

/// Drawn in place of an enemy while its death timer runs.
pub const WRECK: Sprite<'static> = Sprite::from_parts(13, 7, &WRECK_MASK);

// ── Player and projectiles ───────────────────────────────────────────────────

const PLAYER_MASK: [u8; 11 * 7] = art(&[
    ".....@.....",
    "....@@@....",
    "....@@@....",
    ".@@@@@@@@@.",
    "@@@@@@@@@@@",
    "@@@@@@@@@@@",
    "@@@@@@@@@@@",
]);

pub const PLAYER: Sprite<'static> = Sprite::from_parts(11, 7, &PLAYER_MASK);

const PLAYER_BULLET_MASK: [u8; 3] = [1, 1, 1];

pub const PLAYER_BULLET: Sprite<'static> = Sprite::from_parts(1, 3, &PLAYER_BULLET_MASK);

const ENEMY_BULLET_MASK: [u8; 2 * 3 * 7] = art(&[
    ".@.",
    "@..",
    ".@.",
    "..@",
    ".@.",
    "@..",
    ".@.",
    // frame 1
    "@..",
    ".@.",
    "..@",
    ".@.",
    "@..",
    ".@.",
    "..@",
]);

pub const ENEMY_BULLET_FRAMES: SpriteSheet<'static> = SpriteSheet::new(3, 7, &ENEMY_BULLET_MASK);
