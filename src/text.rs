/// Glyph-atlas text and number rendering.

use arrayvec::ArrayVec;

use crate::assets::{DIGIT_GLYPH_OFFSET, GLYPHS};
use crate::buffer::PixelBuffer;
use crate::sprite::{draw_sprite, Sprite, SpriteSheet};

/// Enough digits for `u64::MAX`.
const MAX_DIGITS: usize = 20;

/// Printable-ASCII glyphs starting at `' '`, plus a digit view into the same
/// storage starting at `'0'`.
#[derive(Clone, Copy, Debug)]
pub struct GlyphAtlas<'a> {
    glyphs: SpriteSheet<'a>,
    digits: SpriteSheet<'a>,
}

impl Default for GlyphAtlas<'static> {
    fn default() -> Self {
        Self::new(GLYPHS, DIGIT_GLYPH_OFFSET)
    }
}

impl<'a> GlyphAtlas<'a> {
    pub fn new(glyphs: SpriteSheet<'a>, digit_offset: usize) -> Self {
        Self {
            glyphs,
            digits: glyphs.offset(digit_offset),
        }
    }

    pub fn glyph_width(&self) -> usize {
        self.glyphs.frame_width
    }

    pub fn glyph_height(&self) -> usize {
        self.glyphs.frame_height
    }

    /// Glyph for `ch`, or `None` outside `' '..='`'` (lower case included).
    pub fn glyph(&self, ch: char) -> Option<Sprite<'a>> {
        let index = (ch as u32).checked_sub(' ' as u32)?;
        self.glyphs.frame(index as usize)
    }

    pub fn digit(&self, d: u8) -> Option<Sprite<'a>> {
        self.digits.frame(d as usize)
    }

    fn advance(&self) -> i32 {
        self.glyph_width() as i32 + 1
    }

    /// Draw `text` left to right; characters with no glyph are skipped and
    /// do not move the cursor.  Returns the x just past the last glyph.
    pub fn draw_text(&self, buffer: &mut PixelBuffer, text: &str, x: i32, y: i32, color: u32) -> i32 {
        let mut xp = x;
        for sprite in text.chars().filter_map(|ch| self.glyph(ch)) {
            draw_sprite(buffer, &sprite, xp, y, color);
            xp += self.advance();
        }
        xp
    }

    /// Draw `number` in decimal.  Zero renders as a single `0`.
    pub fn draw_number(&self, buffer: &mut PixelBuffer, number: u64, x: i32, y: i32, color: u32) -> i32 {
        let mut xp = x;
        for d in decimal_digits(number) {
            if let Some(sprite) = self.digit(d) {
                draw_sprite(buffer, &sprite, xp, y, color);
            }
            xp += self.advance();
        }
        xp
    }

    pub fn text_width(&self, text: &str) -> usize {
        let n = text.chars().filter(|&ch| self.glyph(ch).is_some()).count();
        (n * self.advance() as usize).saturating_sub(1)
    }

    pub fn number_width(&self, number: u64) -> usize {
        (decimal_digits(number).len() * self.advance() as usize).saturating_sub(1)
    }
}

/// Decimal digits of `number`, most significant first.
pub fn decimal_digits(number: u64) -> ArrayVec<u8, MAX_DIGITS> {
    let mut digits = ArrayVec::<u8, MAX_DIGITS>::new();
    let mut n = number;
    loop {
        // u64::MAX has 20 digits.
        digits.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}
