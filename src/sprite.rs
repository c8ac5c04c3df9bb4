/// Bitmap stencils, sprite sheets and the two primitives built on them:
/// blitting into a [`PixelBuffer`] and bounding-box overlap.

use crate::buffer::PixelBuffer;

/// A `width × height` opacity mask.  Row 0 of the mask is the *top* row of
/// the artwork; any non-zero byte is opaque.
///
/// A `Sprite` never owns its cells, so several sprites can view one backing
/// array at different offsets (animation frames, glyphs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite<'a> {
    pub width: usize,
    pub height: usize,
    mask: &'a [u8],
}

impl<'a> Sprite<'a> {
    /// Returns `None` when `mask` is shorter than `width * height`.
    pub fn new(width: usize, height: usize, mask: &'a [u8]) -> Option<Self> {
        let len = width.checked_mul(height)?;
        (mask.len() >= len).then(|| Self {
            width,
            height,
            mask: &mask[..len],
        })
    }

    /// Build a view over a mask whose length is exactly `width * height`.
    /// Intended for compile-time bitmaps; panics (at compile time when used
    /// in a `const`) on a length mismatch.
    pub const fn from_parts(width: usize, height: usize, mask: &'a [u8]) -> Self {
        assert!(mask.len() == width * height, "mask length must equal width * height");
        Self { width, height, mask }
    }

    #[inline]
    pub fn is_opaque(&self, xi: usize, yi: usize) -> bool {
        xi < self.width && yi < self.height && self.mask[yi * self.width + xi] != 0
    }

    pub fn mask(&self) -> &'a [u8] {
        self.mask
    }
}

/// Equally sized frames packed back to back in one slice.
#[derive(Clone, Copy, Debug)]
pub struct SpriteSheet<'a> {
    pub frame_width: usize,
    pub frame_height: usize,
    data: &'a [u8],
}

impl<'a> SpriteSheet<'a> {
    pub const fn new(frame_width: usize, frame_height: usize, data: &'a [u8]) -> Self {
        Self {
            frame_width,
            frame_height,
            data,
        }
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.frame_width * self.frame_height
    }

    pub fn len(&self) -> usize {
        match self.stride() {
            0 => 0,
            s => self.data.len() / s,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View of frame `i`, borrowing the sheet's storage.
    pub fn frame(&self, i: usize) -> Option<Sprite<'a>> {
        if i >= self.len() {
            return None;
        }
        let start = i * self.stride();
        Sprite::new(self.frame_width, self.frame_height, &self.data[start..])
    }

    /// A sheet over the frames from `first` onwards, sharing the same storage.
    pub fn offset(&self, first: usize) -> SpriteSheet<'a> {
        let start = (first * self.stride()).min(self.data.len());
        SpriteSheet::new(self.frame_width, self.frame_height, &self.data[start..])
    }
}

/// Stamp `sprite` with a flat colour so that its bottom-left corner lands on
/// `(x, y)`.  Opaque cells falling outside the buffer on any side are clipped.
pub fn draw_sprite(buffer: &mut PixelBuffer, sprite: &Sprite<'_>, x: i32, y: i32, color: u32) {
    let h = sprite.height as i32;
    for yi in 0..sprite.height {
        let dy = y + (h - 1 - yi as i32);
        for xi in 0..sprite.width {
            if sprite.is_opaque(xi, yi) {
                buffer.set(x + xi as i32, dy, color);
            }
        }
    }
}

/// Axis-aligned bounding-box test.  Transparent cells still count.
pub fn overlap(a: &Sprite<'_>, xa: i32, ya: i32, b: &Sprite<'_>, xb: i32, yb: i32) -> bool {
    let (wa, ha) = (a.width as i32, a.height as i32);
    let (wb, hb) = (b.width as i32, b.height as i32);
    xa < xb + wb && xa + wa > xb && ya < yb + hb && ya + ha > yb
}
