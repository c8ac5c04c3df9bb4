/// Software framebuffer.
///
/// Pixels are packed `0xRRGGBBAA` values stored row-major.  Row 0 is the
/// *bottom* of the logical canvas, so higher `y` means higher on screen.
/// Presenters that scan top-down use [`PixelBuffer::rows_top_down`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Write one pixel; coordinates outside the canvas are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn row(&self, y: usize) -> Option<&[u32]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.pixels[start..start + self.width])
    }

    /// Copy a scanline into row `y`.  Extra source values past `width` are
    /// dropped; a row outside the canvas is ignored.
    pub fn write_row(&mut self, y: usize, src: &[u32]) {
        if y >= self.height {
            return;
        }
        let n = src.len().min(self.width);
        let start = y * self.width;
        self.pixels[start..start + n].copy_from_slice(&src[..n]);
    }

    /// Fill `[x0, x1)` of row `y`, clipped to the canvas.
    pub fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: u32) {
        if y < 0 || y as usize >= self.height {
            return;
        }
        let x0 = x0.clamp(0, self.width as i32) as usize;
        let x1 = x1.clamp(0, self.width as i32) as usize;
        if x0 >= x1 {
            return;
        }
        let start = y as usize * self.width;
        self.pixels[start + x0..start + x1].fill(color);
    }

    /// Rows in screen order (top of the canvas first).
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[u32]> {
        self.pixels.chunks_exact(self.width.max(1)).rev()
    }
}

/// Pack an opaque colour.
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 255
}

/// Split a packed colour back into its `(r, g, b)` channels.
pub const fn channels(color: u32) -> (u8, u8, u8) {
    ((color >> 24) as u8, (color >> 16) as u8, (color >> 8) as u8)
}
