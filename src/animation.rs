/// Tick-driven frame selection for sprite animations.

use crate::sprite::{Sprite, SpriteSheet};

#[derive(Clone, Debug)]
pub struct Animation<'a> {
    pub looping: bool,
    /// Ticks each frame stays on screen; never zero.
    frame_duration: usize,
    elapsed: usize,
    frames: Vec<Sprite<'a>>,
}

impl<'a> Animation<'a> {
    /// Returns `None` for an empty frame list or a zero frame duration.
    pub fn new(frames: Vec<Sprite<'a>>, frame_duration: usize, looping: bool) -> Option<Self> {
        if frames.is_empty() || frame_duration == 0 {
            return None;
        }
        Some(Self {
            looping,
            frame_duration,
            elapsed: 0,
            frames,
        })
    }

    /// Every frame of `sheet`, in order.
    pub fn from_sheet(sheet: &SpriteSheet<'a>, frame_duration: usize, looping: bool) -> Option<Self> {
        let frames = (0..sheet.len()).filter_map(|i| sheet.frame(i)).collect();
        Self::new(frames, frame_duration, looping)
    }

    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_duration(&self) -> usize {
        self.frame_duration
    }

    pub fn elapsed(&self) -> usize {
        self.elapsed
    }

    fn total(&self) -> usize {
        self.frames.len() * self.frame_duration
    }

    /// Advance one tick.  A looping animation wraps to the first frame on the
    /// same tick it would run past the last one; a one-shot animation holds
    /// its final frame.
    pub fn advance(&mut self) {
        if self.elapsed >= self.total() {
            return;
        }
        self.elapsed += 1;
        if self.elapsed == self.total() && self.looping {
            self.elapsed = 0;
        }
    }

    pub fn frame_index(&self) -> usize {
        (self.elapsed / self.frame_duration).min(self.frames.len() - 1)
    }

    pub fn current(&self) -> Sprite<'a> {
        self.frames[self.frame_index()]
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}
