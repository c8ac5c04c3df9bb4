/// The session handle platform glue talks to: tick, render, read pixels.

use anyhow::Result;
use rand::Rng;

use crate::buffer::PixelBuffer;
use crate::compute;
use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus};
use crate::input::InputState;
use crate::render;
use crate::text::GlyphAtlas;

pub struct Game {
    state: GameState,
    atlas: GlyphAtlas<'static>,
    frame: PixelBuffer,
}

impl Game {
    /// Validate `config`, lay out the grid and allocate the framebuffer.
    pub fn new(config: GameConfig) -> Result<Self> {
        let state = compute::init_state(&config)?;
        let frame = PixelBuffer::new(config.width, config.height);
        Ok(Self {
            state,
            atlas: GlyphAtlas::default(),
            frame,
        })
    }

    pub fn tick(&mut self, input: &mut InputState, rng: &mut impl Rng) {
        compute::tick(&mut self.state, input, rng);
    }

    pub fn render(&mut self) {
        render::render(&self.state, &self.atlas, &mut self.frame);
    }

    pub fn frame_buffer(&self) -> &PixelBuffer {
        &self.frame
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Start a fresh session with the same config.
    pub fn restart(&mut self) {
        compute::reset(&mut self.state);
    }
}
