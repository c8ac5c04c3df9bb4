/// Tunable constants for one game session.

use anyhow::{ensure, Result};

use crate::assets::{LARGE_FRAMES, PLAYER, WRECK};

/// Hard cap on simultaneous bullets per owner.
pub const MAX_BULLETS: usize = 128;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub enemy_rows: usize,
    pub enemy_columns: usize,
    /// Left edge of the enemy grid's first column.
    pub grid_x: i32,
    /// Baseline of the bottom enemy row.
    pub grid_y: i32,
    pub column_spacing: i32,
    pub row_spacing: i32,
    pub player_y: i32,
    pub lives: u32,
    /// Horizontal pixels per tick while a direction is held.
    pub player_speed: i32,
    /// Vertical pixels per tick for both bullet kinds.
    pub bullet_speed: i32,
    /// Ticks between enemy shots.
    pub enemy_fire_interval: u32,
    /// Ticks a wreck stays visible after a kill.
    pub death_frames: u8,
    pub enemy_frame_duration: usize,
    pub enemy_bullet_frame_duration: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 224,
            height: 256,
            enemy_rows: 5,
            enemy_columns: 11,
            grid_x: 20,
            grid_y: 128,
            column_spacing: 16,
            row_spacing: 17,
            player_y: 32,
            lives: 3,
            player_speed: 2,
            bullet_speed: 2,
            enemy_fire_interval: 30,
            death_frames: 10,
            enemy_frame_duration: 10,
            enemy_bullet_frame_duration: 5,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.width > 0 && self.height > 0, "canvas must not be empty");
        ensure!(
            self.width >= PLAYER.width && self.height as i32 > self.player_y + PLAYER.height as i32,
            "canvas {}x{} cannot hold the player at y={}",
            self.width,
            self.height,
            self.player_y
        );
        ensure!(
            self.enemy_rows > 0 && self.enemy_columns > 0,
            "enemy grid must have at least one slot"
        );
        let widest = WRECK.width.max(LARGE_FRAMES.frame_width) as i32;
        let right = self.grid_x + self.column_spacing * (self.enemy_columns as i32 - 1) + widest;
        let top = self.grid_y + self.row_spacing * (self.enemy_rows as i32 - 1) + LARGE_FRAMES.frame_height as i32;
        ensure!(
            self.grid_x >= 0 && right <= self.width as i32 && top <= self.height as i32,
            "enemy grid does not fit a {}x{} canvas",
            self.width,
            self.height
        );
        ensure!(self.lives > 0, "lives must be at least 1");
        ensure!(self.bullet_speed > 0, "bullet speed must be positive");
        ensure!(self.enemy_fire_interval > 0, "enemy fire interval must be positive");
        ensure!(
            self.enemy_frame_duration > 0 && self.enemy_bullet_frame_duration > 0,
            "animation frame durations must be positive"
        );
        Ok(())
    }

    pub fn grid_len(&self) -> usize {
        self.enemy_rows * self.enemy_columns
    }
}
