/// Render phase: state → pixels.
///
/// Reads the `GameState`, never mutates it.  Also holds the pure
/// downsampling step the terminal presenter uses to fold the canvas into
/// half-block character cells.

use crate::assets::{PLAYER, PLAYER_BULLET};
use crate::buffer::{rgb, PixelBuffer};
use crate::entities::{EnemyKind, GameState, GameStatus};
use crate::sprite::draw_sprite;
use crate::text::GlyphAtlas;

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_BACKGROUND: u32 = rgb(0, 0, 0);
pub const C_HUD: u32 = rgb(255, 255, 0);
pub const C_HUD_LIVES: u32 = rgb(255, 64, 64);
pub const C_DIVIDER: u32 = rgb(0, 96, 255);
pub const C_PLAYER: u32 = rgb(255, 255, 255);
pub const C_ENEMY_SMALL: u32 = rgb(255, 0, 255);
pub const C_ENEMY_MEDIUM: u32 = rgb(0, 255, 255);
pub const C_ENEMY_LARGE: u32 = rgb(0, 255, 0);
pub const C_WRECK: u32 = rgb(255, 128, 0);
pub const C_BULLET_PLAYER: u32 = rgb(255, 255, 160);
pub const C_BULLET_ENEMY: u32 = rgb(255, 80, 160);
pub const C_OVERLAY: u32 = rgb(255, 0, 0);

/// Row of the divider between the playfield and the lives display.
pub const DIVIDER_Y: i32 = 16;
const MARGIN: i32 = 4;

fn enemy_color(kind: EnemyKind) -> u32 {
    match kind {
        EnemyKind::Dead => C_WRECK,
        EnemyKind::Small => C_ENEMY_SMALL,
        EnemyKind::Medium => C_ENEMY_MEDIUM,
        EnemyKind::Large => C_ENEMY_LARGE,
    }
}

/// Render one complete frame.
pub fn render(state: &GameState, atlas: &GlyphAtlas<'_>, buffer: &mut PixelBuffer) {
    buffer.clear(C_BACKGROUND);

    draw_hud(state, atlas, buffer);
    buffer.fill_span(DIVIDER_Y, MARGIN, buffer.width() as i32 - MARGIN, C_DIVIDER);

    for (slot, enemy) in state.enemies.iter().enumerate() {
        if let Some(sprite) = state.visible_sprite(slot) {
            draw_sprite(buffer, &sprite, enemy.x, enemy.y, enemy_color(enemy.kind));
        }
    }

    draw_sprite(buffer, &PLAYER, state.player.x, state.player.y, C_PLAYER);

    for b in state.player_bullets.iter() {
        draw_sprite(buffer, &PLAYER_BULLET, b.x, b.y, C_BULLET_PLAYER);
    }
    let enemy_bullet = state.enemy_bullet_sprite();
    for b in state.enemy_bullets.iter() {
        draw_sprite(buffer, &enemy_bullet, b.x, b.y, C_BULLET_ENEMY);
    }

    match state.status {
        GameStatus::Playing => {}
        GameStatus::GameOver => draw_overlay(atlas, buffer, "GAME OVER"),
        GameStatus::Cleared => draw_overlay(atlas, buffer, "WAVE CLEARED"),
    }
}

fn draw_hud(state: &GameState, atlas: &GlyphAtlas<'_>, buffer: &mut PixelBuffer) {
    // Score along the top edge.
    let top = buffer.height() as i32 - atlas.glyph_height() as i32 - 7;
    let x = atlas.draw_text(buffer, "SCORE ", MARGIN, top, C_HUD);
    atlas.draw_number(buffer, state.score, x, top, C_HUD);

    // Lives below the divider: a count, then one ship per reserve life.
    let bottom = 7;
    let mut x = atlas.draw_number(buffer, u64::from(state.player.lives), MARGIN, bottom, C_HUD_LIVES);
    x += 3;
    for _ in 1..state.player.lives {
        draw_sprite(buffer, &PLAYER, x, bottom, C_PLAYER);
        x += PLAYER.width as i32 + 2;
    }
}

fn draw_overlay(atlas: &GlyphAtlas<'_>, buffer: &mut PixelBuffer, title: &str) {
    let cx = buffer.width() as i32 / 2;
    let cy = buffer.height() as i32 / 2;
    let x = cx - atlas.text_width(title) as i32 / 2;
    atlas.draw_text(buffer, title, x, cy, C_OVERLAY);

    let hint = "PRESS R TO RESTART";
    let x = cx - atlas.text_width(hint) as i32 / 2;
    atlas.draw_text(buffer, hint, x, cy - atlas.glyph_height() as i32 - 4, C_HUD);
}

// ── Terminal downsampling ─────────────────────────────────────────────────────

/// Canvas folded into character cells.  Each cell covers `scale` columns and
/// `2 × scale` rows: `top` for the upper half block, `bottom` for the lower.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<(u32, u32)>,
}

impl CellGrid {
    pub fn get(&self, col: usize, row: usize) -> Option<(u32, u32)> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }
}

/// Smallest integer scale at which the canvas fits `cols × rows` cells
/// (capped at `max_scale`).
pub fn fit_scale(width: usize, height: usize, cols: usize, rows: usize, max_scale: usize) -> usize {
    (1..=max_scale.max(1))
        .find(|&s| width.div_ceil(s) <= cols && height.div_ceil(2 * s) <= rows)
        .unwrap_or(max_scale.max(1))
}

/// Sample one `scale × scale` block starting at screen row `top_row`.  Any
/// pixel that differs from `background` wins so thin sprites survive
/// downscaling.
fn sample(rows: &[&[u32]], col: usize, top_row: usize, scale: usize, background: u32) -> u32 {
    let x0 = col * scale;
    rows.iter()
        .skip(top_row)
        .take(scale)
        .filter_map(|row| row.get(x0..(x0 + scale).min(row.len())))
        .flat_map(|span| span.iter())
        .copied()
        .find(|&c| c != background)
        .unwrap_or(background)
}

pub fn downsample(buffer: &PixelBuffer, scale: usize, background: u32) -> CellGrid {
    let scale = scale.max(1);
    let screen: Vec<&[u32]> = buffer.rows_top_down().collect();
    let cols = buffer.width().div_ceil(scale);
    let rows = buffer.height().div_ceil(2 * scale);
    let mut cells = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let top = sample(&screen, col, 2 * row * scale, scale, background);
            let bottom = sample(&screen, col, (2 * row + 1) * scale, scale, background);
            cells.push((top, bottom));
        }
    }
    CellGrid { cols, rows, cells }
}
