/// All game entity types and the session state that aggregates them.

use arrayvec::ArrayVec;

use crate::animation::Animation;
use crate::assets::{LARGE_FRAMES, MEDIUM_FRAMES, SMALL_FRAMES, WRECK};
use crate::config::{GameConfig, MAX_BULLETS};
use crate::sprite::{Sprite, SpriteSheet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EnemyKind {
    Dead = 0,
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl EnemyKind {
    /// Kind for grid row `row`, counted from the bottom: the two lowest rows
    /// are large, the top row small, everything in between medium.
    pub fn for_row(row: usize, rows: usize) -> Self {
        match rows.saturating_sub(row) / 2 {
            0 => EnemyKind::Small,
            1 => EnemyKind::Medium,
            _ => EnemyKind::Large,
        }
    }

    pub fn frames(self) -> Option<SpriteSheet<'static>> {
        match self {
            EnemyKind::Dead => None,
            EnemyKind::Small => Some(SMALL_FRAMES),
            EnemyKind::Medium => Some(MEDIUM_FRAMES),
            EnemyKind::Large => Some(LARGE_FRAMES),
        }
    }

    /// Index into the per-kind animation table.
    fn animation_slot(self) -> Option<usize> {
        match self {
            EnemyKind::Dead => None,
            kind => Some(kind as usize - 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
    /// Every enemy destroyed and every wreck faded.
    Cleared,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub lives: u32,
}

/// One slot of the enemy grid.  Positions are the bottom-left corner of the
/// sprite in buffer space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub kind: EnemyKind,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    /// Vertical step per tick; positive moves up.
    pub dir: i32,
}

/// Unordered, fixed-capacity bullet storage.
#[derive(Clone, Debug, Default)]
pub struct BulletPool {
    bullets: ArrayVec<Bullet, MAX_BULLETS>,
}

impl BulletPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.bullets.is_full()
    }

    /// Adds `bullet` unless the pool is full.  Returns whether it was added.
    pub fn spawn(&mut self, bullet: Bullet) -> bool {
        self.bullets.try_push(bullet).is_ok()
    }

    /// O(1) removal: the last bullet takes the freed slot.
    pub fn swap_remove(&mut self, index: usize) -> Option<Bullet> {
        (index < self.bullets.len()).then(|| self.bullets.swap_remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Bullet> {
        self.bullets.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Bullet> {
        self.bullets.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter()
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything one session mutates.
///
/// The enemy grid is allocated once and never shrinks: a destroyed enemy
/// keeps its slot with `kind == Dead`, and its index leaves `alive`.  Slots
/// are not recycled.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Ticks left to show each slot's wreck; parallel to `enemies`.
    pub death_timers: Vec<u8>,
    /// Indices of live enemies in ascending slot order.
    pub alive: Vec<usize>,
    pub player_bullets: BulletPool,
    pub enemy_bullets: BulletPool,
    /// One clock per live enemy kind (small, medium, large), shared by every
    /// enemy of that kind.
    pub enemy_animations: [Animation<'static>; 3],
    pub enemy_bullet_animation: Animation<'static>,
    pub score: u64,
    /// Ticks since the last enemy shot.
    pub fire_timer: u32,
    pub status: GameStatus,
    pub frame: u64,
}

impl GameState {
    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn enemy_animation(&self, kind: EnemyKind) -> Option<&Animation<'static>> {
        kind.animation_slot().map(|i| &self.enemy_animations[i])
    }

    /// Current animation frame of a live enemy; `None` for a dead slot.
    pub fn live_sprite(&self, slot: usize) -> Option<Sprite<'static>> {
        let enemy = self.enemies.get(slot)?;
        self.enemy_animation(enemy.kind).map(Animation::current)
    }

    /// What to draw for `slot` this frame: the animated sprite, the wreck
    /// while the death timer runs, or nothing.
    pub fn visible_sprite(&self, slot: usize) -> Option<Sprite<'static>> {
        match self.enemies.get(slot)?.kind {
            EnemyKind::Dead if self.death_timers[slot] > 0 => Some(WRECK),
            EnemyKind::Dead => None,
            _ => self.live_sprite(slot),
        }
    }

    pub fn enemy_bullet_sprite(&self) -> Sprite<'static> {
        self.enemy_bullet_animation.current()
    }

    pub fn is_alive(&self, slot: usize) -> bool {
        self.alive.binary_search(&slot).is_ok()
    }
}
