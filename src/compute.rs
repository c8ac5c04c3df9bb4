/// Game-logic functions.
///
/// Every function here mutates a `GameState` in place.  Randomness only
/// enters through an injected RNG so callers control determinism (tests use
/// a seeded `StdRng`).

use anyhow::{Context, Result};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::animation::Animation;
use crate::assets::{ENEMY_BULLET_FRAMES, PLAYER, PLAYER_BULLET, WRECK};
use crate::config::GameConfig;
use crate::entities::{Bullet, BulletPool, Enemy, EnemyKind, GameState, GameStatus, Player};
use crate::input::InputState;
use crate::sprite::{overlap, Sprite};

/// Score awarded per enemy destroyed, by its kind before the kill.
pub fn score_for(kind: EnemyKind) -> u64 {
    match kind {
        EnemyKind::Dead => 0,
        kind => 10 * (4 - kind as u64),
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial state for `config`.  Fails only on an invalid config.
pub fn init_state(config: &GameConfig) -> Result<GameState> {
    config.validate()?;

    let kinds = [EnemyKind::Small, EnemyKind::Medium, EnemyKind::Large];
    let mut enemy_animations = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let sheet = kind.frames().context("live enemy kind without frames")?;
        let anim = Animation::from_sheet(&sheet, config.enemy_frame_duration, true)
            .context("enemy animation needs frames and a non-zero duration")?;
        enemy_animations.push(anim);
    }
    let enemy_animations: [Animation<'static>; 3] = enemy_animations
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected one animation per enemy kind"))?;
    let enemy_bullet_animation =
        Animation::from_sheet(&ENEMY_BULLET_FRAMES, config.enemy_bullet_frame_duration, true)
            .context("enemy bullet animation needs frames and a non-zero duration")?;

    let mut state = GameState {
        config: config.clone(),
        player: spawn_player(config),
        enemies: Vec::new(),
        death_timers: Vec::new(),
        alive: Vec::new(),
        player_bullets: BulletPool::new(),
        enemy_bullets: BulletPool::new(),
        enemy_animations,
        enemy_bullet_animation,
        score: 0,
        fire_timer: 0,
        status: GameStatus::Playing,
        frame: 0,
    };
    reset(&mut state);
    Ok(state)
}

fn spawn_player(config: &GameConfig) -> Player {
    Player {
        x: (config.width as i32 - PLAYER.width as i32) / 2,
        y: config.player_y,
        lives: config.lives,
    }
}

/// Lay out the enemy grid, row 0 at the bottom.  Each enemy is offset so its
/// sprite is centred over the cell the wider wreck sprite will occupy.
pub fn lay_out_grid(config: &GameConfig) -> Vec<Enemy> {
    let mut enemies = Vec::with_capacity(config.grid_len());
    for row in 0..config.enemy_rows {
        let kind = EnemyKind::for_row(row, config.enemy_rows);
        let width = kind.frames().map_or(0, |f| f.frame_width) as i32;
        for col in 0..config.enemy_columns {
            enemies.push(Enemy {
                x: config.grid_x + config.column_spacing * col as i32 + (WRECK.width as i32 - width) / 2,
                y: config.grid_y + config.row_spacing * row as i32,
                kind,
            });
        }
    }
    enemies
}

/// Return `state` to the start of a session, keeping its config and
/// reusing its allocations.
pub fn reset(state: &mut GameState) {
    let config = &state.config;
    state.player = spawn_player(config);
    state.enemies = lay_out_grid(config);
    state.death_timers.clear();
    state.death_timers.resize(state.enemies.len(), config.death_frames);
    state.alive.clear();
    state.alive.extend(0..state.enemies.len());
    state.player_bullets.clear();
    state.enemy_bullets.clear();
    for anim in &mut state.enemy_animations {
        anim.reset();
    }
    state.enemy_bullet_animation.reset();
    state.score = 0;
    state.fire_timer = 0;
    state.status = GameStatus::Playing;
    state.frame = 0;
    info!("session start: {} enemies, {} lives", state.enemies.len(), state.player.lives);
}

// ── Per-tick pipeline ────────────────────────────────────────────────────────

/// Advance the simulation by one tick.  Consumes `input.fire`.
pub fn tick(state: &mut GameState, input: &mut InputState, rng: &mut impl Rng) {
    advance_animations(state);
    if state.status != GameStatus::Playing {
        input.fire = false;
        return;
    }

    tick_death_timers(state);
    update_player_bullets(state);
    update_enemy_bullets(state);

    if input.fire {
        player_shoot(state);
    }
    input.fire = false;

    if state.fire_timer >= state.config.enemy_fire_interval {
        state.fire_timer = 0;
        enemy_shoot(state, rng);
    }

    move_player(state, input.move_dir);

    state.fire_timer += 1;
    state.frame += 1;
    update_status(state);
}

pub fn advance_animations(state: &mut GameState) {
    for anim in &mut state.enemy_animations {
        anim.advance();
    }
    state.enemy_bullet_animation.advance();
}

pub fn tick_death_timers(state: &mut GameState) {
    for (enemy, timer) in state.enemies.iter().zip(state.death_timers.iter_mut()) {
        if enemy.kind == EnemyKind::Dead && *timer > 0 {
            *timer -= 1;
        }
    }
}

/// True once a bullet at height `y` has left the playfield.
fn out_of_bounds(y: i32, sprite: &Sprite<'_>, height: usize) -> bool {
    y >= height as i32 || y < sprite.height as i32
}

/// Move player bullets and resolve hits.  A bullet kills at most one enemy.
pub fn update_player_bullets(state: &mut GameState) {
    let height = state.height();
    let mut bi = 0;
    while let Some(bullet) = state.player_bullets.get_mut(bi) {
        bullet.y += bullet.dir;
        let (bx, by) = (bullet.x, bullet.y);

        if out_of_bounds(by, &PLAYER_BULLET, height) {
            state.player_bullets.swap_remove(bi);
            continue;
        }

        let hit = state.alive.iter().copied().find_map(|slot| {
            let enemy = state.enemies[slot];
            let sprite = state.live_sprite(slot)?;
            overlap(&PLAYER_BULLET, bx, by, &sprite, enemy.x, enemy.y).then_some((slot, sprite))
        });

        match hit {
            Some((slot, sprite)) => {
                kill_enemy(state, slot, &sprite);
                state.player_bullets.swap_remove(bi);
            }
            None => bi += 1,
        }
    }
}

/// Mark `slot` dead, credit its score and line the wreck up under the
/// sprite it replaces.
pub fn kill_enemy(state: &mut GameState, slot: usize, sprite: &Sprite<'_>) {
    let enemy = &mut state.enemies[slot];
    let kind = enemy.kind;
    if kind == EnemyKind::Dead {
        return;
    }
    enemy.kind = EnemyKind::Dead;
    enemy.x -= (WRECK.width as i32 - sprite.width as i32) / 2;
    state.score += score_for(kind);
    if let Ok(pos) = state.alive.binary_search(&slot) {
        state.alive.remove(pos);
    }
    debug!("enemy {} ({:?}) destroyed, score {}", slot, kind, state.score);
}

pub fn update_enemy_bullets(state: &mut GameState) {
    let height = state.height();
    let sprite = state.enemy_bullet_sprite();
    let mut bi = 0;
    while let Some(bullet) = state.enemy_bullets.get_mut(bi) {
        bullet.y += bullet.dir;
        let (bx, by) = (bullet.x, bullet.y);

        if out_of_bounds(by, &sprite, height) {
            state.enemy_bullets.swap_remove(bi);
            continue;
        }

        let p = state.player;
        if overlap(&sprite, bx, by, &PLAYER, p.x, p.y) {
            state.enemy_bullets.swap_remove(bi);
            state.player.lives = state.player.lives.saturating_sub(1);
            debug!("player hit, {} lives left", state.player.lives);
            continue;
        }
        bi += 1;
    }
}

/// Fire from the centre of the ship.  Returns false when the pool is full.
pub fn player_shoot(state: &mut GameState) -> bool {
    let p = state.player;
    state.player_bullets.spawn(Bullet {
        x: p.x + PLAYER.width as i32 / 2,
        y: p.y + PLAYER.height as i32,
        dir: state.config.bullet_speed,
    })
}

/// Fire from a uniformly random live enemy.  Does nothing when the pool is
/// full or no enemy is alive.
pub fn enemy_shoot(state: &mut GameState, rng: &mut impl Rng) -> bool {
    if state.enemy_bullets.is_full() {
        return false;
    }
    let Some(&slot) = state.alive.choose(rng) else {
        return false;
    };
    let Some(sprite) = state.live_sprite(slot) else {
        return false;
    };
    let enemy = state.enemies[slot];
    let bullet_sprite = state.enemy_bullet_sprite();
    state.enemy_bullets.spawn(Bullet {
        x: enemy.x + sprite.width as i32 / 2 - bullet_sprite.width as i32 / 2,
        y: enemy.y - bullet_sprite.height as i32,
        dir: -state.config.bullet_speed,
    })
}

/// Shift the player by `speed × dir`, keeping the whole ship on the canvas.
/// `dir` is clamped to -1..=1.
pub fn move_player(state: &mut GameState, dir: i32) {
    let step = state.config.player_speed * dir.clamp(-1, 1);
    let max_x = (state.width() - PLAYER.width) as i32;
    state.player.x = (state.player.x + step).clamp(0, max_x);
}

pub fn update_status(state: &mut GameState) {
    let next = if state.player.lives == 0 {
        GameStatus::GameOver
    } else if state.alive.is_empty() && state.death_timers.iter().all(|&t| t == 0) {
        GameStatus::Cleared
    } else {
        GameStatus::Playing
    };
    if next != state.status {
        info!("status {:?} -> {:?} at frame {} (score {})", state.status, next, state.frame, state.score);
        state.status = next;
    }
}
