use pixel_invaders::assets::WRECK;
use pixel_invaders::compute::{init_state, kill_enemy};
use pixel_invaders::config::{GameConfig, MAX_BULLETS};
use pixel_invaders::entities::*;

fn bullet(n: i32) -> Bullet {
    Bullet { x: n, y: n, dir: 1 }
}

#[test]
fn enemy_kind_discriminants() {
    assert_eq!(EnemyKind::Dead as u8, 0);
    assert_eq!(EnemyKind::Small as u8, 1);
    assert_eq!(EnemyKind::Medium as u8, 2);
    assert_eq!(EnemyKind::Large as u8, 3);
    assert!(EnemyKind::Dead.frames().is_none());
    assert_eq!(EnemyKind::Small.frames().unwrap().frame_width, 8);
    assert_eq!(EnemyKind::Large.frames().unwrap().frame_width, 12);
}

#[test]
fn enemy_kind_for_row() {
    let kinds: Vec<_> = (0..5).map(|row| EnemyKind::for_row(row, 5)).collect();
    assert_eq!(
        kinds,
        [
            EnemyKind::Large,
            EnemyKind::Large,
            EnemyKind::Medium,
            EnemyKind::Medium,
            EnemyKind::Small
        ]
    );
    assert_eq!(EnemyKind::for_row(0, 1), EnemyKind::Small);
    assert_eq!(EnemyKind::for_row(0, 9), EnemyKind::Large);
}

#[test]
fn pool_spawn_until_full() {
    let mut pool = BulletPool::new();
    for i in 0..MAX_BULLETS {
        assert!(pool.spawn(bullet(i as i32)));
    }
    assert!(pool.is_full());
    assert!(!pool.spawn(bullet(-1)));
    assert_eq!(pool.len(), MAX_BULLETS);
}

#[test]
fn pool_swap_remove_moves_last_into_gap() {
    let mut pool = BulletPool::new();
    for i in 0..5 {
        pool.spawn(bullet(i));
    }
    assert_eq!(pool.swap_remove(1), Some(bullet(1)));
    assert_eq!(pool.len(), 4);
    assert_eq!(pool.get(1), Some(&bullet(4)));

    let mut xs: Vec<_> = pool.iter().map(|b| b.x).collect();
    xs.sort();
    assert_eq!(xs, [0, 2, 3, 4]); // no duplicates, only the removed one gone
}

#[test]
fn pool_swap_remove_last_and_out_of_range() {
    let mut pool = BulletPool::new();
    pool.spawn(bullet(7));
    assert_eq!(pool.swap_remove(3), None);
    assert_eq!(pool.swap_remove(0), Some(bullet(7)));
    assert!(pool.is_empty());
    assert_eq!(pool.swap_remove(0), None);
}

#[test]
fn alive_set_tracks_dead_slots() {
    let mut s = init_state(&GameConfig::default()).unwrap();
    for slot in [10, 3, 40] {
        let sprite = s.live_sprite(slot).unwrap();
        kill_enemy(&mut s, slot, &sprite);
    }
    for slot in 0..s.enemies.len() {
        assert_eq!(s.is_alive(slot), s.enemies[slot].kind != EnemyKind::Dead);
    }
    assert!(s.alive.windows(2).all(|w| w[0] < w[1]));
    // Slots persist after death.
    assert_eq!(s.enemies.len(), 55);
}

#[test]
fn visible_sprite_by_slot_state() {
    let mut s = init_state(&GameConfig::default()).unwrap();
    let live = s.visible_sprite(0).unwrap();
    assert_eq!(live.width, 12);
    let sprite = s.live_sprite(0).unwrap();
    kill_enemy(&mut s, 0, &sprite);
    assert_eq!(s.live_sprite(0), None);
    assert_eq!(s.visible_sprite(0), Some(WRECK));
    s.death_timers[0] = 0;
    assert_eq!(s.visible_sprite(0), None);
    assert_eq!(s.visible_sprite(999), None);
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(&GameConfig::default()).unwrap();
    let mut cloned = original.clone();

    cloned.player.x = 99;
    cloned.score = 999;
    cloned.player_bullets.spawn(bullet(1));

    assert_ne!(original.player.x, 99);
    assert_eq!(original.score, 0);
    assert!(original.player_bullets.is_empty());
}
