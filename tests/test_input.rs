use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use pixel_invaders::clock::FixedStep;
use pixel_invaders::input::{Command, InputState, KeyTracker};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

// ── KeyTracker ────────────────────────────────────────────────────────────────

#[test]
fn net_direction_from_held_keys() {
    let mut keys = KeyTracker::new(4);
    keys.handle_key(&press(KeyCode::Left));
    assert_eq!(keys.move_dir(), -1);
    keys.handle_key(&press(KeyCode::Char('d')));
    assert_eq!(keys.move_dir(), 0);
    keys.handle_key(&release(KeyCode::Left));
    assert_eq!(keys.move_dir(), 1);
    keys.handle_key(&release(KeyCode::Char('d')));
    assert_eq!(keys.move_dir(), 0);
}

#[test]
fn press_only_keys_expire_after_hold_window() {
    let mut keys = KeyTracker::new(2);
    let mut input = InputState::default();
    keys.handle_key(&press(KeyCode::Char('a')));
    for _ in 0..3 {
        keys.poll(&mut input);
        assert_eq!(input.move_dir, -1);
    }
    keys.poll(&mut input);
    assert_eq!(input.move_dir, 0);
}

#[test]
fn repeat_keeps_key_held() {
    let mut keys = KeyTracker::new(1);
    let mut input = InputState::default();
    keys.handle_key(&press(KeyCode::Right));
    for _ in 0..10 {
        keys.poll(&mut input);
        assert_eq!(input.move_dir, 1);
        keys.handle_key(&KeyEvent::new_with_kind(KeyCode::Right, KeyModifiers::NONE, KeyEventKind::Repeat));
    }
}

#[test]
fn fire_latches_once_per_press() {
    let mut keys = KeyTracker::new(4);
    let mut input = InputState::default();
    assert_eq!(keys.handle_key(&press(KeyCode::Char(' '))), None);
    keys.poll(&mut input);
    assert!(input.fire);

    // The tick consumes the latch; holding the key does not refire.
    input.fire = false;
    keys.poll(&mut input);
    assert!(!input.fire);
}

#[test]
fn unconsumed_fire_survives_poll() {
    let mut keys = KeyTracker::new(4);
    let mut input = InputState { move_dir: 0, fire: true };
    keys.poll(&mut input);
    assert!(input.fire);
}

#[test]
fn session_commands() {
    let mut keys = KeyTracker::new(4);
    assert_eq!(keys.handle_key(&press(KeyCode::Char('q'))), Some(Command::Quit));
    assert_eq!(keys.handle_key(&press(KeyCode::Esc)), Some(Command::Quit));
    assert_eq!(
        keys.handle_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Command::Quit)
    );
    assert_eq!(keys.handle_key(&press(KeyCode::Char('c'))), None);
    assert_eq!(keys.handle_key(&press(KeyCode::Char('R'))), Some(Command::Restart));
    assert_eq!(keys.handle_event(&Event::Resize(80, 24)), Some(Command::Redraw));
    assert_eq!(keys.handle_event(&Event::FocusLost), None);
}

// ── FixedStep ─────────────────────────────────────────────────────────────────

#[test]
fn fixed_step_accumulates_remainder() {
    let mut clock = FixedStep::new(Duration::from_millis(10), 5);
    assert_eq!(clock.advance(Duration::from_millis(25)), 2);
    assert_eq!(clock.until_next(), Duration::from_millis(5));
    assert_eq!(clock.advance(Duration::from_millis(4)), 0);
    assert_eq!(clock.advance(Duration::from_millis(1)), 1);
    assert_eq!(clock.until_next(), Duration::from_millis(10));
}

#[test]
fn fixed_step_is_independent_of_call_rate() {
    let mut fast = FixedStep::new(Duration::from_millis(10), 100);
    let mut slow = FixedStep::new(Duration::from_millis(10), 100);
    let mut fast_ticks = 0;
    for _ in 0..240 {
        fast_ticks += fast.advance(Duration::from_millis(4));
    }
    let mut slow_ticks = 0;
    for _ in 0..32 {
        slow_ticks += slow.advance(Duration::from_millis(30));
    }
    assert_eq!(fast_ticks, 96);
    assert_eq!(slow_ticks, 96);
}

#[test]
fn fixed_step_drops_backlog_past_cap() {
    let mut clock = FixedStep::new(Duration::from_millis(10), 3);
    assert_eq!(clock.advance(Duration::from_secs(1)), 3);
    assert_eq!(clock.until_next(), Duration::from_millis(10));
}

#[test]
fn fixed_step_from_rate() {
    let clock = FixedStep::from_rate(50, 5);
    assert_eq!(clock.step(), Duration::from_millis(20));
    assert_eq!(FixedStep::from_rate(0, 5).step(), Duration::from_secs(1));
}
