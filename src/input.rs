/// Keyboard state → per-tick input.
///
/// The simulation only ever sees an [`InputState`].  [`KeyTracker`] folds raw
/// crossterm key events into one, on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper
///   `Press` / `Repeat` / `Release` events, so keys drop on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows up as
///   repeated presses).  A key counts as held for `hold_window` ticks after
///   its last press, which is longer than the OS repeat interval.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the simulation reads each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    /// Net horizontal direction: -1 left, 0 still, 1 right.
    pub move_dir: i32,
    /// Fire latch; set by a key press, cleared by the tick that consumes it.
    pub fire: bool,
}

/// Session-level requests that bypass the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    /// The terminal changed size; the presenter must redraw everything.
    Redraw,
}

#[derive(Clone, Debug)]
pub struct KeyTracker {
    /// Each held key → the tick it was last seen (press or repeat).
    key_tick: HashMap<KeyCode, u64>,
    tick: u64,
    hold_window: u64,
    fire_latched: bool,
}

fn is_left(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A'))
}

fn is_right(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D'))
}

impl KeyTracker {
    pub fn new(hold_window: u64) -> Self {
        Self {
            key_tick: HashMap::new(),
            tick: 0,
            hold_window,
            fire_latched: false,
        }
    }

    fn held(&self, pred: fn(&KeyCode) -> bool) -> bool {
        self.key_tick
            .iter()
            .any(|(code, &last)| pred(code) && self.tick.saturating_sub(last) <= self.hold_window)
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Command> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(..) => Some(Command::Redraw),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<Command> {
        match key.kind {
            KeyEventKind::Press => {
                self.key_tick.insert(key.code, self.tick);
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(Command::Quit)
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                        self.fire_latched = true;
                        None
                    }
                    _ => None,
                }
            }
            KeyEventKind::Repeat => {
                self.key_tick.insert(key.code, self.tick);
                None
            }
            KeyEventKind::Release => {
                self.key_tick.remove(&key.code);
                None
            }
        }
    }

    /// Net direction from the keys currently held.
    pub fn move_dir(&self) -> i32 {
        let left = self.held(is_left) as i32;
        let right = self.held(is_right) as i32;
        right - left
    }

    /// Write this tick's input into `input` and advance the hold clock.
    /// A pending fire press is OR-ed into the latch, never cleared here.
    pub fn poll(&mut self, input: &mut InputState) {
        input.move_dir = self.move_dir();
        if std::mem::take(&mut self.fire_latched) {
            input.fire = true;
        }
        self.tick += 1;
        let (tick, window) = (self.tick, self.hold_window);
        self.key_tick.retain(|_, last| tick.saturating_sub(*last) <= window);
    }
}
