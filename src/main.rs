mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pixel_invaders::clock::FixedStep;
use pixel_invaders::config::GameConfig;
use pixel_invaders::entities::GameStatus;
use pixel_invaders::game::Game;
use pixel_invaders::input::{Command, InputState, KeyTracker};

use display::Presenter;

/// Most simulation ticks run back to back after a stall.
const MAX_CATCH_UP: u32 = 5;

/// Longest the loop sleeps before polling input again.
const MAX_IDLE: Duration = Duration::from_millis(16);

/// Fixed-resolution space shooter rendered in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Seed for enemy fire; a random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Simulation ticks per second, independent of the display rate.
    #[arg(
        long,
        value_name = "HZ",
        default_value_t = 60,
        value_parser = clap::value_parser!(u32).range(1..=240)
    )]
    tick_rate: u32,
    /// Lives at the start of each session.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=9))]
    lives: u32,
    /// Write logs here (filtered by RUST_LOG, default `info`).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    // The game owns the terminal, so logs only go to a file.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
    tick_rate: u32,
) -> Result<()> {
    let mut presenter = Presenter::new()?;
    let mut clock = FixedStep::from_rate(tick_rate, MAX_CATCH_UP);
    // Keys count as held for ~1/8 s on terminals without release events.
    let mut keys = KeyTracker::new(u64::from(tick_rate / 8).max(1));
    let mut input = InputState::default();
    let mut last = Instant::now();

    game.render();
    presenter.present(out, game.frame_buffer(), game.status())?;

    loop {
        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match keys.handle_event(&ev) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Restart) if game.status() != GameStatus::Playing => {
                    game.restart();
                    input = InputState::default();
                }
                Some(Command::Redraw) => presenter.invalidate()?,
                _ => {}
            }
        }

        let now = Instant::now();
        let ticks = clock.advance(now - last);
        last = now;

        for _ in 0..ticks {
            keys.poll(&mut input);
            game.tick(&mut input, rng);
        }
        if ticks > 0 {
            game.render();
            presenter.present(out, game.frame_buffer(), game.status())?;
        }

        thread::sleep(clock.until_next().min(MAX_IDLE));
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = GameConfig {
        lives: cli.lives,
        ..GameConfig::default()
    };
    let mut game = Game::new(config)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("seed {} at {} ticks/s", seed, cli.tick_rate);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to press-only.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &mut game, &mut rng, &rx, cli.tick_rate);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exit: score {}", game.state().score);
    result
}
