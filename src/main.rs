mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::filter::EnvFilter;

use chicken_shooter::compute::{new_game, player_shoot, tick};
use chicken_shooter::entities::{Direction, GameState, GameStatus, SoundCue};
use chicken_shooter::platform::{Host, StaticSprites};
use chicken_shooter::Tunables;

/// World size in pixels: an 800×600 window minus its frame.
const PLAYFIELD: (f32, f32) = (784.0, 564.0);

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "chicken_shooter")]
#[command(about = "Shoot the chickens, dodge their eggs, survive the boss")]
struct Args {
    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Frames per second
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Per-tick chance that each enemy fires
    #[arg(long)]
    fire_chance: Option<f64>,

    /// Run without a terminal UI, driven by a simple autopilot
    #[arg(long)]
    headless: bool,

    /// Frame limit for --headless runs
    #[arg(long, default_value_t = 3_000)]
    frames: u64,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn tunables(&self) -> Tunables {
        let mut tunables = Tunables::default();
        if let Some(chance) = self.fire_chance {
            tunables.enemy_fire_chance = chance;
        }
        tunables
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn init_logging(log_file: Option<&Path>, headless: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // Raw-mode terminal output must not be interleaved with log lines.
        None if headless => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

// ── Hosts ─────────────────────────────────────────────────────────────────────

/// Terminal host: input comes from the held-key map, the only audible cue
/// is the terminal bell on an explosion.
#[derive(Default)]
struct TerminalHost {
    held: Direction,
    bell: bool,
}

impl Host for TerminalHost {
    fn playfield_size(&self) -> (f32, f32) {
        PLAYFIELD
    }

    fn play_sound(&mut self, cue: SoundCue) {
        tracing::trace!(?cue, "sound cue");
        if cue == SoundCue::Explosion {
            self.bell = true;
        }
    }

    fn direction_flags(&mut self) -> Direction {
        self.held
    }
}

/// Headless host: sweeps the player left and right along the bottom.
#[derive(Default)]
struct AutopilotHost {
    frame: u64,
    cues: usize,
}

impl Host for AutopilotHost {
    fn playfield_size(&self) -> (f32, f32) {
        PLAYFIELD
    }

    fn play_sound(&mut self, _cue: SoundCue) {
        self.cues += 1;
    }

    fn direction_flags(&mut self) -> Direction {
        self.frame += 1;
        if (self.frame / 90) % 2 == 0 {
            Direction::RIGHT
        } else {
            Direction::LEFT
        }
    }
}

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// Min frames between shots while Space is held.
const SHOOT_COOLDOWN: u32 = 6;

/// Autopilot fires every this many frames.
const AUTOPILOT_SHOOT_EVERY: u64 = 8;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

fn held_directions(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> Direction {
    let bindings = [
        (Direction::FORWARD, [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')]),
        (Direction::BACKWARD, [KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')]),
        (Direction::LEFT, [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
        (Direction::RIGHT, [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
    ];
    let mut directions = Direction::NONE;
    for (direction, keys) in bindings {
        if any_held(key_frame, &keys, frame) {
            directions |= direction;
        }
    }
    directions
}

// ── High-score persistence ────────────────────────────────────────────────────

fn high_score_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".chicken_shooter_score")
}

fn load_high_score() -> u32 {
    std::fs::read_to_string(high_score_path())
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn save_high_score(score: u32) {
    if let Err(e) = std::fs::write(high_score_path(), score.to_string()) {
        tracing::warn!("could not save high score: {e}");
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    high_score: u32,
) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  CHICKEN  SHOOTER  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    if high_score > 0 {
        let hs_str = format!("Best Score: {}", high_score);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(hs_str.chars().count() as u16 / 2),
            cy.saturating_sub(5),
        ))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(&hs_str))?;
    }

    let legend: &[(&str, Color, &str)] = &[
        ("<ö>  ", Color::Yellow, " Chicken — 100 pts"),
        ("{▓▓▓}", Color::Red, " Boss    — 500 pts, arrives at level 5"),
        ("✚    ", Color::Green, " Health  — +1 life (max 3)"),
    ];
    for (i, (sym, color, desc)) in legend.iter().enumerate() {
        let row = cy.saturating_sub(2) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(18), row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*sym))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(*desc))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(18), cy + 2))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("[ENTER] Start   [Q] Quit"))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(18), cy + 4))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print(display::CONTROLS_HINT))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        if let Ok(Event::Key(KeyEvent { code, kind, .. })) = rx.recv() {
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        } else {
            return Ok(MenuResult::Quit);
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to menu.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame we check which keys are still "fresh"
/// (within `HOLD_WINDOW` frames) and turn them into direction flags for the
/// simulation, so Space and the arrows can be held together.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    args: &Args,
    high_score: u32,
) -> std::io::Result<bool> {
    let frame_time = Duration::from_secs(1) / args.fps;
    let mut rng = args.rng();
    let mut host = TerminalHost::default();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut shoot_cooldown: u32 = 0;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        })) = rx.try_recv()
        {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(true);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(true);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if state.status == GameStatus::GameOver =>
                        {
                            return Ok(false);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        if state.status == GameStatus::Playing {
            host.held = held_directions(&key_frame, frame);

            // Shooting, throttled so holding Space gives a steady stream
            if shoot_cooldown == 0 && is_held(&key_frame, &KeyCode::Char(' '), frame) {
                player_shoot(state);
                shoot_cooldown = SHOOT_COOLDOWN;
            }
            shoot_cooldown = shoot_cooldown.saturating_sub(1);

            tick(state, &mut host, &mut rng);
        }

        display::render_frame(out, state, PLAYFIELD, high_score)?;
        if std::mem::take(&mut host.bell) {
            out.queue(Print('\u{7}'))?;
            out.flush()?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Headless run ──────────────────────────────────────────────────────────────

fn run_headless(args: &Args) -> Result<()> {
    let mut host = AutopilotHost::default();
    let mut state = new_game(&mut StaticSprites, &host, args.tunables())
        .context("failed to start a game")?;
    let mut rng = args.rng();

    while state.status == GameStatus::Playing && state.frame < args.frames {
        if state.frame % AUTOPILOT_SHOOT_EVERY == 0 {
            player_shoot(&mut state);
        }
        tick(&mut state, &mut host, &mut rng);
    }

    println!("=== HEADLESS RESULT ===");
    println!("  Frames:  {}", state.frame);
    println!("  Status:  {:?}", state.status);
    println!("  Score:   {}", state.score);
    println!("  Kills:   {}", state.kills);
    println!("  Level:   {}", state.level);
    println!("  Lives:   {}", state.player.lives);
    println!("  Cues:    {}", host.cues);
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref(), args.headless)?;
    args.tunables()
        .validate()
        .context("invalid command-line settings")?;

    if args.headless {
        return run_headless(&args);
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("cannot switch terminal to raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
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

    let result = run(&mut out, &rx, &args);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, args: &Args) -> Result<()> {
    let mut high_score = load_high_score();

    loop {
        match show_menu(out, rx, high_score)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                let host = TerminalHost::default();
                let mut state = new_game(&mut StaticSprites, &host, args.tunables())
                    .context("failed to start a game")?;
                let quit = game_loop(out, &mut state, rx, args, high_score)?;

                // Persist new high score if beaten
                if state.score > high_score {
                    high_score = state.score;
                    save_high_score(high_score);
                }

                if quit {
                    break;
                }
            }
        }
    }
    Ok(())
}
