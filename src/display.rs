/// Rendering layer. All terminal I/O lives here.
///
/// The simulation issues sprite draw calls in world pixels; `TerminalCanvas`
/// maps them onto the character grid inside the border. Border, HUD and
/// overlays read the game state directly but never change it.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use chicken_shooter::constants::BOSS_LEVEL;
use chicken_shooter::entities::{GameState, GameStatus, Sprite, SpriteKind};
use chicken_shooter::geometry::Vec2;
use chicken_shooter::platform::Renderer;
use chicken_shooter::render::render;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_EXPLOSION: Color = Color::DarkYellow;
const C_CHICKEN: Color = Color::Yellow;
const C_BOSS: Color = Color::Red;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_HEALTH: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;

pub const CONTROLS_HINT: &str = "← ↑ ↓ → / W A S D : Move   SPACE : Shoot   Q : Quit";

const EXPLOSION_GLYPHS: [&str; 4] = ["*", "✶", "✺", "☼"];

fn glyph(sprite: &Sprite, frame: u32) -> (&'static str, Color) {
    match sprite.kind {
        SpriteKind::Player => ("/▲\\", C_PLAYER),
        SpriteKind::Explosion => (
            EXPLOSION_GLYPHS[frame as usize % EXPLOSION_GLYPHS.len()],
            C_EXPLOSION,
        ),
        SpriteKind::Heart => ("♥", C_HUD_LIVES),
        SpriteKind::Chicken => ("<ö>", C_CHICKEN),
        SpriteKind::Boss => ("{▓▓▓}", C_BOSS),
        SpriteKind::PlayerBullet => ("║", C_BULLET_PLAYER),
        SpriteKind::ChickenBullet => ("↓", C_BULLET_ENEMY),
        SpriteKind::BossBullet => ("▼", C_BULLET_ENEMY),
        SpriteKind::Health => ("✚", C_HEALTH),
    }
}

// ── World → terminal mapping ──────────────────────────────────────────────────

/// Terminal area inside the border (columns 1..width-1, rows 2..height-2)
/// standing in for a `world_width × world_height` playfield.
#[derive(Clone, Copy, Debug)]
struct Viewport {
    width: u16,
    height: u16,
    world_width: f32,
    world_height: f32,
}

impl Viewport {
    fn cols(&self) -> f32 {
        f32::from(self.width.saturating_sub(2))
    }

    fn rows(&self) -> f32 {
        f32::from(self.height.saturating_sub(4))
    }

    /// Left column and row for a glyph `len` cells wide centred on `centre`,
    /// or `None` if it falls outside the play area.
    fn cell(&self, centre: Vec2, len: u16) -> Option<(u16, u16)> {
        let col = 1.0 + centre.x / self.world_width * self.cols();
        let row = 2.0 + centre.y / self.world_height * self.rows();
        if !(1.0..1.0 + self.cols()).contains(&col) || !(2.0..2.0 + self.rows()).contains(&row) {
            return None;
        }
        let left = (col as u16).saturating_sub(len / 2).max(1);
        let right_edge = self.width.saturating_sub(1);
        let left = left.min(right_edge.saturating_sub(len));
        Some((left, row as u16))
    }
}

/// `Renderer` backed by a crossterm writer. Draw calls cannot fail from the
/// simulation's point of view, so the first I/O error is parked and
/// reported by [`TerminalCanvas::finish`].
struct TerminalCanvas<'a, W: Write> {
    out: &'a mut W,
    view: Viewport,
    error: Option<io::Error>,
}

impl<W: Write> TerminalCanvas<'_, W> {
    fn put(&mut self, sprite: &Sprite, frame: u32, position: Vec2, scale: Vec2) {
        if self.error.is_some() {
            return;
        }
        let centre = position + sprite.size().scaled_by(scale) * 0.5;
        let (text, color) = glyph(sprite, frame);
        let Some((col, row)) = self.view.cell(centre, text.chars().count() as u16) else {
            return;
        };
        let result = self
            .out
            .queue(cursor::MoveTo(col, row))
            .and_then(|out| out.queue(style::SetForegroundColor(color)))
            .and_then(|out| out.queue(Print(text)))
            .map(|_| ());
        if let Err(e) = result {
            self.error = Some(e);
        }
    }

    fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<W: Write> Renderer for TerminalCanvas<'_, W> {
    fn draw(&mut self, sprite: &Sprite, position: Vec2, scale: Vec2) {
        self.put(sprite, 0, position, scale);
    }

    fn draw_frame(&mut self, sprite: &Sprite, frame: u32, position: Vec2, scale: Vec2) {
        self.put(sprite, frame, position, scale);
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render_frame<W: Write>(
    out: &mut W,
    state: &GameState,
    playfield: (f32, f32),
    high_score: u32,
) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    draw_hud(out, state, width)?;

    let mut canvas = TerminalCanvas {
        out: &mut *out,
        view: Viewport {
            width,
            height,
            world_width: playfield.0,
            world_height: playfield.1,
        },
        error: None,
    };
    render(state, &mut canvas);
    canvas.finish()?;

    draw_controls_hint(out, height)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, high_score, width, height)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, width: u16) -> io::Result<()> {
    // Score and kills, left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>7}  Kills:{:>4}",
        state.score, state.kills
    )))?;

    // Level, centre
    let (level_str, level_color) = if state.level == BOSS_LEVEL {
        ("[ BOSS ]".to_string(), Color::Red)
    } else {
        (format!("[ LEVEL {} ]", state.level), Color::Green)
    };
    let lx = (width / 2).saturating_sub(level_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(level_color))?;
    out.queue(Print(&level_str))?;

    // Lives, right
    let hearts: String = "♥".repeat(state.player.lives as usize);
    let lives_text = format!("Lives: {}", hearts);
    let rx = width.saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(CONTROLS_HINT))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    high_score: u32,
    width: u16,
    height: u16,
) -> io::Result<()> {
    let new_best = state.score > high_score;
    let score_line = format!("Final Score: {:>6}", state.score);
    let best_line = if new_best {
        format!("★ NEW BEST: {:>6} ★", state.score)
    } else {
        format!("Best Score:  {:>6}", high_score)
    };
    let best_color = if new_best { Color::Yellow } else { Color::DarkGrey };

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (score_line.as_str(), Color::Yellow),
        (best_line.as_str(), best_color),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
