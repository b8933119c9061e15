//! Rendering layer.  All terminal I/O lives here.
//!
//! Each function receives a mutable writer and a read-only snapshot of the
//! game.  No game logic is performed; this module only translates state into
//! terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use maze_runner::entities::{CellKind, Direction, GameStatus, Position, Snapshot};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_WALL: Color = Color::DarkCyan;
const C_HUD: Color = Color::White;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::Green;
const C_ADVERSARY: Color = Color::Red;
const C_FOOD: Color = Color::Yellow;
const C_EXIT: Color = Color::Magenta;
const C_BULLET: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Rows above the board: HUD, controls hint, spacer.
const BOARD_TOP: u16 = 3;

/// Each cell is drawn two columns wide so the board looks square.
fn cell_origin(pos: Position) -> (u16, u16) {
    ((pos.col * 2) as u16, BOARD_TOP + pos.row as u16)
}

// ── Public entry points ───────────────────────────────────────────────────────

pub fn render_title<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let lines: &[(&str, Color)] = &[
        ("M A Z E   R U N N E R", Color::Cyan),
        ("", Color::Reset),
        ("Reach the E to clear the level.", Color::White),
        ("*  food: +10 points, +2 ammo", C_FOOD),
        ("x  adversary: shoot it for +15, touch it and lose a life", C_ADVERSARY),
        ("", Color::Reset),
        ("Press any key to start, Q to quit", C_HINT),
    ];
    for (i, (text, color)) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(2, 1 + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*text))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()
}

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snap: &Snapshot<'_>) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, snap)?;
    draw_board(out, snap)?;

    for bullet in snap.bullets {
        // Bullets only show over open floor, matching how they pass over pickups.
        if snap.grid.is_kind(bullet.pos, CellKind::Path) {
            draw_glyph(out, bullet.pos, ".", C_BULLET)?;
        }
    }
    for adversary in snap.adversaries {
        draw_glyph(out, adversary.pos, "x", C_ADVERSARY)?;
    }
    draw_glyph(out, snap.player.pos, player_glyph(snap.player.facing), C_PLAYER)?;

    if snap.status == GameStatus::GameOver {
        draw_game_over(out, snap)?;
    }

    // Park cursor below the board and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, BOARD_TOP + snap.grid.height() as u16 + 1))?;
    out.flush()
}

// ── HUD (rows 0-1) ────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &Snapshot<'_>) -> std::io::Result<()> {
    let stats = snap.stats;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "MAZE RUNNER - Level: {} | Score: {} | Ammo: {} | ",
        stats.level, stats.score, stats.ammo
    )))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(format!("Lives: {}", "♥".repeat(stats.lives as usize))))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("W A S D / arrows : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Board ─────────────────────────────────────────────────────────────────────

fn draw_board<W: Write>(out: &mut W, snap: &Snapshot<'_>) -> std::io::Result<()> {
    for (pos, kind) in snap.grid.cells() {
        match kind {
            CellKind::Wall => draw_glyph(out, pos, "##", C_WALL)?,
            CellKind::Food => draw_glyph(out, pos, "*", C_FOOD)?,
            CellKind::Exit => draw_glyph(out, pos, "E", C_EXIT)?,
            CellKind::Path => {}
        }
    }
    Ok(())
}

fn player_glyph(facing: Direction) -> &'static str {
    match facing {
        Direction::Up => "^",
        Direction::Right => ">",
        Direction::Down => "v",
        Direction::Left => "<",
    }
}

fn draw_glyph<W: Write>(
    out: &mut W,
    pos: Position,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let (x, y) = cell_origin(pos);
    out.queue(cursor::MoveTo(x, y))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, snap: &Snapshot<'_>) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", snap.stats.score);
    let levels_line = format!("Levels Completed: {:>3}", snap.stats.level.saturating_sub(1));

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (score_line.as_str(), Color::Yellow),
        (levels_line.as_str(), Color::White),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = snap.grid.width() as u16; // board is two columns per cell
    let start_row = BOARD_TOP + (snap.grid.height() as u16 / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
