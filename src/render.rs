//! Terminal rendering of the arena

use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

use crate::arena::grid::CellStatus;
use crate::arena::Arena;
use crate::core::error::Result;
use crate::core::types::Position;

/// Render the arena as a character grid: `.` empty, `*` wall, a color
/// letter per zurt cell (any one of the stacked zurts), `@` for the living
/// player and `X` for the dead one.
pub fn frame(arena: &Arena) -> String {
    let rows = arena.rows() as usize;
    let cols = arena.cols() as usize;
    let mut cells = vec![vec!['.'; cols]; rows];

    for r in 1..=arena.rows() {
        for c in 1..=arena.cols() {
            if arena.status_at(Position::new(r, c)) == CellStatus::Wall {
                cells[(r - 1) as usize][(c - 1) as usize] = '*';
            }
        }
    }

    for zurt in arena.zurts() {
        let pos = zurt.position();
        cells[(pos.row - 1) as usize][(pos.col - 1) as usize] = zurt.color().as_char();
    }

    if let Some(pos) = arena.player_position() {
        let marker = if arena.player_is_dead() { 'X' } else { '@' };
        cells[(pos.row - 1) as usize][(pos.col - 1) as usize] = marker;
    }

    let mut out = String::with_capacity(rows * (cols + 1));
    for row in &cells {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

/// Clear the terminal and draw the arena with a status message.
pub fn draw(arena: &Arena, msg: &str) -> Result<()> {
    let mut out = io::stdout();
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    write!(out, "{}", frame(arena))?;
    writeln!(out)?;
    if !msg.is_empty() {
        writeln!(out, "{}", msg)?;
    }
    writeln!(out, "There are {} zurts remaining.", arena.zurt_count())?;
    if arena.player_position().is_none() {
        writeln!(out, "There is no player!")?;
    } else if arena.player_is_dead() {
        writeln!(out, "The player is dead.")?;
    }
    out.flush()?;
    Ok(())
}
