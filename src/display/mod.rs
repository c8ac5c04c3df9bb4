/// Terminal presentation: all terminal I/O lives here.
///
/// The game hands over a finished `PixelBuffer`; this module folds it into
/// half-block cells (`▀`, foreground = upper pixel, background = lower) and
/// writes only the cells that changed since the previous frame.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use pixel_invaders::buffer::{channels, PixelBuffer};
use pixel_invaders::entities::GameStatus;
use pixel_invaders::render::{downsample, fit_scale, CellGrid, C_BACKGROUND};

const MAX_SCALE: usize = 8;
const C_HINT: Color = Color::DarkGrey;

fn to_color(packed: u32) -> Color {
    let (r, g, b) = channels(packed);
    Color::Rgb { r, g, b }
}

pub struct Presenter {
    last: Option<CellGrid>,
    hint_status: Option<GameStatus>,
    term_size: (u16, u16),
}

impl Presenter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            last: None,
            hint_status: None,
            term_size: terminal::size()?,
        })
    }

    /// Force the next frame to be a full redraw.
    pub fn invalidate(&mut self) -> Result<()> {
        self.last = None;
        self.term_size = terminal::size()?;
        Ok(())
    }

    /// Render one complete frame.
    pub fn present<W: Write>(&mut self, out: &mut W, frame: &PixelBuffer, status: GameStatus) -> Result<()> {
        let (cols, rows) = self.term_size;
        // Keep the last row for the controls hint.
        let scale = fit_scale(
            frame.width(),
            frame.height(),
            cols as usize,
            (rows as usize).saturating_sub(1),
            MAX_SCALE,
        );
        let grid = downsample(frame, scale, C_BACKGROUND);

        match self.last.take() {
            Some(prev) if prev.cols == grid.cols && prev.rows == grid.rows => {
                diff_redraw(out, &prev, &grid)?;
            }
            _ => {
                out.queue(terminal::Clear(terminal::ClearType::All))?;
                full_redraw(out, &grid)?;
                self.hint_status = None;
            }
        }
        if self.hint_status != Some(status) {
            draw_controls_hint(out, grid.rows as u16, status)?;
            self.hint_status = Some(status);
        }

        out.queue(ResetColor)?;
        out.queue(cursor::MoveTo(0, grid.rows as u16))?;
        out.flush()?;
        self.last = Some(grid);
        Ok(())
    }
}

fn put_cell<W: Write>(out: &mut W, (top, bottom): (u32, u32)) -> Result<()> {
    out.queue(SetForegroundColor(to_color(top)))?;
    out.queue(SetBackgroundColor(to_color(bottom)))?;
    out.queue(Print('▀'))?;
    Ok(())
}

fn full_redraw<W: Write>(out: &mut W, grid: &CellGrid) -> Result<()> {
    for row in 0..grid.rows {
        out.queue(cursor::MoveTo(0, row as u16))?;
        for col in 0..grid.cols {
            if let Some(cell) = grid.get(col, row) {
                put_cell(out, cell)?;
            }
        }
    }
    Ok(())
}

/// Rewrite each run of changed cells with a single cursor move.
fn diff_redraw<W: Write>(out: &mut W, prev: &CellGrid, next: &CellGrid) -> Result<()> {
    for row in 0..next.rows {
        let mut col = 0;
        while col < next.cols {
            if prev.get(col, row) == next.get(col, row) {
                col += 1;
                continue;
            }
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            while col < next.cols && prev.get(col, row) != next.get(col, row) {
                if let Some(cell) = next.get(col, row) {
                    put_cell(out, cell)?;
                }
                col += 1;
            }
        }
    }
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, row: u16, status: GameStatus) -> Result<()> {
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(SetForegroundColor(C_HINT))?;
    let hint = match status {
        GameStatus::Playing => "← → / A D : Move   SPACE : Shoot   Q : Quit",
        _ => "R : Play Again   Q : Quit",
    };
    out.queue(Print(hint))?;
    Ok(())
}
