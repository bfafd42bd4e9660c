use crossterm::queue;
use crossterm::style::{Color, Colors, Print, ResetColor, SetColors};
use langton_engine::Grid;
use std::io::{self, Write};

/// Draws the board row by row, the ant shown as an arrow.
///
/// # Arguments
/// * `out` - Where to draw to.
/// * `grid` - The board to draw.
/// * `color` - Whether every state gets its own ANSI colors.
pub fn draw<W: Write>(out: &mut W, grid: &Grid, color: bool) -> io::Result<()> {
    let ant = grid.agent();

    for y in 0..grid.height() {
        let row = grid.row(y as i64).map_err(io::Error::other)?;
        for (x, cell) in row.iter().enumerate() {
            let glyph = match ant {
                Some(ant) if ant.x() == x as i64 && ant.y() == y as i64 => {
                    ant.orientation().glyph()
                }
                _ => state_glyph(cell.state()),
            };

            if color {
                queue!(out, SetColors(state_colors(cell.state())), Print(glyph), ResetColor)?;
            } else {
                queue!(out, Print(glyph))?;
            }
        }
        queue!(out, Print('\n'))?;
    }

    out.flush()
}

/// `0`-`9`, then `A` and `B` for the states 10 and 11.
pub fn state_glyph(state: u8) -> char {
    char::from_digit(state as u32, 12)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

fn state_colors(state: u8) -> Colors {
    let (foreground, background) = match state {
        0 => (Color::Reset, Color::Grey),
        1 => (Color::Grey, Color::Black),
        2 => (Color::Reset, Color::DarkGreen),
        3 => (Color::Reset, Color::DarkRed),
        4 => (Color::Grey, Color::DarkBlue),
        5 => (Color::Reset, Color::DarkYellow),
        6 => (Color::Reset, Color::DarkCyan),
        7 => (Color::Reset, Color::DarkMagenta),
        8 => (Color::DarkCyan, Color::DarkRed),
        9 => (Color::DarkRed, Color::DarkBlue),
        10 => (Color::DarkBlue, Color::DarkYellow),
        _ => (Color::DarkGreen, Color::DarkMagenta),
    };
    Colors::new(foreground, background)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_plain(grid: &Grid) -> String {
        let mut out = Vec::new();
        draw(&mut out, grid, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn when_drawing_an_empty_board_every_cell_is_zero() {
        let grid = Grid::new(3, 2, "RL").unwrap();

        assert_eq!(draw_plain(&grid), "000\n000\n");
    }

    #[test]
    fn when_drawing_a_board_with_an_ant_its_orientation_is_shown() {
        let mut grid = Grid::new(3, 3, "RL").unwrap();
        grid.set_agent(1, 1).unwrap();
        grid.perform_step(1).unwrap();

        // The ant left a 1 behind and now faces north at (0, 1)
        assert_eq!(draw_plain(&grid), "000\n^10\n000\n");
    }

    #[test]
    fn when_drawing_high_states_letters_are_used() {
        assert_eq!(state_glyph(9), '9');
        assert_eq!(state_glyph(10), 'A');
        assert_eq!(state_glyph(11), 'B');
    }

    #[test]
    fn when_drawing_in_color_escape_sequences_surround_each_cell() {
        let grid = Grid::new(1, 1, "RL").unwrap();
        let mut out = Vec::new();

        draw(&mut out, &grid, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\u{1b}["));
        assert!(text.contains('0'));
        assert!(text.ends_with("\u{1b}[0m\n"));
    }

    #[test]
    fn when_drawing_a_board_without_columns_only_line_breaks_are_written() {
        let grid = Grid::new(0, 2, "RL").unwrap();

        assert_eq!(draw_plain(&grid), "\n\n");
    }
}
