//! Text rendering of boards.
//!
//! Pure functions over a board's read-only state; nothing here mutates or
//! prints. The driver decides where the strings go.

use crate::board::Board;
use crate::config::BOARD_SIZE;

fn cell_glyph(board: &Board, row: usize, col: usize) -> char {
    if board.hits().get(row, col).unwrap_or(false) {
        'X'
    } else if board.misses().get(row, col).unwrap_or(false) {
        '.'
    } else if !board.ships_hidden() {
        if board.ship_map().get(row, col).unwrap_or(false) {
            '■'
        } else if board.reserved().get(row, col).unwrap_or(false) {
            '.'
        } else {
            'O'
        }
    } else {
        'O'
    }
}

/// Render a board with 1-indexed numeric headers on both axes.
///
/// `X` marks a hit, `.` a miss or a placement buffer, `■` a ship cell and
/// `O` open water. A hidden board conceals ships and their buffers but
/// still shows every shot.
pub fn render_board(board: &Board) -> String {
    let n = BOARD_SIZE as usize;
    let mut out = String::from("  |");
    for c in 1..=n {
        out.push_str(&format!(" {} |", c));
    }
    for r in 0..n {
        out.push_str(&format!("\n{} |", r + 1));
        for c in 0..n {
            out.push_str(&format!(" {} |", cell_glyph(board, r, c)));
        }
    }
    out
}

/// Join two renderings line by line with a `|:|` gutter, padding the left
/// side to a uniform width.
pub fn side_by_side(left: &str, right: &str) -> String {
    let left_lines: Vec<&str> = left.lines().collect();
    let right_lines: Vec<&str> = right.lines().collect();
    let width = left_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let rows = left_lines.len().max(right_lines.len());
    let mut out = Vec::with_capacity(rows);
    for i in 0..rows {
        let l = left_lines.get(i).copied().unwrap_or("");
        let r = right_lines.get(i).copied().unwrap_or("");
        out.push(format!("{:<width$}   |:|   {}", l, r));
    }
    out.join("\n")
}
