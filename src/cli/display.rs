// Board and message rendering for the terminal session

use crate::board::Board;

pub const DEFAULT_BOARD_OFFSET: usize = 13;
pub const BOX_WIDTH: usize = 70;
pub const BOX_OFFSET: usize = 10;

const FILES: &str = "       a      b      c      d      e      f      g      h";
const RULE: &str = "    --------------------------------------------------------   ";

/// Board from rank 8 down to rank 1, file letters above and below
pub fn render_board(board: &Board, offset: usize) -> Vec<String> {
    let pad = " ".repeat(offset);
    let mut lines = Vec::with_capacity(20);
    lines.push(format!("{pad}{FILES}"));
    lines.push(format!("{pad}{RULE}"));
    for (i, rank) in board.ranks().enumerate().rev() {
        let mut line = format!("{pad} {} |", i + 1);
        for cell in rank {
            match cell.piece() {
                Some(piece) => {
                    line.push_str(&format!(" {}({}) |", piece.kind.letter(), piece.color.tag()))
                }
                None => line.push_str("      |"),
            }
        }
        line.push_str(&format!(" {}", i + 1));
        lines.push(line);
        lines.push(format!("{pad}{RULE}"));
    }
    lines.push(format!("{pad}{FILES}"));
    lines
}

// Greedy word wrap; a single word longer than `width` gets its own line
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.len() + 1 + word.len() > width {
                out.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            out.push(current);
        }
    }
    out
}

/// Message framed by `border`, centred and wrapped to the box width
pub fn info_box(text: &str, border: char, width: usize, offset: usize) -> Vec<String> {
    let pad = " ".repeat(offset);
    let frame: String = std::iter::repeat(border).take(width).collect();
    let mut lines = vec![String::new(), format!("{pad}{frame}")];
    for line in wrap(text, width.saturating_sub(4)) {
        let free = width.saturating_sub(line.len() + 2);
        let left = free / 2;
        let right = free - left;
        lines.push(format!(
            "{pad}{border}{}{line}{}{border}",
            " ".repeat(left),
            " ".repeat(right)
        ));
    }
    lines.push(format!("{pad}{frame}"));
    lines.push(String::new());
    lines
}

pub fn message(text: &str) -> Vec<String> {
    info_box(text, '=', BOX_WIDTH, BOX_OFFSET)
}

pub fn error(text: &str) -> Vec<String> {
    info_box(text, '!', BOX_WIDTH, BOX_OFFSET)
}

pub fn welcome() -> Vec<String> {
    let text = "Welcome to scacchiera!\n\
        Valid figures are 'K', 'Q', 'R', 'B', 'N' or 'p'!\n\
        Moves are written as {figure}{column}{row}{column}{row}. Examples are:\n\
        Pawn from b2 to b3: pb2b3\n\
        Queen from d1 to d5: Qd1d5";
    info_box(text, '*', BOX_WIDTH, BOX_OFFSET)
}

pub fn help() -> Vec<String> {
    message(
        "Setup: place pieces with e.g. Ka1, 'next' ends the current color.\n\
         Play: move with e.g. Ke1e2.\n\
         Other commands: board, save <file>, help, quit.",
    )
}
