use std::io::{self, Write as _};

use buscaminas_core::{Board, CellSymbol, Coord};

use crate::player::Player;

/// Character shown for each cell symbol; the legend below the grid explains them.
fn symbol_char(symbol: CellSymbol) -> char {
    match symbol {
        CellSymbol::Flagged => 'X',
        CellSymbol::Hidden => ' ',
        CellSymbol::Mine => '*',
        CellSymbol::Empty => 'V',
        CellSymbol::Count(count) => char::from_digit(u32::from(count), 10).unwrap_or('?'),
    }
}

pub fn render_board(board: &Board) -> String {
    use std::fmt::Write;

    let size = board.size();
    let mut out = String::new();

    out.push_str("   ");
    for col in 1..=u32::from(size) {
        let _ = write!(out, "{col:>3}");
    }
    out.push('\n');
    push_separator(&mut out, size);

    for row in 0..size {
        let _ = write!(out, "{} |", (b'A' + row) as char);
        for col in 0..size {
            let Ok(cell) = board.cell_at((row, col)) else {
                continue;
            };
            let _ = write!(out, " {} |", symbol_char(cell.symbol()));
        }
        out.push('\n');
        push_separator(&mut out, size);
    }

    push_legend(&mut out);
    out
}

fn push_legend(out: &mut String) {
    out.push_str("\nSymbols:\n");
    out.push_str("  X = flagged cell\n");
    out.push_str("  V = revealed empty cell\n");
    out.push_str("  * = revealed mine\n");
    out.push_str("  digit = adjacent mine count\n");
    out.push_str("  blank = hidden cell\n");
}

fn push_separator(out: &mut String, size: Coord) {
    out.push_str("  ");
    for _ in 0..=size {
        out.push_str("---");
    }
    out.push('\n');
}

pub fn show_board(board: &Board) {
    println!("\n{}", render_board(board));
}

pub fn show_menu() {
    println!("\n=== BUSCAMINAS ===");
    println!("1. New game");
    println!("2. Load game");
    println!("3. Statistics");
    println!("4. Quit");
    prompt("Pick an option: ");
}

pub fn show_move_help() {
    println!("\nMoves:");
    println!("  reveal a cell: enter its coordinate (e.g. A5)");
    println!("  flag a cell:   prefix with M (e.g. MA5)");
    println!("  save the game: SAVE");
    println!("  back to menu:  MENU");
    prompt("Your move: ");
}

pub fn prompt_name() {
    prompt("Enter your name: ");
}

fn prompt(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

pub fn show_welcome(name: &str, size: Coord, mines: u16) {
    println!("\nWelcome to Buscaminas, {name}!");
    println!("Goal: reveal every cell that hides no mine.");
    println!("There are {mines} mines hidden on the {size}x{size} board.");
}

pub fn show_victory() {
    println!("\nCONGRATULATIONS, YOU WON!");
    println!("You revealed every safe cell.");
}

pub fn show_defeat() {
    println!("\nGame over!");
    println!("You revealed a mine.");
}

pub fn show_stats(player: &Player) {
    println!("\n=== STATISTICS ===");
    println!("Player: {}", player.name);
    println!("Games played: {}", player.played);
    println!("Wins: {}", player.won);
    println!("Losses: {}", player.lost);
    println!("Win percentage: {:.2}%", player.win_percentage());
}

pub fn show_message(text: &str) {
    println!("{text}");
}

pub fn show_error(text: &str) {
    println!("Error: {text}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headers_flags_and_counts() {
        let mut board = Board::from_mine_coords(3, &[(0, 0)]).unwrap();
        board.reveal((1, 1)).unwrap();
        board.toggle_flag((0, 0)).unwrap();

        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "     1  2  3");
        assert_eq!(lines[2], "A | X |   |   |");
        assert_eq!(lines[4], "B |   | 1 |   |");
    }

    #[test]
    fn hidden_board_renders_blank_cells() {
        let board = Board::from_mine_coords(2, &[(0, 0)]).unwrap();

        let rendered = render_board(&board);
        // Grid portion only; the legend below it always mentions '*'.
        let grid: Vec<&str> = rendered.lines().take(6).collect();

        assert!(grid.contains(&"A |   |   |"));
        assert!(grid.iter().all(|line| !line.contains('*')));
    }

    #[test]
    fn legend_accompanies_every_render() {
        let board = Board::from_mine_coords(2, &[(0, 0)]).unwrap();

        let rendered = render_board(&board);

        assert!(rendered.contains("Symbols:"));
        assert!(rendered.contains("X = flagged cell"));
        assert!(rendered.contains("* = revealed mine"));
        assert!(rendered.contains("blank = hidden cell"));
    }
}
