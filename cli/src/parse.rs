use buscaminas_core::{Coord, Coord2};
use thiserror::Error;

/// A move typed at the game prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Reveal(Coord2),
    Flag(Coord2),
    Save,
    Menu,
}

/// Parse errors are user-facing; the prompt reports them and keeps reading.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("malformed coordinate, use a row letter followed by a column number, e.g. A5")]
    Malformed,
}

/// Parses one line of player input. Coordinates look like `A5` (row letter,
/// 1-based column number); an `M` prefix flags instead of revealing; `SAVE`
/// and `MENU` are commands. Only the shape is checked here; the board
/// itself rejects coordinates that fall outside it.
pub fn parse_move(input: &str) -> Result<Move, ParseError> {
    let input = input.trim().to_ascii_uppercase();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    match input.as_str() {
        "SAVE" => return Ok(Move::Save),
        "MENU" => return Ok(Move::Menu),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix('M') {
        if let Ok(coords) = parse_coord(rest) {
            return Ok(Move::Flag(coords));
        }
        // A bare "M..." that is not a flag move may still be a coordinate
        // on a board large enough to have an M row.
    }

    parse_coord(&input).map(Move::Reveal)
}

fn parse_coord(input: &str) -> Result<Coord2, ParseError> {
    let mut chars = input.chars();
    let letter = chars.next().ok_or(ParseError::Malformed)?;
    if !letter.is_ascii_alphabetic() {
        return Err(ParseError::Malformed);
    }
    let row = letter.to_ascii_uppercase() as u8 - b'A';

    let col: u16 = chars
        .as_str()
        .parse()
        .map_err(|_| ParseError::Malformed)?;
    if col == 0 || col > u16::from(Coord::MAX) {
        return Err(ParseError::Malformed);
    }

    Ok((row, (col - 1) as Coord))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reveal_coordinates() {
        assert_eq!(parse_move("A5"), Ok(Move::Reveal((0, 4))));
        assert_eq!(parse_move("a5"), Ok(Move::Reveal((0, 4))));
        assert_eq!(parse_move("J10"), Ok(Move::Reveal((9, 9))));
        assert_eq!(parse_move("  b2  "), Ok(Move::Reveal((1, 1))));
    }

    #[test]
    fn parses_flag_moves() {
        assert_eq!(parse_move("MA5"), Ok(Move::Flag((0, 4))));
        assert_eq!(parse_move("mj10"), Ok(Move::Flag((9, 9))));
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_move("SAVE"), Ok(Move::Save));
        assert_eq!(parse_move("menu"), Ok(Move::Menu));
    }

    #[test]
    fn out_of_board_rows_parse_and_are_left_to_the_board() {
        // 'Z' is a well-formed row letter; the board reports OutOfBounds.
        assert_eq!(parse_move("Z3"), Ok(Move::Reveal((25, 2))));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_move(""), Err(ParseError::Empty));
        assert_eq!(parse_move("5A"), Err(ParseError::Malformed));
        assert_eq!(parse_move("A0"), Err(ParseError::Malformed));
        assert_eq!(parse_move("A"), Err(ParseError::Malformed));
        assert_eq!(parse_move("A5x"), Err(ParseError::Malformed));
        assert_eq!(parse_move("M"), Err(ParseError::Malformed));
    }
}
