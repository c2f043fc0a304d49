//! The text codec for the save format.
//!
//! Line 0 is the header: the turn symbol followed by the dark and light
//! player mode digits. Each following line is one board row, one symbol per
//! cell. The alphabet is `x` = dark, `o` = light, `-` = empty cell or no
//! turn; mode digits are `0` = manual, `1` = automatic.

use crate::error::FormatError;
use crate::game::{Board, Disk, GameState, PlayerMode};

const DARK_SYMBOL: char = 'x';
const LIGHT_SYMBOL: char = 'o';
const NONE_SYMBOL: char = '-';

fn cell_symbol(disk: Option<Disk>) -> char {
    match disk {
        Some(Disk::Dark) => DARK_SYMBOL,
        Some(Disk::Light) => LIGHT_SYMBOL,
        None => NONE_SYMBOL,
    }
}

fn mode_digit(mode: PlayerMode) -> char {
    match mode {
        PlayerMode::Manual => '0',
        PlayerMode::Automatic => '1',
    }
}

fn parse_mode(c: char) -> Result<PlayerMode, FormatError> {
    match c {
        '0' => Ok(PlayerMode::Manual),
        '1' => Ok(PlayerMode::Automatic),
        other => Err(FormatError::BadModeDigit(other)),
    }
}

fn parse_cell(c: char) -> Result<Option<Disk>, FormatError> {
    match c {
        DARK_SYMBOL => Ok(Some(Disk::Dark)),
        LIGHT_SYMBOL => Ok(Some(Disk::Light)),
        NONE_SYMBOL => Ok(None),
        other => Err(FormatError::BadCellSymbol(other)),
    }
}

/// Encode a game state as save-format text. Always succeeds.
pub fn encode(state: &GameState) -> String {
    let board = state.board();
    let mut out = String::with_capacity((board.width() + 1) * board.height() + 3);
    out.push(cell_symbol(state.turn()));
    out.push(mode_digit(state.mode(Disk::Dark)));
    out.push(mode_digit(state.mode(Disk::Light)));
    for row in board.rows() {
        out.push('\n');
        for &cell in row {
            out.push(cell_symbol(cell));
        }
    }
    out
}

/// Decode save-format text into a game state.
///
/// Fails atomically on a malformed header or cell symbol. Row lengths and
/// board dimensions are not validated here; callers that expect a
/// rectangular board of a known size cross-check the decoded board
/// themselves.
pub fn decode(text: &str) -> Result<GameState, FormatError> {
    let mut lines = text.split('\n');
    let header = lines.next().unwrap_or("");
    let mut header_chars = header.chars();
    let (turn_char, dark_char, light_char) =
        match (header_chars.next(), header_chars.next(), header_chars.next()) {
            (Some(t), Some(d), Some(l)) => (t, d, l),
            _ => return Err(FormatError::TruncatedHeader(header.chars().count())),
        };

    let turn = match turn_char {
        DARK_SYMBOL => Some(Disk::Dark),
        LIGHT_SYMBOL => Some(Disk::Light),
        NONE_SYMBOL => None,
        other => return Err(FormatError::BadTurnSymbol(other)),
    };
    let dark_mode = parse_mode(dark_char)?;
    let light_mode = parse_mode(light_char)?;

    let rows = lines
        .map(|line| line.chars().map(parse_cell).collect())
        .collect::<Result<Vec<Vec<Option<Disk>>>, FormatError>>()?;

    Ok(GameState::from_parts(
        turn,
        dark_mode,
        light_mode,
        Board::from_rows(rows),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_the_initial_state() {
        let text = encode(&GameState::initial());
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines[0], "x00");
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[4], "---ox---");
        assert_eq!(lines[5], "---xo---");
        assert!(lines[1..].iter().all(|row| row.len() == 8));
    }

    #[test]
    fn test_decodes_the_empty_3x3_board() {
        let state = decode("x00\n---\n---\n---").unwrap();
        assert_eq!(state.turn(), Some(Disk::Dark));
        assert_eq!(state.mode(Disk::Dark), PlayerMode::Manual);
        assert_eq!(state.mode(Disk::Light), PlayerMode::Manual);
        assert_eq!(state.board().width(), 3);
        assert_eq!(state.board().height(), 3);
        assert_eq!(state.board().count_disks(Disk::Dark), 0);
        assert_eq!(state.board().count_disks(Disk::Light), 0);
    }

    #[test]
    fn test_decodes_a_mixed_3x3_board() {
        let state = decode("x00\n-x-\nxox\n-o-").unwrap();
        let board = state.board();
        assert_eq!(board.disk_at(0, 0), None);
        assert_eq!(board.disk_at(1, 0), Some(Disk::Dark));
        assert_eq!(board.disk_at(0, 1), Some(Disk::Dark));
        assert_eq!(board.disk_at(1, 1), Some(Disk::Light));
        assert_eq!(board.disk_at(2, 1), Some(Disk::Dark));
        assert_eq!(board.disk_at(1, 2), Some(Disk::Light));
        assert_eq!(board.count_disks(Disk::Dark), 3);
        assert_eq!(board.count_disks(Disk::Light), 2);
    }

    #[test]
    fn test_round_trips_a_played_state() {
        let mut state = GameState::initial();
        state.set_mode(Disk::Light, PlayerMode::Automatic);
        let mv = state.valid_moves(Disk::Dark)[0];
        let mut state = state.apply_move(mv).unwrap().state;
        state.advance_turn();
        assert_eq!(decode(&encode(&state)).unwrap(), state);
    }

    #[test]
    fn test_round_trips_a_finished_state() {
        let state = GameState::from_parts(
            None,
            PlayerMode::Automatic,
            PlayerMode::Manual,
            Board::standard(),
        );
        let text = encode(&state);
        assert!(text.starts_with("-10"));
        assert_eq!(decode(&text).unwrap(), state);
    }

    #[test]
    fn test_rejects_truncated_headers() {
        assert_eq!(decode("").unwrap_err(), FormatError::TruncatedHeader(0));
        assert_eq!(decode("x0").unwrap_err(), FormatError::TruncatedHeader(2));
        assert_eq!(
            decode("x0\n---").unwrap_err(),
            FormatError::TruncatedHeader(2)
        );
    }

    #[test]
    fn test_rejects_bad_turn_symbols() {
        assert_eq!(
            decode("z00\n---").unwrap_err(),
            FormatError::BadTurnSymbol('z')
        );
    }

    #[test]
    fn test_rejects_bad_mode_digits() {
        assert_eq!(
            decode("x20\n---").unwrap_err(),
            FormatError::BadModeDigit('2')
        );
        assert_eq!(
            decode("x0a\n---").unwrap_err(),
            FormatError::BadModeDigit('a')
        );
    }

    #[test]
    fn test_rejects_bad_cell_symbols() {
        assert_eq!(
            decode("x00\n-#-").unwrap_err(),
            FormatError::BadCellSymbol('#')
        );
    }

    #[test]
    fn test_accepts_ragged_rows() {
        // Shape checks belong to the store, not the codec.
        let state = decode("x00\n---\n--").unwrap();
        assert!(!state.board().is_rectangular());
        assert_eq!(state.board().height(), 2);
    }
}
