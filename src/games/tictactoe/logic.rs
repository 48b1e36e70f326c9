//! Game logic for the tic-tac-toe minigame.

use super::types::{Player, TicTacToeGame, TicTacToeResult, GRID_SIZE};

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Scan the fixed line table and return the owner of the first completed
/// triple, or None while nobody has won. Draws are detected separately from
/// the move counter.
pub fn check_winner(board: &[[Option<Player>; GRID_SIZE]; GRID_SIZE]) -> Option<Player> {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(player) = board[a.0][a.1] {
            if board[b.0][b.1] == Some(player) && board[c.0][c.1] == Some(player) {
                return Some(player);
            }
        }
    }
    None
}

/// Input actions for tic-tac-toe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeInput {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Place a mark at the cursor (Enter or Space).
    Place,
    /// Clear the board ('r').
    Restart,
    /// Any other key.
    Other,
}

/// Process player input. After every placed mark the board is scanned for a
/// winner; a full board with no winner is a draw.
pub fn process_input(game: &mut TicTacToeGame, input: TicTacToeInput) {
    match input {
        TicTacToeInput::Restart => game.restart(),
        _ if game.game_result.is_some() => {}
        TicTacToeInput::CursorUp => game.move_cursor(-1, 0),
        TicTacToeInput::CursorDown => game.move_cursor(1, 0),
        TicTacToeInput::CursorLeft => game.move_cursor(0, -1),
        TicTacToeInput::CursorRight => game.move_cursor(0, 1),
        TicTacToeInput::Place => {
            let (row, col) = game.cursor;
            if !game.place_mark(row, col) {
                return;
            }
            if let Some(winner) = check_winner(&game.board) {
                game.game_result = Some(TicTacToeResult::Won(winner));
            } else if game.move_count == (GRID_SIZE * GRID_SIZE) as u32 {
                game.game_result = Some(TicTacToeResult::Draw);
            } else {
                game.switch_player();
            }
        }
        TicTacToeInput::Other => {}
    }
}
