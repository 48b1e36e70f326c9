//! Tic-tac-toe data structures.
//!
//! Local two-player game on a 3x3 board. The starting player is picked on
//! the menu and kept across restarts.

/// Board size (3x3).
pub const GRID_SIZE: usize = 3;

/// One of the two local players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Player::One => "Player One",
            Player::Two => "Player Two",
        }
    }

    /// Mark drawn on the board.
    pub fn mark(&self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

/// Game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeResult {
    Won(Player),
    Draw,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    /// 3x3 board, None = empty cell.
    pub board: [[Option<Player>; GRID_SIZE]; GRID_SIZE],
    /// Current cursor position (row, col).
    pub cursor: (usize, usize),
    /// Who moved first this round; restarts keep it.
    pub starting_player: Player,
    /// Whose turn it is.
    pub current_player: Player,
    /// Marks placed so far; 9 with no winner means a draw.
    pub move_count: u32,
    /// Game result (None if the round is still open).
    pub game_result: Option<TicTacToeResult>,
}

impl TicTacToeGame {
    pub fn new(starting_player: Player) -> Self {
        Self {
            board: [[None; GRID_SIZE]; GRID_SIZE],
            cursor: (GRID_SIZE / 2, GRID_SIZE / 2),
            starting_player,
            current_player: starting_player,
            move_count: 0,
            game_result: None,
        }
    }

    /// Check if a position is on the board and empty.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE && self.board[row][col].is_none()
    }

    /// Place the current player's mark at the given position.
    pub fn place_mark(&mut self, row: usize, col: usize) -> bool {
        if !self.is_valid_move(row, col) || self.game_result.is_some() {
            return false;
        }
        self.board[row][col] = Some(self.current_player);
        self.move_count += 1;
        true
    }

    /// Switch to the other player's turn.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Move the cursor, clamped to the board.
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let new_row = (self.cursor.0 as i32 + d_row).clamp(0, GRID_SIZE as i32 - 1) as usize;
        let new_col = (self.cursor.1 as i32 + d_col).clamp(0, GRID_SIZE as i32 - 1) as usize;
        self.cursor = (new_row, new_col);
    }

    /// Clear the board for a fresh round with the same starting player.
    pub fn restart(&mut self) {
        *self = Self::new(self.starting_player);
    }
}
