//! Tic-tac-toe rendering.

use super::game_common::{render_overlay, render_too_small, too_small};
use crate::games::tictactoe::{TicTacToeGame, TicTacToeResult, GRID_SIZE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Each cell spans 5 columns plus a separator column, and one row plus a
/// separator row.
const CELL_WIDTH: u16 = 6;
const CELL_HEIGHT: u16 = 2;
const BOARD_WIDTH: u16 = CELL_WIDTH * GRID_SIZE as u16;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * GRID_SIZE as u16;

/// Render the tic-tac-toe scene.
pub fn render_tictactoe(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    if too_small(area, BOARD_WIDTH + 4, BOARD_HEIGHT + 4) {
        render_too_small(frame, area);
        return;
    }

    let block = Block::default()
        .title(" Tic-Tac-Toe ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Status line
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(2),            // Key hints
        ])
        .split(inner);

    render_status(frame, chunks[0], game);
    render_board(frame, chunks[1], game);

    let hints = Paragraph::new("Arrows move   Enter place   r restart   Esc menu")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[2]);

    if let Some(result) = game.game_result {
        let message = match result {
            TicTacToeResult::Won(player) => format!("{} wins!", player.name()),
            TicTacToeResult::Draw => "It's a draw!".to_string(),
        };
        render_overlay(
            frame,
            chunks[1],
            " Round Over ",
            vec![
                Line::from(""),
                Line::from(message),
                Line::from(""),
                Line::from("r play again    Esc menu"),
                Line::from(""),
            ],
        );
    }
}

fn render_status(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    let status = match game.game_result {
        Some(TicTacToeResult::Won(player)) => Line::from(Span::styled(
            format!("{} wins!", player.name()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Some(TicTacToeResult::Draw) => Line::from(Span::styled(
            "It's a draw!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(vec![
            Span::styled(
                format!("{} ", game.current_player.name()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({})", game.current_player.mark()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(" to move", Style::default().fg(Color::Gray)),
        ]),
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), area);
}

fn render_board(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    let x_offset = area.x + (area.width.saturating_sub(BOARD_WIDTH)) / 2;
    let y_offset = area.y + (area.height.saturating_sub(BOARD_HEIGHT)) / 2;

    for row in 0..GRID_SIZE {
        let mut spans = Vec::new();
        for col in 0..GRID_SIZE {
            let is_cursor = game.cursor == (row, col) && game.game_result.is_none();
            let mark = game.board[row][col].map(|p| p.mark()).unwrap_or('.');

            let mut style = match game.board[row][col] {
                Some(p) if p.mark() == 'X' => Style::default().fg(Color::Red),
                Some(_) => Style::default().fg(Color::Blue),
                None => Style::default().fg(Color::DarkGray),
            };
            if is_cursor {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }

            spans.push(Span::styled(format!("  {}  ", mark), style));
            if col + 1 < GRID_SIZE {
                spans.push(Span::styled("|", Style::default().fg(Color::Gray)));
            }
        }
        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(
            line,
            Rect::new(x_offset, y_offset + row as u16 * CELL_HEIGHT, BOARD_WIDTH, 1),
        );

        if row + 1 < GRID_SIZE {
            let separator = Paragraph::new("-----+-----+-----")
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(
                separator,
                Rect::new(
                    x_offset,
                    y_offset + row as u16 * CELL_HEIGHT + 1,
                    BOARD_WIDTH,
                    1,
                ),
            );
        }
    }
}
