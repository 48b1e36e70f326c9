//! Meteor Dodge rendering.

use super::game_common::{render_overlay, render_too_small, too_small};
use crate::games::faller::{FIELD_HEIGHT, FIELD_WIDTH, PLAYER_ROW};
use crate::games::DodgeGame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const METEOR_SPRITE: &str = "###";
const PLAYER_SPRITE: &str = "=====";

/// Render the dodge game scene.
pub fn render_dodge(frame: &mut Frame, area: Rect, game: &DodgeGame) {
    if too_small(area, FIELD_WIDTH + 4, FIELD_HEIGHT + 2) {
        render_too_small(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(FIELD_WIDTH + 2), // Play field
            Constraint::Length(24),           // Info panel
        ])
        .split(area);

    render_field(frame, chunks[0], game);
    render_info_panel(frame, chunks[1], game);

    if game.game_over {
        render_overlay(
            frame,
            chunks[0],
            " Game Over ",
            vec![
                Line::from(""),
                Line::from(format!("You survived {} ticks", game.score)),
                Line::from(""),
                Line::from("r restart    Esc menu"),
                Line::from(""),
            ],
        );
    }
}

fn render_field(frame: &mut Frame, area: Rect, game: &DodgeGame) {
    let block = Block::default()
        .title(" Meteor Dodge ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let x_offset = inner.x + (inner.width.saturating_sub(FIELD_WIDTH)) / 2;
    let y_offset = inner.y + (inner.height.saturating_sub(FIELD_HEIGHT)) / 2;

    for faller in &game.fallers {
        let row = faller.y.floor() as i32;
        if row < 0 || row >= FIELD_HEIGHT as i32 {
            continue;
        }
        let meteor = Paragraph::new(METEOR_SPRITE).style(Style::default().fg(Color::Red));
        frame.render_widget(
            meteor,
            Rect::new(x_offset + faller.x, y_offset + row as u16, 3, 1),
        );
    }

    let player = Paragraph::new(PLAYER_SPRITE).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(
        player,
        Rect::new(x_offset + game.player_x, y_offset + PLAYER_ROW, 5, 1),
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &DodgeGame) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Meteor Dodge",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Difficulty: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.difficulty.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.score),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Survive as long as",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "you can. Touching",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "anything ends the run.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Left/Right  move",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "r           restart",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Esc         menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
