//! Main menu rendering.

use crate::menu::{MenuEntry, MenuState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the game picker.
pub fn render_menu(frame: &mut Frame, area: Rect, menu: &MenuState) {
    let block = Block::default()
        .title(" Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Min(0),    // Entries
            Constraint::Length(2), // Key hints
        ])
        .split(inner);

    let heading = Paragraph::new("Pick a game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(heading, chunks[0]);

    let mut lines: Vec<Line> = Vec::new();
    for (i, entry) in MenuEntry::ALL.iter().enumerate() {
        let selected = i == menu.selected;
        let marker = if selected { "> " } else { "  " };
        let title_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<14}", marker, entry.title()), title_style),
            Span::styled(
                format!("< {} >", menu.option_label(*entry)),
                if selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", entry.tagline()),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }
    let entries = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(entries, chunks[1]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("Up/Down", Style::default().fg(Color::Cyan)),
        Span::raw(" select   "),
        Span::styled("Left/Right", Style::default().fg(Color::Cyan)),
        Span::raw(" options   "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" play   "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" quit"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[2]);
}
