//! Helpers shared by the game scenes.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// A `width` x `height` rect centered inside `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Draw a bordered modal with the given lines, centered on `area`.
pub fn render_overlay(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let width = (lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 6)
        .max(title.len() as u16 + 4);
    let height = lines.len() as u16 + 2;
    let rect = centered_rect(area, width, height);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, rect);
}

/// True when `area` is too small to hold a `width` x `height` playfield;
/// callers should fall back to [`render_too_small`].
pub fn too_small(area: Rect, width: u16, height: u16) -> bool {
    area.width < width || area.height < height
}

/// Placeholder message for undersized terminals.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Terminal too small -- enlarge the window")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(paragraph, area);
}
