//! Message preview screen

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the composed message as it will appear in the chat
pub fn render_preview(frame: &mut Frame, message: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" WhatsApp Message Preview ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Instructions
            Constraint::Min(5),    // Message
        ])
        .split(inner);

    let instructions = Paragraph::new("This text is pre-filled in the chat when you press Buy Now.")
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(instructions, chunks[0]);

    let body = Paragraph::new(message).wrap(Wrap { trim: false });
    frame.render_widget(body, chunks[1]);
}
