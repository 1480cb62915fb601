//! Handoff confirmation screen with a QR code of the WhatsApp link

use qrcode::QrCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Half-block rendering of a QR code, two modules per terminal row
pub fn qr_lines(data: &str) -> Option<Vec<Line<'static>>> {
    let code = QrCode::new(data.as_bytes()).ok()?;
    let width = code.width();
    let mut lines = Vec::with_capacity(width / 2 + 1);

    for y in (0..width).step_by(2) {
        let row: String = (0..width)
            .map(|x| {
                let top = code[(x, y)] == qrcode::Color::Dark;
                let bottom = y + 1 < width && code[(x, y + 1)] == qrcode::Color::Dark;
                match (top, bottom) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                }
            })
            .collect();
        lines.push(Line::from(Span::styled(row, Style::default().fg(Color::White))));
    }

    Some(lines)
}

/// Render the sent screen
pub fn render_sent(frame: &mut Frame, url: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Order Sent to WhatsApp ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let info = vec![
        Line::from(Span::styled(
            "WhatsApp has been asked to open with your order.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Instruksi pembayaran akan diberikan melalui WhatsApp."),
        Line::from(""),
        Line::from(Span::styled(
            "If nothing opened, scan the QR code or copy the link:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(url.to_string(), Style::default().fg(Color::Cyan))),
    ];
    let info_para = Paragraph::new(info).wrap(Wrap { trim: false });
    frame.render_widget(info_para, chunks[0]);

    let qr_area = chunks[1];
    let qr = qr_lines(url).filter(|lines| {
        let width = lines.first().map(|l| l.width()).unwrap_or(0);
        width <= qr_area.width as usize && lines.len() <= qr_area.height as usize
    });

    let qr_para = match qr {
        Some(lines) => Paragraph::new(lines),
        None => Paragraph::new("QR code does not fit - enlarge the terminal or copy the link")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true }),
    };
    frame.render_widget(qr_para, qr_area);
}
