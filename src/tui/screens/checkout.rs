//! Checkout screen - product, buyer form and payment details

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use wa_checkout::checkout::{format_idr, format_rupiah, FieldKey, PaymentMethod, BONUS_THRESHOLD};

use crate::tui::app::App;
use crate::tui::state::CheckoutField;

const ACCENT: Color = Color::Rgb(39, 196, 147);

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn section(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ))
}

/// Render the checkout screen
pub fn render_checkout(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(10)])
        .split(chunks[0]);

    render_product(frame, app, left[0]);
    render_form(frame, app, left[1]);
    render_payment(frame, app, chunks[1]);
}

fn render_product(frame: &mut Frame, app: &App, area: Rect) {
    let product = app.view.product();
    let quantity = app.view.order().quantity();
    let focused = app.focused == CheckoutField::Quantity;

    let lines = vec![
        Line::from(Span::styled(
            product.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} / item", format_rupiah(product.unit_price)),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled("Jumlah: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("[ - ]  {}  [ + ]", quantity), focus_style(focused)),
            Span::styled(
                if focused { "   ←/→ to change" } else { "" },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Beli {} produk atau lebih untuk mendapatkan bonus spesial.",
                BONUS_THRESHOLD
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines)
        .block(section(" PRODUCT "))
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = section(" CATATAN PESANAN ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(1), // Email error
            Constraint::Length(3), // Name
            Constraint::Length(1), // Name error
            Constraint::Length(3), // Phone
            Constraint::Length(1), // Phone error
            Constraint::Min(4),    // Notes
        ])
        .split(inner);

    let inputs = [
        (&app.email, CheckoutField::Email, FieldKey::Email),
        (&app.name, CheckoutField::Name, FieldKey::Name),
        (&app.phone, CheckoutField::Phone, FieldKey::Phone),
    ];

    for (i, (input, field, key)) in inputs.into_iter().enumerate() {
        let error = app.view.error_for(key);
        input.render(frame, chunks[i * 2], app.focused == field, error);
        render_error(frame, error, chunks[i * 2 + 1]);
    }

    app.notes
        .render(frame, chunks[6], app.focused == CheckoutField::Notes);
}

fn render_error(frame: &mut Frame, error: Option<&str>, area: Rect) {
    if let Some(error) = error {
        let para = Paragraph::new(error).style(Style::default().fg(Color::Red));
        frame.render_widget(para, area);
    }
}

fn amount_line(label: &str, amount: String, amount_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<18}", label), Style::default().fg(Color::Gray)),
        Span::styled(amount, amount_style),
    ])
}

fn render_payment(frame: &mut Frame, app: &App, area: Rect) {
    let order = app.view.order();
    let breakdown = order.breakdown();
    let consent = app.view.consent();

    let mut lines = vec![
        amount_line("Subtotal", format_rupiah(breakdown.subtotal), Style::default()),
        amount_line(
            "Discount",
            format!("- {}", format_rupiah(breakdown.discount)),
            Style::default().fg(ACCENT),
        ),
        amount_line(
            "Convenience fee",
            format_rupiah(breakdown.convenience_fee),
            Style::default(),
        ),
        Line::from(Span::styled(
            "─".repeat(30),
            Style::default().fg(Color::DarkGray),
        )),
        amount_line(
            "TOTAL",
            format_rupiah(breakdown.total),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    if order.is_bonus_eligible() {
        lines.push(Line::from(Span::styled(
            "★ Bonus Spesial!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "  Anda berhak klaim semua bonus.",
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "PILIH METODE PEMBAYARAN",
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    )));
    let payment_focused = app.focused == CheckoutField::Payment;
    for method in PaymentMethod::all() {
        let selected = *method == app.view.payment_method();
        let marker = if selected { "(●)" } else { "( )" };
        let style = if selected {
            focus_style(payment_focused)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!("  {} {}", marker, method.label()),
            style,
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Pembayaran via WhatsApp",
        Style::default().fg(Color::Green),
    )));
    lines.push(Line::from(Span::styled(
        "Instruksi pembayaran akan diberikan melalui WhatsApp.",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    lines.push(checkbox_line(
        consent.agreed_to_terms,
        "I agree to the Terms of Use",
        app.focused == CheckoutField::Terms,
    ));
    if let Some(error) = app.view.error_for(FieldKey::Terms) {
        lines.push(Line::from(Span::styled(
            format!("    {}", error),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(checkbox_line(
        consent.agreed_to_marketing,
        "I agree that my email and phone number may be used to receive newsletters or marketing messages, which I can unsubscribe from at any time.",
        app.focused == CheckoutField::Marketing,
    ));
    lines.push(Line::from(""));

    let buy_focused = app.focused == CheckoutField::Buy;
    let buy_style = if buy_focused {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(
        format!("  Buy Now - {}  ", format_idr(order.total_price())),
        buy_style,
    )));

    let panel = Paragraph::new(lines)
        .block(section(" PAYMENT DETAILS "))
        .wrap(Wrap { trim: false });
    frame.render_widget(panel, area);
}

fn checkbox_line(checked: bool, label: &str, focused: bool) -> Line<'static> {
    let marker = if checked { "[x]" } else { "[ ]" };
    Line::from(vec![
        Span::styled(format!("{} ", marker), focus_style(focused)),
        Span::styled(
            label.to_string(),
            if focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            },
        ),
    ])
}
