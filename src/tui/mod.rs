//! Terminal UI for the checkout
//!
//! Renders the checkout page in the terminal:
//! - Product card with a quantity stepper
//! - Buyer form (email, name, phone, notes) with inline validation errors
//! - Payment details, payment method choice and consent checkboxes
//! - Handoff to WhatsApp, with a QR code of the link as a fallback

pub mod app;
pub mod components;
pub mod screens;
pub mod state;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use tracing::info;

use wa_checkout::checkout::format_rupiah;
use wa_checkout::config::CheckoutConfig;
use wa_checkout::handoff::Launcher;

use app::App;
use state::{AppState, CheckoutField};

/// Run the terminal UI
pub fn run_tui(config: CheckoutConfig, launcher: Box<dyn Launcher>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(product = %config.product.name, "starting checkout tui");
    let mut app = App::new(config, launcher);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            Event::Paste(text) => handle_paste(app, &text),
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global quit
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.state {
        AppState::Checkout => handle_checkout_keys(app, key),
        AppState::Preview { .. } => handle_preview_keys(app, key.code),
        AppState::Sent { .. } => handle_sent_keys(app, key.code),
    }
}

fn handle_paste(app: &mut App, text: &str) {
    if app.state != AppState::Checkout {
        return;
    }
    let field = app.focused;
    if field == CheckoutField::Notes {
        app.notes.handle_paste(text);
    } else if let Some(input) = app.input_mut(field) {
        input.handle_paste(text);
    } else {
        return;
    }
    app.sync_field(field);
}

fn handle_checkout_keys(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('s') if ctrl => {
            app.submit();
            return;
        }
        KeyCode::Char('p') if ctrl => {
            app.preview();
            return;
        }
        KeyCode::Tab => {
            app.next_field();
            return;
        }
        KeyCode::BackTab => {
            app.prev_field();
            return;
        }
        _ => {}
    }

    // Any other key clears a stale status line
    app.clear_message();

    let field = app.focused;
    match field {
        CheckoutField::Email | CheckoutField::Name | CheckoutField::Phone => match key.code {
            KeyCode::Down | KeyCode::Enter => app.next_field(),
            KeyCode::Up => app.prev_field(),
            _ => {
                let changed = app
                    .input_mut(field)
                    .map(|input| input.handle_key(key))
                    .unwrap_or(false);
                if changed {
                    app.sync_field(field);
                }
            }
        },
        CheckoutField::Notes => match key.code {
            KeyCode::Up if app.notes.cursor_line() == 0 => app.prev_field(),
            KeyCode::Down if app.notes.cursor_line() + 1 >= app.notes.line_count() => {
                app.next_field()
            }
            _ => {
                if app.notes.handle_key(key) {
                    app.sync_field(field);
                }
            }
        },
        CheckoutField::Quantity => match key.code {
            KeyCode::Left | KeyCode::Char('-') => app.decrease_quantity(),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => app.increase_quantity(),
            KeyCode::Down | KeyCode::Enter => app.next_field(),
            KeyCode::Up => app.prev_field(),
            _ => {}
        },
        CheckoutField::Payment => match key.code {
            KeyCode::Left => app.prev_payment(),
            KeyCode::Right | KeyCode::Char(' ') => app.next_payment(),
            KeyCode::Down | KeyCode::Enter => app.next_field(),
            KeyCode::Up => app.prev_field(),
            _ => {}
        },
        CheckoutField::Terms => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => app.toggle_terms(),
            KeyCode::Down => app.next_field(),
            KeyCode::Up => app.prev_field(),
            _ => {}
        },
        CheckoutField::Marketing => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => app.toggle_marketing(),
            KeyCode::Down => app.next_field(),
            KeyCode::Up => app.prev_field(),
            _ => {}
        },
        CheckoutField::Buy => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => app.submit(),
            KeyCode::Down => app.next_field(),
            KeyCode::Up => app.prev_field(),
            _ => {}
        },
    }
}

fn handle_preview_keys(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.back_to_form(),
        _ => {}
    }
}

fn handle_sent_keys(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('c') => app.copy_link(),
        KeyCode::Esc | KeyCode::Enter => app.back_to_form(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Help bar
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);

    match &app.state {
        AppState::Checkout => screens::render_checkout(frame, app, chunks[1]),
        AppState::Preview { message } => screens::render_preview(frame, message, chunks[1]),
        AppState::Sent { url } => screens::render_sent(frame, url, chunks[1]),
    }

    render_help_bar(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let order = app.view.order();
    let title = Line::from(vec![
        Span::styled(
            "Checkout",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("[", Style::default().fg(Color::Gray)),
        Span::styled(
            format!(
                "{} x{} = {}",
                app.view.product().name,
                order.quantity(),
                format_rupiah(order.total_price())
            ),
            Style::default().fg(Color::White),
        ),
        Span::styled("]", Style::default().fg(Color::Gray)),
    ]);

    let paragraph = Paragraph::new(title).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if let Some(msg) = &app.message {
        msg.clone()
    } else {
        match &app.state {
            AppState::Checkout => match app.focused {
                CheckoutField::Quantity => "←/→:Quantity | Tab:Next | Ctrl+S:Buy | Ctrl+P:Preview | Esc:Quit",
                CheckoutField::Payment => "←/→:Method | Tab:Next | Ctrl+S:Buy | Ctrl+P:Preview | Esc:Quit",
                CheckoutField::Terms | CheckoutField::Marketing => {
                    "Space:Toggle | Tab:Next | Ctrl+S:Buy | Ctrl+P:Preview | Esc:Quit"
                }
                CheckoutField::Buy => "Enter:Buy Now | Tab:Next | Ctrl+P:Preview | Esc:Quit",
                _ => "Tab:Next | Shift+Tab:Prev | Ctrl+S:Buy | Ctrl+P:Preview | Esc:Quit",
            }
            .to_string(),
            AppState::Preview { .. } => "Esc:Back to form".to_string(),
            AppState::Sent { .. } => "c:Copy link | Esc:Back to form | q:Quit".to_string(),
        }
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Help"));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wa_checkout::checkout::{FieldKey, PaymentMethod};
    use wa_checkout::error::CheckoutError;
    use wa_checkout::handoff::message_from_url;

    #[derive(Clone, Default)]
    struct RecordingLauncher {
        opened: Rc<RefCell<Vec<String>>>,
    }

    impl Launcher for RecordingLauncher {
        fn open(&self, url: &str) -> Result<(), CheckoutError> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn test_app() -> (App, Rc<RefCell<Vec<String>>>) {
        let launcher = RecordingLauncher::default();
        let opened = launcher.opened.clone();
        (App::new(CheckoutConfig::default(), Box::new(launcher)), opened)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill_valid_form(app: &mut App) {
        type_text(app, "budi@example.com");
        press(app, KeyCode::Tab);
        type_text(app, "Budi");
        press(app, KeyCode::Tab);
        type_text(app, "08123456789");
        app.focused = CheckoutField::Terms;
        press(app, KeyCode::Char(' '));
    }

    #[test]
    fn test_typing_updates_view() {
        let (mut app, _) = test_app();
        type_text(&mut app, "a@b.c");
        assert_eq!(app.view.buyer().email, "a@b.c");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.view.buyer().email, "a@b.");
    }

    #[test]
    fn test_quantity_keys() {
        let (mut app, _) = test_app();
        app.focused = CheckoutField::Quantity;
        press(&mut app, KeyCode::Left);
        assert_eq!(app.view.order().quantity(), 1);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.view.order().quantity(), 3);
        assert!(app.view.order().is_bonus_eligible());
        assert_eq!(app.view.order().total_price(), 15000);
    }

    #[test]
    fn test_payment_keys_keep_one_selected() {
        let (mut app, _) = test_app();
        app.focused = CheckoutField::Payment;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.view.payment_method(), PaymentMethod::ShopeePay);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.view.payment_method(), PaymentMethod::Qris);
    }

    #[test]
    fn test_notes_accept_newlines() {
        let (mut app, _) = test_app();
        app.focused = CheckoutField::Notes;
        type_text(&mut app, "satu");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "dua");
        assert_eq!(app.view.notes(), "satu\ndua");
        assert_eq!(app.focused, CheckoutField::Notes);
    }

    #[test]
    fn test_paste_into_focused_input() {
        let (mut app, _) = test_app();
        app.focused = CheckoutField::Phone;
        handle_paste(&mut app, "0812\n3456");
        assert_eq!(app.view.buyer().phone, "08123456");
    }

    #[test]
    fn test_rejected_submit_focuses_first_error() {
        let (mut app, opened) = test_app();
        type_text(&mut app, "budi@example.com");
        app.focused = CheckoutField::Buy;
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::Checkout);
        assert_eq!(app.focused, CheckoutField::Name);
        assert!(app.view.error_for(FieldKey::Email).is_none());
        assert!(app.view.error_for(FieldKey::Terms).is_some());
        assert!(opened.borrow().is_empty());
        assert!(app.message.as_deref().unwrap_or("").contains("3 field(s)"));
    }

    #[test]
    fn test_successful_submit_opens_link() {
        let (mut app, opened) = test_app();
        fill_valid_form(&mut app);
        app.focused = CheckoutField::Quantity;
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);

        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        );

        let opened = opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("https://wa.me/6283173441172?text="));
        let message = message_from_url(&opened[0]).unwrap();
        assert!(message.contains("Jumlah: 3"));
        assert_eq!(
            app.state,
            AppState::Sent {
                url: opened[0].clone()
            }
        );
    }

    #[test]
    fn test_preview_and_back() {
        let (mut app, opened) = test_app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL),
        );
        match &app.state {
            AppState::Preview { message } => assert!(message.starts_with("Halo")),
            other => panic!("expected preview, got {:?}", other),
        }
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::Checkout);
        assert!(!app.should_quit);
        assert!(opened.borrow().is_empty());
    }

    #[test]
    fn test_escape_quits_from_form() {
        let (mut app, _) = test_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_does_not_panic() {
        use ratatui::backend::TestBackend;

        let (mut app, _) = test_app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        app.view
            .dispatch(wa_checkout::checkout::CheckoutEvent::Submit);
        terminal.draw(|f| ui(f, &app)).unwrap();

        app.state = AppState::Sent {
            url: "https://wa.me/6283173441172?text=Halo".to_string(),
        };
        terminal.draw(|f| ui(f, &app)).unwrap();
    }
}
