//! TUI application state and logic

use tracing::{info, warn};

use wa_checkout::checkout::{BuyerField, CheckoutEvent, CheckoutView, FieldKey};
use wa_checkout::config::CheckoutConfig;
use wa_checkout::error::CheckoutError;
use wa_checkout::handoff::{self, HandoffOutcome, Launcher, WhatsAppLink};

use crate::tui::components::{TextArea, TextInput};
use crate::tui::state::{AppState, CheckoutField};

/// Main application state
pub struct App {
    /// Current screen
    pub state: AppState,

    /// Checkout state; the widgets below only hold cursors and mirror it
    pub view: CheckoutView,

    /// Where the order is sent
    pub link: WhatsAppLink,

    /// Focused form element
    pub focused: CheckoutField,

    pub email: TextInput,
    pub name: TextInput,
    pub phone: TextInput,
    pub notes: TextArea,

    /// Status message
    pub message: Option<String>,

    /// Set when the user asks to leave
    pub should_quit: bool,

    launcher: Box<dyn Launcher>,
}

impl App {
    pub fn new(config: CheckoutConfig, launcher: Box<dyn Launcher>) -> Self {
        let input = |field: BuyerField| {
            TextInput::new(field.label()).with_placeholder(field.placeholder())
        };

        Self {
            state: AppState::Checkout,
            view: CheckoutView::new(config.product),
            link: config.whatsapp,
            focused: CheckoutField::default(),
            email: input(BuyerField::Email),
            name: input(BuyerField::Name),
            phone: input(BuyerField::Phone),
            notes: TextArea::new(BuyerField::Notes.label())
                .with_placeholder(BuyerField::Notes.placeholder()),
            message: None,
            should_quit: false,
            launcher,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Single-line input behind a focus, if any
    pub fn input_mut(&mut self, field: CheckoutField) -> Option<&mut TextInput> {
        match field {
            CheckoutField::Email => Some(&mut self.email),
            CheckoutField::Name => Some(&mut self.name),
            CheckoutField::Phone => Some(&mut self.phone),
            _ => None,
        }
    }

    /// Push a widget's current text into the view
    pub fn sync_field(&mut self, field: CheckoutField) {
        let value = match field {
            CheckoutField::Email => self.email.value().to_string(),
            CheckoutField::Name => self.name.value().to_string(),
            CheckoutField::Phone => self.phone.value().to_string(),
            CheckoutField::Notes => self.notes.content(),
            _ => return,
        };
        if let Some(buyer_field) = field.buyer_field() {
            self.view
                .dispatch(CheckoutEvent::SetField(buyer_field, value));
        }
    }

    pub fn increase_quantity(&mut self) {
        self.view.dispatch(CheckoutEvent::IncreaseQuantity);
    }

    pub fn decrease_quantity(&mut self) {
        self.view.dispatch(CheckoutEvent::DecreaseQuantity);
    }

    pub fn next_payment(&mut self) {
        let method = self.view.payment_method().next();
        self.view.dispatch(CheckoutEvent::SelectPaymentMethod(method));
    }

    pub fn prev_payment(&mut self) {
        let method = self.view.payment_method().prev();
        self.view.dispatch(CheckoutEvent::SelectPaymentMethod(method));
    }

    pub fn toggle_terms(&mut self) {
        let agreed = !self.view.consent().agreed_to_terms;
        self.view.dispatch(CheckoutEvent::SetTermsAgreed(agreed));
    }

    pub fn toggle_marketing(&mut self) {
        let agreed = !self.view.consent().agreed_to_marketing;
        self.view.dispatch(CheckoutEvent::SetMarketingAgreed(agreed));
    }

    /// Validate and hand the order off to WhatsApp
    pub fn submit(&mut self) {
        match handoff::submit(&mut self.view, &self.link, self.launcher.as_ref()) {
            Ok(HandoffOutcome::Rejected(errors)) => {
                // Jump to the first field that needs fixing
                let first = [FieldKey::Email, FieldKey::Name, FieldKey::Phone, FieldKey::Terms]
                    .into_iter()
                    .find(|key| errors.contains(*key));
                if let Some(key) = first {
                    self.focused = CheckoutField::for_error(key);
                }
                self.set_message(&format!("Please fix {} field(s) before buying", errors.len()));
            }
            Ok(HandoffOutcome::Opened { url, .. }) => {
                info!("order handed off");
                self.state = AppState::Sent { url };
                self.set_message("WhatsApp opened - payment instructions will follow in the chat");
            }
            Err(e) => {
                self.set_message(&format!("Error: {}", e));
            }
        }
    }

    /// Show the composed message without validating
    pub fn preview(&mut self) {
        self.state = AppState::Preview {
            message: self.view.compose(),
        };
    }

    pub fn back_to_form(&mut self) {
        self.state = AppState::Checkout;
        self.clear_message();
    }

    /// Copy the handoff link to the system clipboard
    pub fn copy_link(&mut self) {
        let AppState::Sent { url } = &self.state else {
            return;
        };
        let copied = arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(url.clone()))
            .map_err(|e| CheckoutError::Clipboard(e.to_string()));

        match copied {
            Ok(()) => self.set_message("Link copied to clipboard"),
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                self.set_message(&format!("Error: {}", e));
            }
        }
    }

    /// Set status message
    pub fn set_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
