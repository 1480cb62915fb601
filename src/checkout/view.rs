//! The checkout view state and its reducer
//!
//! All state lives in one [`CheckoutView`], created with fixed defaults and
//! changed only through [`CheckoutView::dispatch`].

use serde::Deserialize;
use tracing::{debug, warn};

use super::buyer::{BuyerField, BuyerInfo, ConsentFlags};
use super::message::{compose_message, MessageInput};
use super::order::{OrderState, PaymentMethod};
use super::product::Product;
use super::validation::{validate, FieldKey, ValidationErrors};

/// User input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutEvent {
    IncreaseQuantity,
    DecreaseQuantity,
    SetField(BuyerField, String),
    SelectPaymentMethod(PaymentMethod),
    SetTermsAgreed(bool),
    SetMarketingAgreed(bool),
    Submit,
}

/// What the caller must do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Submit was rejected; errors are stored on the view for display
    Rejected,
    /// Form is valid; the composed message is ready to hand off
    Handoff { message: String },
}

/// Observable display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Editing,
    ValidationFailed,
}

#[derive(Debug, Clone)]
pub struct CheckoutView {
    product: Product,
    order: OrderState,
    buyer: BuyerInfo,
    notes: String,
    payment_method: PaymentMethod,
    consent: ConsentFlags,
    errors: ValidationErrors,
    has_attempted_submit: bool,
}

impl CheckoutView {
    pub fn new(product: Product) -> Self {
        let order = OrderState::for_product(&product);
        Self {
            product,
            order,
            buyer: BuyerInfo::default(),
            notes: String::new(),
            payment_method: PaymentMethod::default(),
            consent: ConsentFlags::default(),
            errors: ValidationErrors::new(),
            has_attempted_submit: false,
        }
    }

    /// Rebuild a view from a snapshot by replaying it as input events
    pub fn from_request(product: Product, request: &CheckoutRequest) -> Self {
        let mut view = Self::new(product);
        for _ in 1..request.quantity {
            view.dispatch(CheckoutEvent::IncreaseQuantity);
        }
        view.dispatch(CheckoutEvent::SetField(BuyerField::Email, request.email.clone()));
        view.dispatch(CheckoutEvent::SetField(BuyerField::Name, request.name.clone()));
        view.dispatch(CheckoutEvent::SetField(BuyerField::Phone, request.phone.clone()));
        view.dispatch(CheckoutEvent::SetField(BuyerField::Notes, request.notes.clone()));
        view.dispatch(CheckoutEvent::SelectPaymentMethod(request.payment_method));
        view.dispatch(CheckoutEvent::SetTermsAgreed(request.agreed_to_terms));
        view.dispatch(CheckoutEvent::SetMarketingAgreed(request.agreed_to_marketing));
        view
    }

    pub fn dispatch(&mut self, event: CheckoutEvent) -> Effect {
        debug!(?event, "checkout event");
        match event {
            CheckoutEvent::IncreaseQuantity => {
                self.order.increase();
                self.has_attempted_submit = false;
            }
            CheckoutEvent::DecreaseQuantity => {
                self.order.decrease();
                self.has_attempted_submit = false;
            }
            CheckoutEvent::SetField(field, value) => {
                match field {
                    BuyerField::Email => self.buyer.email = value,
                    BuyerField::Name => self.buyer.name = value,
                    BuyerField::Phone => self.buyer.phone = value,
                    BuyerField::Notes => self.notes = value,
                }
                self.has_attempted_submit = false;
            }
            CheckoutEvent::SelectPaymentMethod(method) => {
                self.payment_method = method;
                self.has_attempted_submit = false;
            }
            CheckoutEvent::SetTermsAgreed(agreed) => {
                self.consent.agreed_to_terms = agreed;
                self.has_attempted_submit = false;
            }
            CheckoutEvent::SetMarketingAgreed(agreed) => {
                self.consent.agreed_to_marketing = agreed;
                self.has_attempted_submit = false;
            }
            CheckoutEvent::Submit => return self.submit(),
        }
        Effect::None
    }

    fn submit(&mut self) -> Effect {
        self.errors = validate(&self.buyer, &self.consent);
        self.has_attempted_submit = true;

        if !self.errors.is_empty() {
            warn!(errors = %self.errors, "checkout rejected");
            return Effect::Rejected;
        }

        Effect::Handoff {
            message: self.compose(),
        }
    }

    /// Compose the order message for the current state without validating
    pub fn compose(&self) -> String {
        compose_message(MessageInput {
            product: &self.product,
            order: &self.order,
            buyer: &self.buyer,
            notes: &self.notes,
            payment_method: self.payment_method,
        })
    }

    pub fn mode(&self) -> ViewMode {
        if self.has_attempted_submit && !self.errors.is_empty() {
            ViewMode::ValidationFailed
        } else {
            ViewMode::Editing
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn order(&self) -> &OrderState {
        &self.order
    }

    pub fn buyer(&self) -> &BuyerInfo {
        &self.buyer
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn consent(&self) -> &ConsentFlags {
        &self.consent
    }

    /// Errors from the last submit attempt
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, key: FieldKey) -> Option<&str> {
        self.errors.get(key)
    }

    pub fn has_attempted_submit(&self) -> bool {
        self.has_attempted_submit
    }
}

impl Default for CheckoutView {
    fn default() -> Self {
        Self::new(Product::default())
    }
}

/// Snapshot of every editable value, as accepted by the CLI and wasm surfaces
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckoutRequest {
    pub quantity: u32,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub notes: String,
    pub payment_method: PaymentMethod,
    pub agreed_to_terms: bool,
    pub agreed_to_marketing: bool,
}

impl Default for CheckoutRequest {
    fn default() -> Self {
        Self {
            quantity: 1,
            email: String::new(),
            name: String::new(),
            phone: String::new(),
            notes: String::new(),
            payment_method: PaymentMethod::default(),
            agreed_to_terms: false,
            agreed_to_marketing: false,
        }
    }
}
