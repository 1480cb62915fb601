//! Checkout core: order state, buyer form, validation and message composition
//!
//! Everything here is pure and synchronous. The only side effect of the flow,
//! opening the WhatsApp link, lives in [`crate::handoff`].

pub mod buyer;
pub mod currency;
pub mod message;
pub mod order;
pub mod product;
pub mod validation;
pub mod view;

pub use buyer::{BuyerField, BuyerInfo, ConsentFlags};
pub use currency::{format_idr, format_rupiah, group_thousands};
pub use message::{compose_message, MessageInput};
pub use order::{OrderState, PaymentBreakdown, PaymentMethod, BONUS_THRESHOLD};
pub use product::Product;
pub use validation::{validate, FieldKey, ValidationErrors};
pub use view::{CheckoutEvent, CheckoutRequest, CheckoutView, Effect, ViewMode};
