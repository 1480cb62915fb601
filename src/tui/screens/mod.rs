//! TUI screens

mod checkout;
mod preview;
mod sent;

pub use checkout::render_checkout;
pub use preview::render_preview;
pub use sent::render_sent;
