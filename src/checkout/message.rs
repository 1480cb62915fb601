//! Composes the pre-filled WhatsApp order message

use once_cell::sync::Lazy;
use regex::Regex;

use super::buyer::BuyerInfo;
use super::currency::format_rupiah;
use super::order::{OrderState, PaymentMethod};
use super::product::Product;

pub const GREETING: &str = "Halo, saya tertarik untuk membeli produk digital Anda.";
pub const CLOSING: &str = "Mohon berikan instruksi pembayaran selanjutnya. Terima kasih.";
pub const BONUS_CLAIM: &str = "*Catatan Tambahan:* Saya berhak mengklaim semua bonus.";
pub const NOTES_PREFIX: &str = "- Catatan Tambahan: ";

/// A newline, any whitespace, then another newline
static BLANK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank-line pattern compiles"));

/// Everything the composer reads. Borrowed from the view at submit time.
#[derive(Debug, Clone, Copy)]
pub struct MessageInput<'a> {
    pub product: &'a Product,
    pub order: &'a OrderState,
    pub buyer: &'a BuyerInfo,
    pub notes: &'a str,
    pub payment_method: PaymentMethod,
}

/// Build the order summary sent as the chat message.
///
/// Sections are separated by exactly one blank line. Blank-line runs coming
/// from user text are collapsed the same way, and the result is trimmed.
pub fn compose_message(input: MessageInput<'_>) -> String {
    let bonus = if input.order.is_bonus_eligible() {
        format!("\n{}", BONUS_CLAIM)
    } else {
        String::new()
    };

    let notes = if input.notes.is_empty() {
        String::new()
    } else {
        format!("\n{}{}", NOTES_PREFIX, input.notes)
    };

    let order_block = format!(
        "*Detail Pesanan:*\n- Produk: {}\n- Jumlah: {}\n- Total Harga: {}\n- Metode Pembayaran: {}{}",
        input.product.name,
        input.order.quantity(),
        format_rupiah(input.order.total_price()),
        input.payment_method.label(),
        bonus
    );

    let buyer_block = format!(
        "*Data Pemesan:*\n- Nama: {}\n- Email: {}\n- No. Telepon: {}{}",
        input.buyer.name, input.buyer.email, input.buyer.phone, notes
    );

    let raw = [GREETING, &order_block, &buyer_block, CLOSING].join("\n\n");
    collapse_blank_lines(raw.trim())
}

/// Replace every run of blank lines with a single blank line
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").into_owned()
}
