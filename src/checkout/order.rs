//! Order state: quantity, payment method and the derived totals

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Quantity at which the buyer may claim every bonus
pub const BONUS_THRESHOLD: u32 = 3;

/// Payment methods offered on the page. Payment itself is arranged over WhatsApp.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "DANA", alias = "dana")]
    #[value(name = "dana")]
    Dana,
    #[serde(rename = "ShopeePay", alias = "shopeepay")]
    #[value(name = "shopeepay")]
    ShopeePay,
    #[serde(rename = "QRIS", alias = "qris")]
    #[value(name = "qris")]
    Qris,
}

impl PaymentMethod {
    pub fn all() -> &'static [PaymentMethod] {
        &[PaymentMethod::Dana, PaymentMethod::ShopeePay, PaymentMethod::Qris]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Dana => "DANA",
            PaymentMethod::ShopeePay => "ShopeePay",
            PaymentMethod::Qris => "QRIS",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Dana => Self::ShopeePay,
            Self::ShopeePay => Self::Qris,
            Self::Qris => Self::Dana,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Dana => Self::Qris,
            Self::ShopeePay => Self::Dana,
            Self::Qris => Self::ShopeePay,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Quantity and unit price. The total is always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderState {
    quantity: u32,
    unit_price: u64,
}

impl OrderState {
    pub fn new(unit_price: u64) -> Self {
        Self {
            quantity: 1,
            unit_price,
        }
    }

    pub fn for_product(product: &Product) -> Self {
        Self::new(product.unit_price)
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// No upper bound; saturates instead of overflowing
    pub fn increase(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Never goes below 1
    pub fn decrease(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    pub fn total_price(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }

    pub fn is_bonus_eligible(&self) -> bool {
        self.quantity >= BONUS_THRESHOLD
    }

    pub fn breakdown(&self) -> PaymentBreakdown {
        PaymentBreakdown::from_total(self.total_price())
    }
}

/// Lines of the "Payment Details" panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentBreakdown {
    pub subtotal: u64,
    pub discount: u64,
    pub convenience_fee: u64,
    pub total: u64,
}

impl PaymentBreakdown {
    /// Discounts and fees are not offered, so subtotal and total coincide
    pub fn from_total(total: u64) -> Self {
        Self {
            subtotal: total,
            discount: 0,
            convenience_fee: 0,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrease_floor() {
        let mut order = OrderState::new(5000);
        order.decrease();
        assert_eq!(order.quantity(), 1);

        order.increase();
        order.increase();
        order.decrease();
        order.decrease();
        order.decrease();
        assert_eq!(order.quantity(), 1);
    }

    #[test]
    fn test_total_tracks_quantity() {
        let mut order = OrderState::new(5000);
        for q in 1..=50u64 {
            assert_eq!(order.total_price(), 5000 * q);
            order.increase();
        }
    }

    #[test]
    fn test_bonus_eligibility() {
        let mut order = OrderState::new(5000);
        assert!(!order.is_bonus_eligible());
        order.increase();
        assert!(!order.is_bonus_eligible());
        order.increase();
        assert!(order.is_bonus_eligible());
        order.decrease();
        assert!(!order.is_bonus_eligible());
    }

    #[test]
    fn test_payment_method_cycle() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Dana);
        for method in PaymentMethod::all() {
            assert_eq!(method.next().prev(), *method);
        }
        assert_eq!(PaymentMethod::Qris.next(), PaymentMethod::Dana);
    }

    #[test]
    fn test_payment_method_serde_labels() {
        let json = serde_json::to_string(&PaymentMethod::ShopeePay).unwrap();
        assert_eq!(json, "\"ShopeePay\"");
        let parsed: PaymentMethod = serde_json::from_str("\"qris\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Qris);
    }

    #[test]
    fn test_breakdown() {
        let mut order = OrderState::new(5000);
        order.increase();
        let breakdown = order.breakdown();
        assert_eq!(breakdown.subtotal, 10000);
        assert_eq!(breakdown.discount, 0);
        assert_eq!(breakdown.convenience_fee, 0);
        assert_eq!(breakdown.total, 10000);
    }
}
