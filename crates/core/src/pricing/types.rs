//! Pricing input and output types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Discount is a percentage of the gross amount (0-100).
    Percentage,
    /// Discount is an absolute currency amount.
    Amount,
}

/// A discount applied to a line or to an invoice subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    /// Interpretation of `value`.
    pub kind: DiscountKind,
    /// Discount value; percentage (0-100) or currency amount.
    pub value: Decimal,
}

impl Discount {
    /// Creates a percentage discount.
    #[must_use]
    pub const fn percentage(value: Decimal) -> Self {
        Self { kind: DiscountKind::Percentage, value }
    }

    /// Creates an absolute-amount discount.
    #[must_use]
    pub const fn amount(value: Decimal) -> Self {
        Self { kind: DiscountKind::Amount, value }
    }

    /// A zero discount.
    #[must_use]
    pub const fn none() -> Self {
        Self { kind: DiscountKind::Amount, value: Decimal::ZERO }
    }
}

/// GST rates applied to a line, each 0-100 percent.
///
/// The scheme is flat: rates are supplied per line, there is no tax-rule
/// engine. Intra-state sales carry CGST+SGST, inter-state sales IGST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRates {
    /// Central GST rate.
    pub cgst: Decimal,
    /// State GST rate.
    pub sgst: Decimal,
    /// Integrated GST rate.
    pub igst: Decimal,
}

impl TaxRates {
    /// Creates a set of tax rates.
    #[must_use]
    pub const fn new(cgst: Decimal, sgst: Decimal, igst: Decimal) -> Self {
        Self { cgst, sgst, igst }
    }

    /// Tax-free rates.
    #[must_use]
    pub const fn zero() -> Self {
        Self { cgst: Decimal::ZERO, sgst: Decimal::ZERO, igst: Decimal::ZERO }
    }
}

/// Box-based ordering details.
///
/// When present, the line is priced by box: the gross amount is
/// `box_count * box_rate` and the unit quantity is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxPackaging {
    /// Number of boxes ordered.
    pub box_count: u32,
    /// Price per box.
    pub box_rate: Decimal,
    /// Units contained in one box.
    pub units_per_box: u32,
}

impl BoxPackaging {
    /// Total unit quantity represented by the boxes.
    #[must_use]
    pub fn unit_quantity(&self) -> Decimal {
        Decimal::from(self.box_count) * Decimal::from(self.units_per_box)
    }
}

/// Raw inputs for a single line computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineInput {
    /// Quantity sold or received; must be positive.
    pub quantity: Decimal,
    /// Unit rate; must be non-negative.
    pub rate: Decimal,
    /// Line-level discount.
    pub discount: Discount,
    /// GST rates for the line.
    pub tax: TaxRates,
    /// Box-based ordering, if the line was ordered by box.
    pub box_packaging: Option<BoxPackaging>,
}

/// Derived amounts for a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAmounts {
    /// Amount before discount.
    pub gross_amount: Decimal,
    /// Resolved discount amount.
    pub discount_amount: Decimal,
    /// Gross amount less discount; the tax base.
    pub taxable_amount: Decimal,
    /// Central GST amount.
    pub cgst: Decimal,
    /// State GST amount.
    pub sgst: Decimal,
    /// Integrated GST amount.
    pub igst: Decimal,
    /// Taxable amount plus all taxes.
    pub total_amount: Decimal,
}
