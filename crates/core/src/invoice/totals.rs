//! Invoice totals aggregation.

use kirana_shared::types::round_to_rupee;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::LineItem;
use crate::pricing::{discount_amount, Discount, PricingError};

/// Aggregated totals for an invoice draft.
///
/// The subtotal is the sum of per-line *taxable* amounts (per-line
/// discounts are already reflected). The overall discount reduces that
/// base once; per-line tax totals are summed as computed and are NOT
/// rescaled by the overall discount. Consumers needing a discount-adjusted
/// tax view use [`InvoiceTotals::discount_adjusted_tax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of per-line taxable amounts.
    pub subtotal: Decimal,
    /// Overall discount resolved against the subtotal.
    pub overall_discount_amount: Decimal,
    /// Subtotal less the overall discount.
    pub total_after_discount: Decimal,
    /// Sum of per-line CGST amounts.
    pub cgst_total: Decimal,
    /// Sum of per-line SGST amounts.
    pub sgst_total: Decimal,
    /// Sum of per-line IGST amounts.
    pub igst_total: Decimal,
    /// Total after discount plus all tax totals.
    pub grand_total: Decimal,
    /// Grand total rounded to the nearest whole rupee; the payable figure.
    pub final_amount: Decimal,
    /// `final_amount - grand_total`; may be negative.
    pub round_off: Decimal,
}

/// Tax totals proportionally scaled by the overall discount.
///
/// A distinct derived quantity for consumers (e.g. quick invoice) that
/// present a discount-adjusted tax breakup. This never replaces the
/// unscaled totals used in the grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountAdjustedTax {
    /// Scaled CGST total.
    pub cgst: Decimal,
    /// Scaled SGST total.
    pub sgst: Decimal,
    /// Scaled IGST total.
    pub igst: Decimal,
}

impl InvoiceTotals {
    /// Aggregates line amounts and applies the overall discount.
    ///
    /// Pure function of its inputs; recomputing on an unchanged line set
    /// yields identical totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the overall discount is out of range or exceeds
    /// the subtotal.
    pub fn compute(lines: &[LineItem], overall_discount: Discount) -> Result<Self, PricingError> {
        let mut subtotal = Decimal::ZERO;
        let mut cgst_total = Decimal::ZERO;
        let mut sgst_total = Decimal::ZERO;
        let mut igst_total = Decimal::ZERO;

        for line in lines {
            subtotal += line.amounts.taxable_amount;
            cgst_total += line.amounts.cgst;
            sgst_total += line.amounts.sgst;
            igst_total += line.amounts.igst;
        }

        let overall_discount_amount = discount_amount(subtotal, overall_discount)?;
        let total_after_discount = subtotal - overall_discount_amount;
        if total_after_discount < Decimal::ZERO {
            return Err(PricingError::NegativeTaxableAmount {
                gross: subtotal,
                discount: overall_discount_amount,
            });
        }

        let grand_total = total_after_discount + cgst_total + sgst_total + igst_total;
        let final_amount = round_to_rupee(grand_total);

        Ok(Self {
            subtotal,
            overall_discount_amount,
            total_after_discount,
            cgst_total,
            sgst_total,
            igst_total,
            grand_total,
            final_amount,
            round_off: final_amount - grand_total,
        })
    }

    /// Tax totals scaled by the ratio the overall discount applied to the
    /// taxable base.
    ///
    /// With no subtotal (empty invoice) the scaled totals are zero.
    #[must_use]
    pub fn discount_adjusted_tax(&self) -> DiscountAdjustedTax {
        if self.subtotal.is_zero() {
            return DiscountAdjustedTax {
                cgst: Decimal::ZERO,
                sgst: Decimal::ZERO,
                igst: Decimal::ZERO,
            };
        }
        let ratio = self.total_after_discount / self.subtotal;
        DiscountAdjustedTax {
            cgst: self.cgst_total * ratio,
            sgst: self.sgst_total * ratio,
            igst: self.igst_total * ratio,
        }
    }
}
