//! Line amount computation.

use rust_decimal::Decimal;

use super::error::PricingError;
use super::types::{Discount, DiscountKind, LineAmounts, LineInput, TaxRates};

/// Resolves a discount against a gross amount.
///
/// Percentage discounts are taken from the gross amount; absolute discounts
/// are returned as-is.
///
/// # Errors
///
/// Returns an error if the value is negative or a percentage exceeds 100.
pub fn discount_amount(gross: Decimal, discount: Discount) -> Result<Decimal, PricingError> {
    if discount.value < Decimal::ZERO {
        return Err(PricingError::NegativeDiscount(discount.value));
    }

    match discount.kind {
        DiscountKind::Percentage => {
            if discount.value > Decimal::ONE_HUNDRED {
                return Err(PricingError::PercentageOutOfRange(discount.value));
            }
            Ok(gross * discount.value / Decimal::ONE_HUNDRED)
        }
        DiscountKind::Amount => Ok(discount.value),
    }
}

fn validate_tax_rates(tax: TaxRates) -> Result<(), PricingError> {
    for rate in [tax.cgst, tax.sgst, tax.igst] {
        if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
            return Err(PricingError::TaxRateOutOfRange(rate));
        }
    }
    Ok(())
}

/// Computes all derived amounts for one line.
///
/// `taxable = gross - discount`, each tax is `taxable * rate / 100`, and
/// `total = taxable + cgst + sgst + igst`. When the line is ordered by box
/// the gross amount is `box_count * box_rate` directly; the unit quantity
/// is informational.
///
/// Deterministic and side-effect free, so it can be re-run on every edit.
///
/// # Errors
///
/// Returns an error for non-positive quantity, negative rate, out-of-range
/// discount or tax rates, or a discount exceeding the gross amount.
pub fn compute_line(input: &LineInput) -> Result<LineAmounts, PricingError> {
    let (quantity, gross_amount) = match input.box_packaging {
        Some(ref packaging) => (
            packaging.unit_quantity(),
            Decimal::from(packaging.box_count) * packaging.box_rate,
        ),
        None => (input.quantity, input.quantity * input.rate),
    };

    if quantity <= Decimal::ZERO {
        return Err(PricingError::NonPositiveQuantity(quantity));
    }
    if input.rate < Decimal::ZERO {
        return Err(PricingError::NegativeRate(input.rate));
    }
    validate_tax_rates(input.tax)?;

    let discount = discount_amount(gross_amount, input.discount)?;
    let taxable_amount = gross_amount - discount;
    if taxable_amount < Decimal::ZERO {
        return Err(PricingError::NegativeTaxableAmount { gross: gross_amount, discount });
    }

    let cgst = taxable_amount * input.tax.cgst / Decimal::ONE_HUNDRED;
    let sgst = taxable_amount * input.tax.sgst / Decimal::ONE_HUNDRED;
    let igst = taxable_amount * input.tax.igst / Decimal::ONE_HUNDRED;

    Ok(LineAmounts {
        gross_amount,
        discount_amount: discount,
        taxable_amount,
        cgst,
        sgst,
        igst,
        total_amount: taxable_amount + cgst + sgst + igst,
    })
}
