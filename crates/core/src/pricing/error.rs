//! Pricing validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while computing line amounts.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Quantity must be positive.
    #[error("Quantity must be positive, got {0}")]
    NonPositiveQuantity(Decimal),

    /// Rate cannot be negative.
    #[error("Rate cannot be negative, got {0}")]
    NegativeRate(Decimal),

    /// Discount value cannot be negative.
    #[error("Discount cannot be negative, got {0}")]
    NegativeDiscount(Decimal),

    /// Percentage discount must be between 0 and 100.
    #[error("Percentage discount must be between 0 and 100, got {0}")]
    PercentageOutOfRange(Decimal),

    /// Tax rate must be between 0 and 100.
    #[error("Tax rate must be between 0 and 100, got {0}")]
    TaxRateOutOfRange(Decimal),

    /// Discount exceeds the gross amount.
    ///
    /// A negative taxable amount is a data error to surface, never a value
    /// to clamp silently.
    #[error("Discount {discount} exceeds gross amount {gross}")]
    NegativeTaxableAmount {
        /// Gross amount before discount.
        gross: Decimal,
        /// Resolved discount amount.
        discount: Decimal,
    },
}

impl PricingError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveQuantity(_) => "NON_POSITIVE_QUANTITY",
            Self::NegativeRate(_) => "NEGATIVE_RATE",
            Self::NegativeDiscount(_) => "NEGATIVE_DISCOUNT",
            Self::PercentageOutOfRange(_) => "PERCENTAGE_OUT_OF_RANGE",
            Self::TaxRateOutOfRange(_) => "TAX_RATE_OUT_OF_RANGE",
            Self::NegativeTaxableAmount { .. } => "NEGATIVE_TAXABLE_AMOUNT",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::NonPositiveQuantity(_)
            | Self::NegativeRate(_)
            | Self::NegativeDiscount(_)
            | Self::PercentageOutOfRange(_)
            | Self::TaxRateOutOfRange(_) => 400,
            Self::NegativeTaxableAmount { .. } => 422,
        }
    }
}
