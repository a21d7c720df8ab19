//! Invoice line item type.

use kirana_shared::types::ItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lots::LotIdentity;
use crate::pricing::{
    compute_line, BoxPackaging, Discount, LineAmounts, LineInput, PricingError, TaxRates,
};

/// A single line of an invoice draft.
///
/// Raw inputs (quantity, rate, discount, tax rates) live beside their
/// derived amounts; [`LineItem::recompute`] re-derives the amounts whenever
/// an input changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item sold on this line.
    pub item_id: ItemId,
    /// Display name of the item.
    pub item_name: String,
    /// Unit of measure (e.g. "pcs", "kg").
    pub unit: String,
    /// Quantity sold; positive.
    pub quantity: Decimal,
    /// Unit rate; non-negative.
    pub rate: Decimal,
    /// Line-level discount.
    pub discount: Discount,
    /// GST rates for the line.
    pub tax: TaxRates,
    /// Derived amounts, kept in sync by [`LineItem::recompute`].
    pub amounts: LineAmounts,
    /// Batch/serial identity, for lot-tracked items.
    pub lot: Option<LotIdentity>,
    /// Box-based ordering details, if ordered by box.
    pub box_packaging: Option<BoxPackaging>,
}

impl LineItem {
    /// Creates a line item, computing its derived amounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs fail pricing validation.
    pub fn new(
        item_id: ItemId,
        item_name: impl Into<String>,
        unit: impl Into<String>,
        quantity: Decimal,
        rate: Decimal,
        discount: Discount,
        tax: TaxRates,
    ) -> Result<Self, PricingError> {
        let mut line = Self {
            item_id,
            item_name: item_name.into(),
            unit: unit.into(),
            quantity,
            rate,
            discount,
            tax,
            amounts: LineAmounts {
                gross_amount: Decimal::ZERO,
                discount_amount: Decimal::ZERO,
                taxable_amount: Decimal::ZERO,
                cgst: Decimal::ZERO,
                sgst: Decimal::ZERO,
                igst: Decimal::ZERO,
                total_amount: Decimal::ZERO,
            },
            lot: None,
            box_packaging: None,
        };
        line.recompute()?;
        Ok(line)
    }

    /// Attaches a lot identity to the line.
    #[must_use]
    pub fn with_lot(mut self, lot: LotIdentity) -> Self {
        self.lot = Some(lot);
        self
    }

    /// Switches the line to box-based ordering and recomputes.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting inputs fail pricing validation.
    pub fn with_box_packaging(mut self, packaging: BoxPackaging) -> Result<Self, PricingError> {
        self.quantity = packaging.unit_quantity();
        self.rate = packaging.box_rate;
        self.box_packaging = Some(packaging);
        self.recompute()?;
        Ok(self)
    }

    /// Re-derives the line amounts from the current inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs fail pricing validation; the stored
    /// amounts are left untouched in that case.
    pub fn recompute(&mut self) -> Result<(), PricingError> {
        let input = LineInput {
            quantity: self.quantity,
            rate: self.rate,
            discount: self.discount,
            tax: self.tax,
            box_packaging: self.box_packaging,
        };
        self.amounts = compute_line(&input)?;
        Ok(())
    }
}
