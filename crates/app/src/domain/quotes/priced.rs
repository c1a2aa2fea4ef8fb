//! Priced quotes: the amounts to store, computed before the transaction opens.

use cotizador::cart::CartLine;

use crate::domain::{
    orders::{data::NewOrderItem, records::OrderItemUuid},
    products::records::ProductUuid,
    quotes::{draft::QuoteDraft, errors::QuotesServiceError},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PricedQuote {
    pub(crate) subtotal: u64,
    pub(crate) discount: i64,
    pub(crate) total: u64,
    pub(crate) items: Vec<NewOrderItem>,
}

impl PricedQuote {
    pub(crate) fn from_draft(draft: &QuoteDraft) -> Result<Self, QuotesServiceError> {
        let totals = draft.totals()?;

        let items = draft
            .cart
            .lines()
            .iter()
            .map(|line| price_line(draft, line))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            subtotal: u64::try_from(totals.subtotal().to_minor_units())?,
            discount: totals.discount().to_minor_units(),
            total: u64::try_from(totals.total().to_minor_units())?,
            items,
        })
    }

    pub(crate) fn products(&self) -> Vec<ProductUuid> {
        self.items.iter().map(|item| item.product_uuid).collect()
    }
}

fn price_line(draft: &QuoteDraft, line: &CartLine<'_>) -> Result<NewOrderItem, QuotesServiceError> {
    let unit_price = line.unit_price(draft.order_type).to_minor_units();
    let subtotal = line.subtotal(draft.order_type)?.to_minor_units();

    Ok(NewOrderItem {
        uuid: OrderItemUuid::new(),
        product_uuid: ProductUuid::from(line.product_id()),
        quantity: line.quantity(),
        unit_price: u64::try_from(unit_price)?,
        subtotal: u64::try_from(subtotal)?,
    })
}
