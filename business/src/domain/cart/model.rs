use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::errors::CartError;
use crate::domain::catalog::model::{Product, ProductId, StockRecord};

/// A product together with the quantity the shopper selected.
///
/// Serialized flat, e.g. `{"id":1,"title":"Shoe","price":10.0,"image":"..","amount":2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl CartLineItem {
    pub fn new(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.amount)
    }
}

/// Ordered cart snapshot. Every mutation yields a new snapshot; the receiver
/// is never modified in place.
///
/// Decoding rejects zero amounts and repeated product ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLineItem>", into = "Vec<CartLineItem>")]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn find(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.find(product_id).map_or(0, |item| item.amount)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Adds one unit of `stock.id`, provided the stock covers it.
    ///
    /// An existing line is incremented. A new line needs the catalog `product`;
    /// without it the call fails with `NotInCart`.
    pub fn with_added_unit(
        &self,
        stock: &StockRecord,
        product: Option<&Product>,
    ) -> Result<Cart, CartError> {
        if stock.amount <= self.quantity_of(stock.id) {
            return Err(CartError::OutOfStock);
        }

        if self.contains(stock.id) {
            return Ok(self.map_line(stock.id, |item| CartLineItem {
                amount: item.amount + 1,
                ..item.clone()
            }));
        }

        let product = product.ok_or(CartError::NotInCart)?;
        let mut items = self.items.clone();
        items.push(CartLineItem::new(Product {
            id: stock.id,
            ..product.clone()
        }));
        Ok(Cart { items })
    }

    /// Sets the quantity of an existing line to exactly `amount`.
    pub fn with_amount(
        &self,
        product_id: ProductId,
        amount: u32,
        stock: &StockRecord,
    ) -> Result<Cart, CartError> {
        if amount < 1 {
            return Err(CartError::InvalidAmount);
        }
        if stock.amount < amount {
            return Err(CartError::OutOfStock);
        }
        if !self.contains(product_id) {
            return Err(CartError::NotInCart);
        }

        Ok(self.map_line(product_id, |item| CartLineItem {
            amount,
            ..item.clone()
        }))
    }

    pub fn without(&self, product_id: ProductId) -> Result<Cart, CartError> {
        if !self.contains(product_id) {
            return Err(CartError::NotInCart);
        }

        Ok(Cart {
            items: self
                .items
                .iter()
                .filter(|item| item.id() != product_id)
                .cloned()
                .collect(),
        })
    }

    fn map_line<F>(&self, product_id: ProductId, f: F) -> Cart
    where
        F: Fn(&CartLineItem) -> CartLineItem,
    {
        Cart {
            items: self
                .items
                .iter()
                .map(|item| {
                    if item.id() == product_id {
                        f(item)
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        }
    }
}

impl TryFrom<Vec<CartLineItem>> for Cart {
    type Error = CartError;

    fn try_from(items: Vec<CartLineItem>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.amount < 1 {
                return Err(CartError::InvalidAmount);
            }
            if !seen.insert(item.id()) {
                return Err(CartError::DuplicateProduct);
            }
        }
        Ok(Self { items })
    }
}

impl From<Cart> for Vec<CartLineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
