//! In-memory cart. One line per product id; checkout consumes the lines and
//! clears the cart only after the order is confirmed as paid.

use super::product::Product;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i32,
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges into an existing line for the same product id, otherwise
    /// inserts a new one. Quantities below 1 are clamped to 1.
    pub fn add_item(&mut self, product: &Product, quantity: i32) {
        let quantity = quantity.max(1);
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }
    }

    /// Replaces the line's quantity; a quantity of zero or less removes the
    /// line. Unknown product ids are a no-op.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Removing an absent line is a no-op.
    pub fn remove_item(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn subtotal(&self) -> i64 {
        self.lines
            .iter()
            .map(|l| l.product.price * i64::from(l.quantity))
            .sum()
    }

    /// Sum of quantities, used for the header badge.
    pub fn item_count(&self) -> i32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
