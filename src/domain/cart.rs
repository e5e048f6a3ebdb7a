use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::{CartLine, Price, Product};

/// In-memory cart for one category page. The persisted copy is a mirror of
/// `lines`, rewritten after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Receipt {
    /// Formatted with two decimals, e.g. `"359.98"`.
    pub total: String,
    pub lines: usize,
    pub items: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Your cart is empty!")]
    Empty,
}

impl Cart {
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Bumps the existing line for `product` or appends a new one.
    pub fn add(&mut self, product: &Product) -> &CartLine {
        let index = match self.lines.iter().position(|line| line.id == product.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
                index
            }
            None => {
                self.lines.push(CartLine {
                    id: product.id,
                    name: product.name.to_string(),
                    price: product.price,
                    quantity: 1,
                });
                self.lines.len() - 1
            }
        };
        &self.lines[index]
    }

    /// Returns whether a line was removed.
    pub fn remove(&mut self, product_id: u32) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != product_id);
        self.lines.len() != before
    }

    pub fn set_quantity(&mut self, product_id: u32, raw: &str) -> Option<&CartLine> {
        let quantity = parse_quantity(raw);
        let line = self.lines.iter_mut().find(|line| line.id == product_id)?;
        line.quantity = quantity;
        Some(&*line)
    }

    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Empties the cart and returns what was bought.
    pub fn checkout(&mut self) -> Result<Receipt, CheckoutError> {
        if self.lines.is_empty() {
            return Err(CheckoutError::Empty);
        }
        let receipt = Receipt {
            total: self.total().to_string(),
            lines: self.lines.len(),
            items: self.item_count(),
        };
        self.lines.clear();
        Ok(receipt)
    }
}

/// Reads a quantity typed by the shopper. Leading whitespace and an optional
/// sign are accepted and anything after the digits is ignored. Input without
/// digits, and anything below one, becomes 1.
pub fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit);

    let mut seen = false;
    let mut value: u32 = 0;
    for digit in digits {
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u32::from(digit - b'0'));
    }

    if !seen || negative || value == 0 {
        1
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::Category;

    fn product(id: u32) -> &'static Product {
        catalog::find(Category::Mens, id).expect("catalog product")
    }

    #[test]
    fn adding_twice_bumps_one_line() {
        let mut cart = Cart::default();
        cart.add(product(1));
        let line = cart.add(product(1)).clone();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(line.quantity, 2);
        assert_eq!(cart.total(), Price::from_cents(359_98));
    }

    #[test]
    fn removing_absent_product_changes_nothing() {
        let mut cart = Cart::default();
        cart.add(product(2));
        let before = cart.clone();
        assert!(!cart.remove(7));
        assert_eq!(cart, before);
    }

    #[test]
    fn quantity_parsing_falls_back_to_one() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("  12 pairs"), 12);
        assert_eq!(parse_quantity("+4"), 4);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-5"), 1);
        assert_eq!(parse_quantity("99999999999"), u32::MAX);
    }

    #[test]
    fn set_quantity_ignores_missing_lines() {
        let mut cart = Cart::default();
        cart.add(product(4));
        assert!(cart.set_quantity(5, "3").is_none());
        assert_eq!(cart.set_quantity(4, "3").map(|l| l.quantity), Some(3));
        assert_eq!(cart.total(), Price::from_cents(450_00));
    }

    #[test]
    fn checkout_requires_lines() {
        let mut cart = Cart::default();
        assert_eq!(cart.checkout(), Err(CheckoutError::Empty));

        cart.add(product(6));
        cart.add(product(7));
        cart.set_quantity(7, "2");
        let receipt = cart.checkout().expect("receipt");
        assert_eq!(receipt.total, "260.00");
        assert_eq!(receipt.lines, 2);
        assert_eq!(receipt.items, 3);
        assert!(cart.is_empty());
    }
}
