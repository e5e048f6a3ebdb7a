use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

/// Currency amount held as whole cents; serialized as a decimal number
/// (`179.99`) to match the stored cart format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Price after taking `percent` off, rounded half-up to the cent.
    pub const fn discounted(self, percent: u8) -> Self {
        let kept = 100 - percent as i64;
        Self((self.0 * kept + 50) / 100)
    }

    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(serde::de::Error::custom("price must be a finite number"));
        }
        Ok(Price((amount * 100.0).round() as i64))
    }
}

/// A catalog page; each one owns its product list and its cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Mens,
    Womens,
    Kids,
    Sale,
    NewArrivals,
    Gear,
    Brands,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Mens,
        Category::Womens,
        Category::Kids,
        Category::Sale,
        Category::NewArrivals,
        Category::Gear,
        Category::Brands,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Mens => "mens",
            Category::Womens => "womens",
            Category::Kids => "kids",
            Category::Sale => "sale",
            Category::NewArrivals => "new-arrivals",
            Category::Gear => "gear",
            Category::Brands => "brands",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Mens => "Men's Shoes",
            Category::Womens => "Women's Shoes",
            Category::Kids => "Kids' Shoes",
            Category::Sale => "On Sale",
            Category::NewArrivals => "New Arrivals",
            Category::Gear => "Sport Gear",
            Category::Brands => "All Brands",
        }
    }

    /// Storefront route that shows this page.
    pub fn path(self) -> &'static str {
        match self {
            Category::Mens => "/men's",
            Category::Womens => "/women's",
            Category::Kids => "/kids",
            Category::Sale => "/sale",
            Category::NewArrivals => "/new",
            Category::Gear => "/sport",
            Category::Brands => "/brands",
        }
    }

    /// Tags the page can be narrowed by; empty when the page has no filter bar.
    pub fn filter_tags(self) -> &'static [ProductTag] {
        match self {
            Category::Brands => &[ProductTag::Men, ProductTag::Women, ProductTag::Children],
            Category::Gear => &[
                ProductTag::Men,
                ProductTag::Women,
                ProductTag::Children,
                ProductTag::Accessories,
                ProductTag::Unisex,
            ],
            _ => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ProductTag {
    Men,
    Women,
    Children,
    Accessories,
    Unisex,
}

/// Immutable catalog record, defined at build time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Product {
    /// Unique only within its own category.
    pub id: u32,
    #[schema(value_type = String)]
    pub name: &'static str,
    #[schema(value_type = f64)]
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub original_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<ProductTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[schema(value_type = String)]
    pub image: &'static str,
}

/// One product-quantity pairing, with name and price captured when the
/// product was first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub id: u32,
    pub name: String,
    #[schema(value_type = f64)]
    pub price: Price,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ReviewCategory {
    #[default]
    #[serde(rename = "Men's Shoes")]
    MensShoes,
    #[serde(rename = "Women's Shoes")]
    WomensShoes,
    #[serde(rename = "Kids' Shoes")]
    KidsShoes,
    #[serde(rename = "Sneakers")]
    Sneakers,
}

impl ReviewCategory {
    pub const ALL: [ReviewCategory; 4] = [
        ReviewCategory::MensShoes,
        ReviewCategory::WomensShoes,
        ReviewCategory::KidsShoes,
        ReviewCategory::Sneakers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReviewCategory::MensShoes => "Men's Shoes",
            ReviewCategory::WomensShoes => "Women's Shoes",
            ReviewCategory::KidsShoes => "Kids' Shoes",
            ReviewCategory::Sneakers => "Sneakers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: i64,
    pub category: ReviewCategory,
    pub name: String,
    pub review: String,
    pub rating: u8,
    pub date: NaiveDate,
}
