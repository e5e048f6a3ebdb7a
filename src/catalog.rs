//! Static product data for every storefront page.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Category, Price, Product, ProductTag};

const fn item(id: u32, name: &'static str, cents: i64, rating: u8, image: &'static str) -> Product {
    Product {
        id,
        name,
        price: Price::from_cents(cents),
        original_price: None,
        discount_percent: None,
        tag: None,
        rating: Some(rating),
        image,
    }
}

const fn tagged(
    id: u32,
    name: &'static str,
    tag: ProductTag,
    cents: i64,
    rating: u8,
    image: &'static str,
) -> Product {
    Product {
        tag: Some(tag),
        ..item(id, name, cents, rating, image)
    }
}

const fn on_sale(
    id: u32,
    name: &'static str,
    original_cents: i64,
    discount: u8,
    rating: u8,
    image: &'static str,
) -> Product {
    let original = Price::from_cents(original_cents);
    Product {
        price: original.discounted(discount),
        original_price: Some(original),
        discount_percent: Some(discount),
        ..item(id, name, original_cents, rating, image)
    }
}

static MENS: [Product; 8] = [
    item(1, "Nike - Ex-O-Fit Hi - Black - Mens", 179_99, 4, "air-jordan-34.jpg"),
    item(2, "Nike - Free TR V3 - Grey - Mens", 100_99, 4, "niky.jfif"),
    item(3, "Nike - Classic Slide - Black - Mens", 200_99, 5, "tick.jpg"),
    item(4, "Nike - Ultraboost 22 - White - Mens", 150_00, 5, "white.jpg"),
    item(5, "Nike - RS-X3 - Red/Black - Mens", 130_00, 4, "dope.jpg"),
    item(6, "Nike - Chuck Taylor - Black - Mens", 90_00, 4, "lv-nike.jpg"),
    item(7, "Nike - Old Skool - Blue - Mens", 85_00, 3, "nike-tiffany.jpg"),
    item(8, "Nike - Retro 5 - Green - Mens", 250_00, 5, "airmax.jpg"),
];

static WOMENS: [Product; 8] = [
    item(1, "Nike - Air Max 270 - Pink", 150_99, 5, "women-nike.jpg"),
    item(2, "Nike - NMD R1 - Black", 120_00, 4, "women-1.jpg"),
    item(3, "Nike - Cali Star - White", 110_99, 4, "women-2.jpg"),
    item(4, "Nike - Club C 85 - Grey", 90_50, 3, "women-3.jpg"),
    item(5, "Nike - All Star - Red", 85_00, 4, "women-4.jpg"),
    item(6, "Nike - Old Skool - Purple", 80_00, 3, "women-6.jpg"),
    item(7, "Nike - Air 1 - Blue", 210_00, 5, "women-7.jpg"),
    item(8, "Nike - Go Walk - Yellow", 75_00, 4, "women-8.jpg"),
];

static KIDS: [Product; 8] = [
    item(1, "Nike - Revolution 5 - Kids", 49_99, 4, "kid-1.jpg"),
    item(2, "Nike - Lite Racer 2.0 - Kids", 45_99, 5, "kid-2.jpg"),
    item(3, "Nike - Future Rider - Kids", 39_99, 4, "kid-3.jpg"),
    item(4, "Nike - Royal Classic - Kids", 35_00, 3, "kid-4.jpg"),
    item(5, "Nike - Classic Slip-On - Kids", 40_00, 4, "kid-5.jpg"),
    item(6, "Nike - Chuck Taylor - Kids", 30_00, 4, "kid-6.jpg"),
    item(7, "Nike - Retro 3 - Kids", 60_00, 5, "kid-7.jpg"),
    item(8, "Nike - Light-Up Sneakers - Kids", 55_00, 5, "kid-8.jpg"),
];

static SALE: [Product; 6] = [
    on_sale(1, "Nike Air Max 270", 200_00, 20, 4, "airmax.jpg"),
    on_sale(2, "Nike Ultraboost 22", 180_00, 30, 5, "Q7275nike_basketball_3056-mini.jpg"),
    on_sale(3, "Nike Suede Classic", 150_00, 25, 4, "milky.jfif"),
    on_sale(4, "Nike Old Skool", 120_00, 15, 4, "striking-shoes.avif"),
    on_sale(5, "Nike Chuck Taylor", 110_00, 20, 4, "dope.jpg"),
    on_sale(6, "Nike Jordan Retro 5", 250_00, 35, 5, "AIR+MAX+DN8+(GS).png"),
];

static NEW_ARRIVALS: [Product; 6] = [
    item(1, "Nike ZoomX Vaporfly", 250_00, 5, "4f51d7196acde3f087792c03069de0a2.jpg"),
    item(2, "Nike NMD R1 V3", 180_00, 4, "kid-1.jpg"),
    item(3, "Nike Future Rider", 150_00, 4, "women-4.jpg"),
    item(4, "Nike Era 59", 120_00, 4, "women-nike.jpg"),
    item(5, "Nike Run Star Motion", 110_00, 4, "lv-nike.jpg"),
    item(6, "Nike Jordan Flight Club 91", 260_00, 5, "air-jordan-34.jpg"),
];

static GEAR: [Product; 8] = [
    tagged(1, "Men's Casual Outfit", ProductTag::Men, 129_99, 4, "male-outfit.jpg"),
    tagged(2, "Men's Formal Wear", ProductTag::Men, 159_99, 5, "formal-wear.jpg"),
    tagged(3, "Women's Summer Outfit", ProductTag::Women, 119_99, 4, "women-outfit.jpg"),
    tagged(4, "Women's Activewear", ProductTag::Women, 99_99, 4, "active.jpg"),
    tagged(5, "Kid's Casual Wear", ProductTag::Children, 89_99, 4, "kid-outfit.jpg"),
    tagged(6, "Kid's Sportswear", ProductTag::Children, 69_99, 4, "kid-2-outfit.jpg"),
    tagged(7, "Unisex Accessories Pack", ProductTag::Accessories, 49_99, 4, "accessories.jpg"),
    tagged(8, "Casual Wear Bundle", ProductTag::Unisex, 109_99, 5, "casual-wear.jpg"),
];

static BRANDS: [Product; 9] = [
    tagged(1, "Nike - Ex-O-Fit Hi", ProductTag::Men, 179_99, 4, "lv-nike.jpg"),
    tagged(2, "Nike - Free TR V3", ProductTag::Men, 100_99, 4, "tick.jpg"),
    tagged(3, "Nike - RS-X3", ProductTag::Men, 130_00, 4, "airmax.jpg"),
    tagged(4, "Nike - Chuck Taylor", ProductTag::Men, 90_00, 4, "nike-tiffany.jpg"),
    tagged(5, "Nike - Ultraboost 22", ProductTag::Women, 150_00, 5, "pink.webp"),
    tagged(6, "Nike - Air Zoom Pegasus", ProductTag::Women, 120_99, 4, "pink.webp"),
    tagged(7, "Nike - Retro 5", ProductTag::Children, 250_00, 5, "striking-shoes.avif"),
    tagged(8, "Nike - Light-Up Sneakers", ProductTag::Children, 55_00, 5, "pair.jpg"),
    tagged(9, "Nike - Classic Slip-On", ProductTag::Children, 40_00, 4, "dope.jpg"),
];

pub fn products(category: Category) -> &'static [Product] {
    match category {
        Category::Mens => &MENS,
        Category::Womens => &WOMENS,
        Category::Kids => &KIDS,
        Category::Sale => &SALE,
        Category::NewArrivals => &NEW_ARRIVALS,
        Category::Gear => &GEAR,
        Category::Brands => &BRANDS,
    }
}

/// Products of `category`, narrowed to `tag` when one is given.
pub fn filtered(category: Category, tag: Option<ProductTag>) -> Vec<Product> {
    products(category)
        .iter()
        .filter(|p| tag.is_none() || p.tag == tag)
        .copied()
        .collect()
}

pub fn find(category: Category, id: u32) -> Option<&'static Product> {
    products(category).iter().find(|p| p.id == id)
}

/// Entry of the quick-search index behind the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct SearchItem {
    pub id: u32,
    #[schema(value_type = String)]
    pub name: &'static str,
    #[schema(value_type = String)]
    pub category: &'static str,
    #[schema(value_type = f64)]
    pub price: Price,
}

pub static SEARCH_INDEX: [SearchItem; 4] = [
    SearchItem {
        id: 1,
        name: "Running Shoes",
        category: "Men's",
        price: Price::from_cents(120_00),
    },
    SearchItem {
        id: 2,
        name: "Basketball Sneakers",
        category: "Men's",
        price: Price::from_cents(140_00),
    },
    SearchItem {
        id: 3,
        name: "Tennis Shoes",
        category: "Women's",
        price: Price::from_cents(100_00),
    },
    SearchItem {
        id: 4,
        name: "Kids' Sports Shoes",
        category: "Kids",
        price: Price::from_cents(80_00),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_within_each_page() {
        for category in Category::ALL {
            let mut ids: Vec<u32> = products(category).iter().map(|p| p.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), products(category).len(), "{category}");
        }
    }

    #[test]
    fn sale_prices_apply_the_discount() {
        let suede = find(Category::Sale, 3).expect("suede classic");
        assert_eq!(suede.price, Price::from_cents(112_50));
        assert_eq!(suede.original_price, Some(Price::from_cents(150_00)));
    }

    #[test]
    fn tag_filter_only_narrows_tagged_pages() {
        assert_eq!(filtered(Category::Gear, Some(ProductTag::Unisex)).len(), 1);
        assert_eq!(filtered(Category::Brands, Some(ProductTag::Children)).len(), 3);
        assert!(filtered(Category::Mens, Some(ProductTag::Men)).is_empty());
        assert_eq!(filtered(Category::Mens, None).len(), 8);
    }
}
