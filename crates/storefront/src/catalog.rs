//! Static product catalog.
//!
//! The catalog is seeded once at startup and read-only afterwards. Lookups are
//! linear scans; at catalog scale this beats maintaining an index.

use fashionhub_core::{Price, ProductCategory, ProductId};

use crate::models::product::{Product, ProductColor};

/// The read-only set of purchasable products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in FashionHub product list.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(seed_products())
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products in a category, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: ProductCategory) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Case-insensitive free-text search across name, description, and
    /// category.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.matches_query(query))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

fn color(name: &str, value: &str, image: Option<&str>) -> ProductColor {
    ProductColor {
        name: name.to_string(),
        value: value.to_string(),
        image: image.map(String::from),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_lines)]
fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Premium Tagerine Shirt".to_string(),
            description: "A premium quality shirt with elegant floral design perfect for \
                          casual and semi-formal occasions. Made with breathable fabric for \
                          all-day comfort."
                .to_string(),
            price: Price::from_cents(25785),
            category: ProductCategory::Men,
            images: strings(&[
                "https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?w=800&q=80",
                "https://images.unsplash.com/photo-1602810318383-e386cc2a3ccf?w=800&q=80",
            ]),
            sizes: strings(&["S", "M", "L", "XL", "XXL"]),
            colors: vec![
                color(
                    "Cream",
                    "#F5E6D3",
                    Some("https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?w=800&q=80"),
                ),
                color(
                    "Navy",
                    "#1B3A6B",
                    Some("https://images.unsplash.com/photo-1602810318383-e386cc2a3ccf?w=800&q=80"),
                ),
                color(
                    "Olive",
                    "#556B2F",
                    Some("https://images.unsplash.com/photo-1620799139834-6b8f844fbe29?w=800&q=80"),
                ),
            ],
            stock: 50,
        },
        Product {
            id: ProductId::new("2"),
            name: "Tagerine Shirt".to_string(),
            description: "Classic tagerine shirt with modern fit. Perfect for any occasion."
                .to_string(),
            price: Price::from_cents(24032),
            category: ProductCategory::Men,
            images: strings(&[
                "https://images.unsplash.com/photo-1602810318383-e386cc2a3ccf?w=800&q=80",
            ]),
            sizes: strings(&["S", "M", "L", "XL"]),
            colors: vec![
                color("White", "#FFFFFF", None),
                color("Blue", "#4A90E2", None),
            ],
            stock: 30,
        },
        Product {
            id: ProductId::new("3"),
            name: "Leather Court".to_string(),
            description: "Premium leather court jacket for a sophisticated look.".to_string(),
            price: Price::from_cents(32536),
            category: ProductCategory::Women,
            images: strings(&[
                "https://images.unsplash.com/photo-1591047139829-d91aecb6caea?w=800&q=80",
            ]),
            sizes: strings(&["S", "M", "L", "XL"]),
            colors: vec![
                color("Pink", "#D4A5A5", None),
                color("Black", "#000000", None),
            ],
            stock: 20,
        },
        Product {
            id: ProductId::new("4"),
            name: "Leather Tagerine Court".to_string(),
            description: "Elegant leather court with tagerine accents.".to_string(),
            price: Price::from_cents(25785),
            category: ProductCategory::Women,
            images: strings(&[
                "https://images.unsplash.com/photo-1591047139829-d91aecb6caea?w=800&q=80",
            ]),
            sizes: strings(&["S", "M", "L"]),
            colors: vec![color("Tan", "#D2B48C", None)],
            stock: 15,
        },
        Product {
            id: ProductId::new("5"),
            name: "Tagerine Shirt".to_string(),
            description: "Comfortable and stylish shirt for everyday wear.".to_string(),
            price: Price::from_cents(12647),
            category: ProductCategory::Men,
            images: strings(&[
                "https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?w=800&q=80",
            ]),
            sizes: strings(&["S", "M", "L", "XL"]),
            colors: vec![color("Orange", "#FF8C42", None)],
            stock: 40,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_invariants() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.all().len(), 5);
        for product in catalog.all() {
            assert!(!product.images.is_empty());
            assert!(!product.sizes.is_empty());
            assert!(product.price > Price::ZERO);
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::seed();
        let product = catalog.get(&ProductId::new("3")).expect("product 3");
        assert_eq!(product.name, "Leather Court");
        assert_eq!(product.price, Price::from_cents(32536));
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = Catalog::seed();
        assert!(catalog.get(&ProductId::new("999")).is_none());
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.by_category(ProductCategory::Men).len(), 3);
        assert_eq!(catalog.by_category(ProductCategory::Women).len(), 2);
        assert!(catalog.by_category(ProductCategory::Kids).is_empty());
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.search("leather").len(), 2);
        assert_eq!(catalog.search("TAGERINE").len(), 4);
        assert!(catalog.search("sneaker").is_empty());
    }
}
