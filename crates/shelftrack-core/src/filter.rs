//! # Filter/Search Engine
//!
//! Pure, in-memory filtering for the product finder and business list.
//!
//! ## How Filtering Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Product Filter Pipeline                          │
//! │                                                                     │
//! │  fetched list (most-recently-created first)                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  text? ── case-insensitive substring on name | SKU | description    │
//! │       ▼                                                             │
//! │  business? ── exact id match (None = all)                           │
//! │       ▼                                                             │
//! │  category? ── exact case-sensitive match (None = all)               │
//! │       ▼                                                             │
//! │  price bucket? ── low (<500) | mid [500,2000) | high (>=2000)       │
//! │       ▼                                                             │
//! │  stock? ── in-stock | low-stock (excludes out-of-stock)             │
//! │       ▼                                                             │
//! │  order-preserving subsequence of the input                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All predicates are conjunctive (AND): a product is included iff it
//! satisfies every active predicate. Everything here is a pure function
//! of its inputs - no hidden state, safe to re-run as filters change.

use crate::status::StockStatus;
use crate::types::{Business, Product};

// =============================================================================
// Price Buckets
// =============================================================================

/// Lower edge of the "mid" price bucket, in minor currency units.
pub const MID_PRICE_FLOOR_CENTS: i64 = 500_00;

/// Lower edge of the "high" price bucket, in minor currency units.
pub const HIGH_PRICE_FLOOR_CENTS: i64 = 2_000_00;

/// Price range predicate for the product finder.
///
/// Thresholds are currency-unit-agnostic: 500 and 2000 whole units,
/// expressed here in cents because prices are stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBucket {
    /// Any price.
    #[default]
    All,
    /// Below 500 units.
    Low,
    /// 500 units inclusive to 2000 units exclusive.
    Mid,
    /// 2000 units and above.
    High,
}

impl PriceBucket {
    /// Whether a price (in cents) falls in this bucket.
    pub fn matches(&self, price_cents: i64) -> bool {
        match self {
            PriceBucket::All => true,
            PriceBucket::Low => price_cents < MID_PRICE_FLOOR_CENTS,
            PriceBucket::Mid => {
                (MID_PRICE_FLOOR_CENTS..HIGH_PRICE_FLOOR_CENTS).contains(&price_cents)
            }
            PriceBucket::High => price_cents >= HIGH_PRICE_FLOOR_CENTS,
        }
    }
}

// =============================================================================
// Stock Availability Filter
// =============================================================================

/// Availability predicate for the product finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockFilter {
    /// Any stock level.
    #[default]
    All,
    /// Strictly above the minimum threshold.
    InStock,
    /// At or below the threshold but not empty. Out-of-stock products
    /// are deliberately excluded from this bucket.
    LowStock,
}

impl StockFilter {
    /// Whether a stock level passes this filter.
    pub fn matches(&self, current_stock: i64, min_stock: i64) -> bool {
        let status = StockStatus::classify(current_stock, min_stock);
        match self {
            StockFilter::All => true,
            StockFilter::InStock => status == StockStatus::Normal,
            StockFilter::LowStock => status.is_low(),
        }
    }
}

// =============================================================================
// Product Filter
// =============================================================================

/// The full set of product finder predicates.
///
/// `Default` is the all-sentinels filter: it matches every product, so
/// `filter_products(list, &ProductFilter::default())` returns the input
/// unchanged and in the same order.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Free-text query matched against name, SKU, and description.
    pub text: String,

    /// Restrict to one business (`None` = all businesses).
    pub business_id: Option<String>,

    /// Restrict to one category, exact match (`None` = all categories).
    pub category: Option<String>,

    /// Price range predicate.
    pub price: PriceBucket,

    /// Availability predicate.
    pub stock: StockFilter,
}

impl ProductFilter {
    /// Whether a single product satisfies every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        let text = self.text.trim().to_lowercase();
        let matches_text = text.is_empty()
            || product.name.to_lowercase().contains(&text)
            || product.sku.to_lowercase().contains(&text)
            || product
                .description
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&text);

        let matches_business = match &self.business_id {
            None => true,
            Some(id) => product.business_id.as_deref() == Some(id.as_str()),
        };

        let matches_category = match &self.category {
            None => true,
            Some(category) => product.category == *category,
        };

        matches_text
            && matches_business
            && matches_category
            && self.price.matches(product.price_cents)
            && self.stock.matches(product.current_stock, product.min_stock)
    }
}

/// Filters a product list, preserving the caller's ordering.
///
/// Pure function: deterministic given the same list and filter values,
/// and idempotent - re-filtering a filtered result with the same
/// predicates returns the same set.
pub fn filter_products<'a>(products: &'a [Product], filter: &ProductFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

// =============================================================================
// Business Filter
// =============================================================================

/// Filters a business list by free text, preserving ordering.
///
/// Case-insensitive substring match against name OR category; empty
/// text matches everything.
pub fn filter_businesses<'a>(businesses: &'a [Business], text: &str) -> Vec<&'a Business> {
    let text = text.trim().to_lowercase();
    businesses
        .iter()
        .filter(|b| {
            text.is_empty()
                || b.name.to_lowercase().contains(&text)
                || b.category.to_lowercase().contains(&text)
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: &str, name: &str, sku: &str) -> Product {
        let now = Utc::now();
        Product {
            id: id.to_string(),
            name: name.to_string(),
            sku: sku.to_string(),
            category: "Grocery".to_string(),
            description: None,
            price_cents: 699,
            current_stock: 50,
            min_stock: 10,
            business_id: Some("biz2".to_string()),
            business_name: Some("Fresh Grocers".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_products() -> Vec<Product> {
        let mut list = vec![
            product("p1", "Organic Avocados (Pack of 4)", "GROC-AVO-001"),
            product("p2", "Whole Grain Bread", "GROC-BRD-002"),
            product("p3", "Wireless Bluetooth Headphones", "TECH-WBH-001"),
            product("p4", "USB-C Charging Cable 2m", "TECH-USB-002"),
            product("p5", "Summer Floral Dress", "FASH-DRS-001"),
            product("p6", "Classic Denim Jacket", "FASH-JKT-002"),
            product("p7", "Indoor Plant Pot Set", "HOME-POT-001"),
            product("p8", "Garden Tool Set", "HOME-TLS-002"),
            product("p9", "Greek Yogurt", "GROC-YOG-003"),
            product("p10", "Almond Milk", "GROC-MLK-004"),
        ];
        list[2].category = "Electronics".to_string();
        list[2].business_id = Some("biz1".to_string());
        list[3].category = "Electronics".to_string();
        list[3].business_id = Some("biz1".to_string());
        list
    }

    #[test]
    fn test_empty_filter_returns_input_unchanged() {
        let products = sample_products();
        let filtered = filter_products(&products, &ProductFilter::default());
        assert_eq!(filtered.len(), products.len());
        for (original, kept) in products.iter().zip(filtered) {
            assert_eq!(original.id, kept.id);
        }
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        let products = sample_products();
        for query in ["avocado", "AVOCADO", "aVoCaDo"] {
            let filter = ProductFilter {
                text: query.to_string(),
                ..Default::default()
            };
            let filtered = filter_products(&products, &filter);
            assert_eq!(filtered.len(), 1, "query {query:?}");
            assert_eq!(filtered[0].id, "p1");
        }
    }

    #[test]
    fn test_text_filter_matches_sku_and_description() {
        let mut products = sample_products();
        products[1].description = Some("Freshly baked whole grain bread".to_string());

        let by_sku = ProductFilter {
            text: "groc-brd".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_products(&products, &by_sku).len(), 1);

        let by_description = ProductFilter {
            text: "freshly baked".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_products(&products, &by_description).len(), 1);
    }

    #[test]
    fn test_business_and_category_filters() {
        let products = sample_products();

        let by_business = ProductFilter {
            business_id: Some("biz1".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_products(&products, &by_business).len(), 2);

        let by_category = ProductFilter {
            category: Some("Electronics".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_products(&products, &by_category).len(), 2);

        // Category match is case-sensitive
        let wrong_case = ProductFilter {
            category: Some("electronics".to_string()),
            ..Default::default()
        };
        assert!(filter_products(&products, &wrong_case).is_empty());
    }

    #[test]
    fn test_price_buckets() {
        assert!(PriceBucket::Low.matches(499_99));
        assert!(!PriceBucket::Low.matches(500_00));
        assert!(PriceBucket::Mid.matches(500_00));
        assert!(PriceBucket::Mid.matches(1_999_99));
        assert!(!PriceBucket::Mid.matches(2_000_00));
        assert!(PriceBucket::High.matches(2_000_00));
        assert!(PriceBucket::All.matches(0));
    }

    #[test]
    fn test_stock_filter_excludes_out_of_stock_from_low() {
        // in-stock: above threshold
        assert!(StockFilter::InStock.matches(11, 10));
        assert!(!StockFilter::InStock.matches(10, 10));

        // low-stock: 0 < current <= min
        assert!(StockFilter::LowStock.matches(10, 10));
        assert!(StockFilter::LowStock.matches(1, 10));
        assert!(!StockFilter::LowStock.matches(0, 10));
        assert!(!StockFilter::LowStock.matches(11, 10));
    }

    #[test]
    fn test_low_stock_product_appears_only_in_low_bucket() {
        let mut products = sample_products();
        products[3].current_stock = 8;
        products[3].min_stock = 20;

        let low = ProductFilter {
            stock: StockFilter::LowStock,
            ..Default::default()
        };
        let low_ids: Vec<&str> = filter_products(&products, &low)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert!(low_ids.contains(&"p4"));

        let in_stock = ProductFilter {
            stock: StockFilter::InStock,
            ..Default::default()
        };
        let in_ids: Vec<&str> = filter_products(&products, &in_stock)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert!(!in_ids.contains(&"p4"));
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let products = sample_products();
        let filter = ProductFilter {
            text: "usb".to_string(),
            business_id: Some("biz2".to_string()), // p4 belongs to biz1
            ..Default::default()
        };
        assert!(filter_products(&products, &filter).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let products = sample_products();
        let filter = ProductFilter {
            text: "groc".to_string(),
            ..Default::default()
        };

        let once: Vec<Product> = filter_products(&products, &filter)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_products(&once, &filter);

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_filter_businesses_matches_name_or_category() {
        let now = Utc::now();
        let business = |id: &str, name: &str, category: &str| Business {
            id: id.to_string(),
            name: name.to_string(),
            owner: "Owner".to_string(),
            contact: "owner@example.com".to_string(),
            category: category.to_string(),
            address: String::new(),
            created_at: now,
            updated_at: now,
        };
        let businesses = vec![
            business("b1", "TechMart Electronics", "Electronics"),
            business("b2", "Fresh Grocers", "Grocery"),
            business("b3", "Fashion Forward", "Clothing"),
        ];

        assert_eq!(filter_businesses(&businesses, "").len(), 3);
        assert_eq!(filter_businesses(&businesses, "fresh").len(), 1);
        assert_eq!(filter_businesses(&businesses, "ELECTRONICS").len(), 1);
        assert!(filter_businesses(&businesses, "bakery").is_empty());
    }
}
