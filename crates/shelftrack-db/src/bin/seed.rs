//! # Demo Data Seeder
//!
//! Populates a database with demo businesses, products, and stock
//! history for development and manual testing.
//!
//! ## Usage
//! ```bash
//! cargo run --bin seed                       # seeds ./shelftrack.db
//! SHELFTRACK_DB=/tmp/demo.db cargo run --bin seed
//! ```
//!
//! Movements are recorded through the real ledger so the history rows
//! chain correctly: each product starts at a pre-movement level and
//! ends at the advertised demo quantity.

use tracing::info;
use tracing_subscriber::EnvFilter;

use shelftrack_core::{MovementDirection, NewBusiness, NewProduct};
use shelftrack_db::{Database, DbConfig, DbResult};

#[tokio::main]
async fn main() -> DbResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let path = std::env::var("SHELFTRACK_DB").unwrap_or_else(|_| "shelftrack.db".to_string());
    info!(path = %path, "Seeding demo data");

    let db = Database::new(DbConfig::new(&path)).await?;
    seed(&db).await?;

    info!("Seed complete");
    db.close().await;
    Ok(())
}

async fn seed(db: &Database) -> DbResult<()> {
    let businesses = db.businesses();
    let products = db.products();
    let ledger = db.ledger();

    let techmart = businesses
        .create(NewBusiness {
            name: "TechMart Electronics".into(),
            owner: "John Smith".into(),
            contact: "contact@techmart.com".into(),
            category: "Electronics".into(),
            address: "123 Main Street, Downtown".into(),
        })
        .await?;

    let grocers = businesses
        .create(NewBusiness {
            name: "Fresh Grocers".into(),
            owner: "Asha Patel".into(),
            contact: "hello@freshgrocers.com".into(),
            category: "Grocery".into(),
            address: "456 Oak Avenue, Westside".into(),
        })
        .await?;

    let fashion = businesses
        .create(NewBusiness {
            name: "Fashion Forward".into(),
            owner: "Maria Lopez".into(),
            contact: "info@fashionforward.com".into(),
            category: "Clothing".into(),
            address: "789 Style Blvd, Mall District".into(),
        })
        .await?;

    let home = businesses
        .create(NewBusiness {
            name: "Home & Living Co.".into(),
            owner: "David Chen".into(),
            contact: "support@homeliving.com".into(),
            category: "Home & Garden".into(),
            address: "321 Garden Lane, Suburbia".into(),
        })
        .await?;

    // (name, sku, category, description, price_cents, stock, min_stock, business)
    let catalog: &[(&str, &str, &str, &str, i64, i64, i64, &str)] = &[
        (
            "Wireless Bluetooth Headphones",
            "TECH-WBH-001",
            "Electronics",
            "Premium wireless headphones with noise cancellation",
            79_99,
            25, // +20 shipment below brings this to 45
            10,
            &techmart.id,
        ),
        (
            "USB-C Charging Cable 2m",
            "TECH-USB-002",
            "Electronics",
            "Fast charging USB-C cable, braided nylon",
            14_99,
            20, // -12 orders below brings this to 8
            20,
            &techmart.id,
        ),
        (
            "Organic Avocados (Pack of 4)",
            "GROC-AVO-001",
            "Grocery",
            "Fresh organic avocados, ready to eat",
            6_99,
            120,
            30,
            &grocers.id,
        ),
        (
            "Whole Grain Bread",
            "GROC-BRD-002",
            "Grocery",
            "Freshly baked whole grain bread",
            4_49,
            15, // -10 sales below brings this to 5
            15,
            &grocers.id,
        ),
        (
            "Summer Floral Dress",
            "FASH-DRS-001",
            "Clothing",
            "Light and breezy summer dress with floral print",
            49_99,
            25,
            8,
            &fashion.id,
        ),
        (
            "Classic Denim Jacket",
            "FASH-JKT-002",
            "Clothing",
            "Timeless denim jacket for all seasons",
            89_99,
            3,
            5,
            &fashion.id,
        ),
        (
            "Indoor Plant Pot Set",
            "HOME-POT-001",
            "Home & Garden",
            "Set of 3 ceramic plant pots in various sizes",
            24_99,
            50,
            12,
            &home.id,
        ),
        (
            "Garden Tool Set",
            "HOME-TLS-002",
            "Home & Garden",
            "5-piece stainless steel garden tool set",
            34_99,
            2,
            8,
            &home.id,
        ),
    ];

    let mut by_sku = std::collections::HashMap::new();
    for (name, sku, category, description, price_cents, stock, min_stock, business_id) in catalog {
        let product = products
            .create(NewProduct {
                name: (*name).into(),
                sku: (*sku).into(),
                category: (*category).into(),
                description: Some((*description).into()),
                price_cents: *price_cents,
                current_stock: *stock,
                min_stock: Some(*min_stock),
                business_id: Some((*business_id).into()),
            })
            .await?;
        by_sku.insert(*sku, product.id);
    }

    ledger
        .adjust_stock(
            &by_sku["TECH-WBH-001"],
            20,
            MovementDirection::In,
            Some("New shipment received"),
        )
        .await?;
    ledger
        .adjust_stock(
            &by_sku["TECH-USB-002"],
            12,
            MovementDirection::Out,
            Some("Customer orders"),
        )
        .await?;
    ledger
        .adjust_stock(
            &by_sku["GROC-BRD-002"],
            10,
            MovementDirection::Out,
            Some("Daily sales"),
        )
        .await?;

    info!(
        businesses = 4,
        products = catalog.len(),
        movements = 3,
        "Demo data inserted"
    );
    Ok(())
}
