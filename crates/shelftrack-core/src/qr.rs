//! # QR Payload Codec
//!
//! Encoding and resolution of per-product QR payloads.
//!
//! ## Scan Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Scan / Manual Lookup Flow                        │
//! │                                                                     │
//! │  scanned or typed string                                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  JSON decode as QrPayload?                                          │
//! │       │                                                             │
//! │       ├── YES: look up by payload id OR payload SKU                 │
//! │       │                                                             │
//! │       └── NO:  treat the raw string as a literal SKU or id          │
//! │                                                                     │
//! │  SKU comparison is case-insensitive in both paths.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The encoded byte format is not a compatibility surface - the decoder
//! is this same module - so plain JSON is sufficient.

use serde::{Deserialize, Serialize};

use crate::types::Product;

/// The structured content of a product's QR code.
///
/// `business` carries the display name (the read-time join result) so
/// that a standalone scan still shows where the product lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub business: String,
}

impl QrPayload {
    /// Builds the payload for a product.
    pub fn for_product(product: &Product) -> QrPayload {
        QrPayload {
            id: product.id.clone(),
            sku: product.sku.clone(),
            name: product.name.clone(),
            business: product
                .business_name
                .clone()
                .unwrap_or_else(|| "Unknown Business".to_string()),
        }
    }

    /// Serializes the payload to the text embedded in the QR image.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Attempts to parse a scanned string as a structured payload.
    pub fn decode(data: &str) -> Option<QrPayload> {
        serde_json::from_str(data).ok()
    }
}

/// Resolves a scanned or typed string to a product.
///
/// Tries a structured decode first and falls back to treating the raw
/// input as a literal SKU or id. Returns `None` when nothing matches.
pub fn resolve_scan<'a>(products: &'a [Product], input: &str) -> Option<&'a Product> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(payload) = QrPayload::decode(input) {
        return products
            .iter()
            .find(|p| p.id == payload.id || p.sku.eq_ignore_ascii_case(&payload.sku));
    }

    products
        .iter()
        .find(|p| p.sku.eq_ignore_ascii_case(input) || p.id == input)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: &str, sku: &str, name: &str) -> Product {
        let now = Utc::now();
        Product {
            id: id.to_string(),
            name: name.to_string(),
            sku: sku.to_string(),
            category: "Electronics".to_string(),
            description: None,
            price_cents: 7999,
            current_stock: 45,
            min_stock: 10,
            business_id: Some("biz1".to_string()),
            business_name: Some("TechMart Electronics".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let p = product("prod1", "TECH-WBH-001", "Wireless Bluetooth Headphones");
        let payload = QrPayload::for_product(&p);
        let encoded = payload.encode().unwrap();
        assert_eq!(QrPayload::decode(&encoded), Some(payload));
    }

    #[test]
    fn test_payload_uses_fallback_business_name() {
        let mut p = product("prod1", "TECH-WBH-001", "Headphones");
        p.business_name = None;
        assert_eq!(QrPayload::for_product(&p).business, "Unknown Business");
    }

    #[test]
    fn test_resolve_structured_payload() {
        let products = vec![
            product("prod1", "TECH-WBH-001", "Headphones"),
            product("prod2", "TECH-USB-002", "USB Cable"),
        ];
        let encoded = QrPayload::for_product(&products[1]).encode().unwrap();
        let found = resolve_scan(&products, &encoded).unwrap();
        assert_eq!(found.id, "prod2");
    }

    #[test]
    fn test_resolve_raw_sku_is_case_insensitive() {
        let products = vec![product("prod1", "TECH-WBH-001", "Headphones")];
        assert!(resolve_scan(&products, "tech-wbh-001").is_some());
        assert!(resolve_scan(&products, "TECH-WBH-001").is_some());
    }

    #[test]
    fn test_resolve_raw_id() {
        let products = vec![product("prod1", "TECH-WBH-001", "Headphones")];
        assert!(resolve_scan(&products, "prod1").is_some());
    }

    #[test]
    fn test_resolve_unknown_input() {
        let products = vec![product("prod1", "TECH-WBH-001", "Headphones")];
        assert!(resolve_scan(&products, "NO-SUCH-SKU").is_none());
        assert!(resolve_scan(&products, "").is_none());
        assert!(resolve_scan(&products, r#"{"id":"x","sku":"y","name":"z","business":"b"}"#).is_none());
    }
}
