//! Basket snapshot model and cart badge aggregation
//!
//! The snapshot is owned by the host application and may be absent while
//! the basket has not loaded yet. The header is a read-only observer:
//! nothing here mutates basket state or performs I/O.

use serde::{Deserialize, Serialize};

/// One line item in the basket, as supplied by the upstream API.
/// Quantities are validated non-negative upstream and not re-checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub product_id: u64,
    pub name: String,
    /// Unit price in the store's minor currency unit (cents)
    pub price: i64,
    #[serde(default)]
    pub picture_url: Option<String>,
    pub quantity: u32,
}

/// The current basket, externally owned and possibly not yet loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketSnapshot {
    pub id: u64,
    pub buyer_id: String,
    #[serde(default)]
    pub items: Vec<CartLineItem>,
}

impl BasketSnapshot {
    /// Total units across all line items. Zero for an empty basket.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// Badge count for the cart icon: `None` while the snapshot is absent
/// (badge suppressed), otherwise the live quantity sum. Recomputed from
/// the snapshot on every call; never cached.
pub fn cart_item_count(basket: Option<&BasketSnapshot>) -> Option<u32> {
    basket.map(BasketSnapshot::item_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: u64, quantity: u32) -> CartLineItem {
        CartLineItem {
            product_id,
            name: format!("product-{product_id}"),
            price: 1999,
            picture_url: None,
            quantity,
        }
    }

    fn basket(items: Vec<CartLineItem>) -> BasketSnapshot {
        BasketSnapshot {
            id: 1,
            buyer_id: "buyer-1".to_string(),
            items,
        }
    }

    #[test]
    fn test_count_sums_quantities() {
        let snapshot = basket(vec![item(1, 2), item(2, 3)]);
        assert_eq!(cart_item_count(Some(&snapshot)), Some(5));
    }

    #[test]
    fn test_empty_basket_counts_zero_not_absent() {
        let snapshot = basket(vec![]);
        assert_eq!(cart_item_count(Some(&snapshot)), Some(0));
    }

    #[test]
    fn test_absent_basket_suppresses_badge() {
        assert_eq!(cart_item_count(None), None);
    }

    #[test]
    fn test_count_tracks_snapshot_changes() {
        let mut snapshot = basket(vec![item(1, 1)]);
        assert_eq!(cart_item_count(Some(&snapshot)), Some(1));
        snapshot.items.push(item(2, 4));
        assert_eq!(cart_item_count(Some(&snapshot)), Some(5));
    }

    #[test]
    fn test_deserializes_camel_case_wire_format() {
        let json = r#"{
            "id": 7,
            "buyerId": "0f8fad5b",
            "items": [
                {"productId": 3, "name": "Boot", "price": 2500, "pictureUrl": "/images/boot.png", "quantity": 2}
            ]
        }"#;
        let snapshot: BasketSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.buyer_id, "0f8fad5b");
        assert_eq!(snapshot.item_count(), 2);
        assert_eq!(snapshot.items[0].picture_url.as_deref(), Some("/images/boot.png"));
    }
}
