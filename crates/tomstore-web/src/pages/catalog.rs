//! Catalog page component
//!
//! Placeholder product listing until the store API client lands. Adding a
//! product updates the shared basket snapshot through the context, which
//! is what drives the header badge.

use leptos::prelude::*;
use tomstore_core::{BasketSnapshot, CartLineItem};

use crate::store::{use_basket, BasketContext};

const SAMPLE_PRODUCTS: &[(u64, &str, i64)] = &[
    (1, "Speedster Board 2000", 15000),
    (2, "Woodgrain Satchel", 8000),
    (3, "Trail Runner Boots", 25000),
];

fn add_to_basket(basket: BasketContext, product_id: u64, name: &str, price: i64) {
    let mut snapshot = basket.snapshot().unwrap_or_else(|| BasketSnapshot {
        id: 1,
        buyer_id: "local".to_string(),
        items: Vec::new(),
    });

    if let Some(item) = snapshot
        .items
        .iter_mut()
        .find(|item| item.product_id == product_id)
    {
        item.quantity += 1;
    } else {
        snapshot.items.push(CartLineItem {
            product_id,
            name: name.to_string(),
            price,
            picture_url: None,
            quantity: 1,
        });
    }

    basket.set(snapshot);
}

/// Catalog page - product listing
#[component]
pub fn Catalog() -> impl IntoView {
    let basket = use_basket();

    view! {
        <div class="page catalog-page">
            <h2>"Catalog"</h2>
            <ul class="product-list">
                {SAMPLE_PRODUCTS
                    .iter()
                    .map(|&(product_id, name, price)| {
                        view! {
                            <li class="product-item">
                                <span class="product-name">{name}</span>
                                <span class="product-price">
                                    {format!("${}.{:02}", price / 100, price % 100)}
                                </span>
                                <button
                                    class="product-add"
                                    on:click=move |_| add_to_basket(basket, product_id, name, price)
                                >
                                    "Add to basket"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
